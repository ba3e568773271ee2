pub mod controls;
pub mod data_kind;
pub mod descriptor;
pub mod fields;
pub mod number;
pub mod sizing;
pub mod viewport;

pub use data_kind::DataKind;
pub use descriptor::{Descriptor, ParseOptions};
pub use fields::{FieldKey, FieldValue, FieldVisibility};
pub use number::NumberSettings;
pub use sizing::SizingSettings;
pub use viewport::Viewport;

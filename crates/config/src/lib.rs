// Settings persistence: reads only what the descriptor exposes as visible.

pub mod projection;
pub mod store;

pub use projection::{apply_projection, visible_projection};
pub use store::SettingsStore;

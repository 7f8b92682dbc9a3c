pub mod model;
pub mod render;

pub use model::{ScanReport, ToolInfo};

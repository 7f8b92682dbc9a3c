pub mod extract;
pub mod model;

pub use extract::extract;
pub use model::FileMetadata;

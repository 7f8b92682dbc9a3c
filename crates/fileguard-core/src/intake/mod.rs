pub mod gate;
pub mod handle;
pub mod samples;

pub use gate::check_size;
pub use handle::FileHandle;

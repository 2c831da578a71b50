pub mod file;

pub use file::FileDestination;

pub mod merge_and_write;
pub mod update_records;

pub use merge_and_write::{MergeAndWriteUseCase, MergeOutcome};
pub use update_records::{UpdateRecordsUseCase, UpdateReport};

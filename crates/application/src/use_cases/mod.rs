pub mod merge;
pub mod sources;

pub use merge::{MergeAndWriteUseCase, MergeOutcome, UpdateRecordsUseCase, UpdateReport};
pub use sources::RefreshSourceUseCase;

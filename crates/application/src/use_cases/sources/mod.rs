pub mod refresh_source;

pub use refresh_source::RefreshSourceUseCase;

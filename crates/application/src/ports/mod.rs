pub mod record_destination;
pub mod record_source;

pub use record_destination::RecordDestination;
pub use record_source::RecordSource;

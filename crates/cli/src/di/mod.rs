use merge_dns_application::use_cases::{
    MergeAndWriteUseCase, RefreshSourceUseCase, UpdateRecordsUseCase,
};
use merge_dns_domain::{Config, DomainError, SourceKind};
use merge_dns_infrastructure::{FileDestination, LocalFileSource, RemoteHttpSource};
use std::sync::Arc;
use tracing::debug;

/// Use cases wired to the file and HTTP adapters described by the config.
pub struct UseCases {
    pub refresh_local: Arc<RefreshSourceUseCase>,
    pub refresh_remote: Arc<RefreshSourceUseCase>,
    pub merge: Arc<MergeAndWriteUseCase>,
    pub update: Arc<UpdateRecordsUseCase>,
}

impl UseCases {
    pub fn new(config: &Config) -> Result<Self, DomainError> {
        let local = Arc::new(LocalFileSource::new(config.local_source.file.as_str()));
        let remote = Arc::new(RemoteHttpSource::from_config(&config.remote_source)?);
        let destination = Arc::new(FileDestination::new(config.destination.file.as_str()));

        let filter = config
            .deployment_filter()
            .map_err(|e| DomainError::Config(e.to_string()))?;
        debug!(include_rules = filter.len(), "Compiled remote include rules");

        let refresh_local = Arc::new(RefreshSourceUseCase::new(SourceKind::Local, local));
        let refresh_remote = Arc::new(
            RefreshSourceUseCase::new(SourceKind::Remote, remote).with_filter(Arc::new(filter)),
        );
        let merge = Arc::new(MergeAndWriteUseCase::new(destination));
        let update = Arc::new(UpdateRecordsUseCase::new(
            refresh_local.clone(),
            refresh_remote.clone(),
            merge.clone(),
        ));

        Ok(Self {
            refresh_local,
            refresh_remote,
            merge,
            update,
        })
    }
}

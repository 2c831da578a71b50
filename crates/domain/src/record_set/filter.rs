use super::model::RecordSet;
use crate::errors::DomainError;
use fancy_regex::Regex;

/// Name of the info column the include rules match against.
pub const DEPLOYMENT_KEY: &str = "deployment";

/// Compiled include rules for the remote record set.
///
/// An entry is kept when its deployment name matches any of the patterns.
/// With no patterns the filter keeps everything.
#[derive(Debug, Clone, Default)]
pub struct DeploymentFilter {
    patterns: Vec<Regex>,
}

impl DeploymentFilter {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, DomainError> {
        let patterns = patterns
            .iter()
            .map(|p| {
                Regex::new(p.as_ref()).map_err(|e| DomainError::InvalidPattern {
                    pattern: p.as_ref().to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Drops every entry whose deployment matches none of the patterns.
    ///
    /// Sets without a `deployment` key are returned unchanged. `infos` and
    /// `records` are filtered together so that positions stay aligned.
    pub fn apply(&self, set: RecordSet) -> Result<RecordSet, DomainError> {
        if self.patterns.is_empty() {
            return Ok(set);
        }

        let Some(column) = set.key_index(DEPLOYMENT_KEY) else {
            return Ok(set);
        };

        set.ensure_parallel()?;

        let mut keep = Vec::with_capacity(set.infos.len());
        for (row, info) in set.infos.iter().enumerate() {
            let deployment = info
                .get(column)
                .and_then(|value| value.as_str())
                .ok_or(DomainError::DeploymentNotString { row })?;
            keep.push(self.matches(deployment)?);
        }

        let RecordSet {
            keys,
            infos,
            aliases,
            version,
            records,
        } = set;

        let (infos, records) = infos
            .into_iter()
            .zip(records)
            .zip(keep)
            .filter_map(|(entry, keep)| keep.then_some(entry))
            .unzip();

        Ok(RecordSet {
            keys,
            infos,
            aliases,
            version,
            records,
        })
    }

    fn matches(&self, deployment: &str) -> Result<bool, DomainError> {
        for pattern in &self.patterns {
            let matched = pattern
                .is_match(deployment)
                .map_err(|e| DomainError::PatternMatch {
                    pattern: pattern.as_str().to_string(),
                    deployment: deployment.to_string(),
                    reason: e.to_string(),
                })?;
            if matched {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl RecordSet {
    /// Compiles `patterns` and applies them as a [`DeploymentFilter`].
    pub fn filter_deployments<S: AsRef<str>>(self, patterns: &[S]) -> Result<RecordSet, DomainError> {
        DeploymentFilter::new(patterns)?.apply(self)
    }
}

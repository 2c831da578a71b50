use super::model::RecordSet;
use crate::errors::DomainError;

impl RecordSet {
    /// Append-union of two schema-compatible snapshots.
    ///
    /// Local entries come first, remote entries follow, both in their original
    /// order. Aliases are unioned with local definitions winning on key
    /// collisions. Nothing is deduplicated. The result carries `version`, not a
    /// value derived from either input.
    ///
    /// Fails with [`DomainError::SchemaMismatch`] when the key lists differ in
    /// length, content or order, and with
    /// [`DomainError::ParallelismViolation`] when either input has
    /// mismatched `infos`/`records` lengths.
    pub fn merge(local: RecordSet, remote: RecordSet, version: u64) -> Result<RecordSet, DomainError> {
        if local.keys != remote.keys {
            return Err(DomainError::SchemaMismatch {
                local: local.keys,
                remote: remote.keys,
            });
        }
        local.ensure_parallel()?;
        remote.ensure_parallel()?;

        let RecordSet {
            keys,
            mut infos,
            aliases: local_aliases,
            records: mut local_records,
            ..
        } = local;

        infos.extend(remote.infos);
        local_records.extend(remote.records);

        let mut aliases = remote.aliases;
        aliases.extend(local_aliases);

        Ok(RecordSet {
            keys,
            infos,
            aliases,
            version,
            records: local_records,
        })
    }
}

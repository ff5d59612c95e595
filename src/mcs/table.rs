use std::{fs, path::Path};

use crate::{
    mcs::{entry::Entry, snapshot, source},
    prelude::*,
};

/// The canonical in-memory reference table. Loaded once at startup and
/// strictly read-only afterwards.
pub struct ReferenceTable {
    entries: Vec<Entry>,
}

impl ReferenceTable {
    pub const fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load the table, preferring the binary sidecar when its digest still
    /// matches the raw source. A fresh parse regenerates the sidecar; failing
    /// to write it is only worth a warning.
    pub fn load(raw_path: &Path) -> Result<Self> {
        let raw = fs::read(raw_path)
            .with_context(|| format!("failed to read `{}`", raw_path.display()))?;
        let digest = md5::compute(&raw).0;

        let snapshot_path = snapshot::sidecar_path(raw_path);
        match snapshot::read(&snapshot_path) {
            Ok(snapshot) if snapshot.digest == digest => {
                info!(n_entries = snapshot.entries.len(), "loaded the reference table snapshot");
                return Ok(Self::new(snapshot.entries));
            }
            Ok(_) => info!("the snapshot is stale, re-parsing the raw table"),
            Err(error) => debug!("no usable snapshot: {error:#}"),
        }

        let entries = source::parse(raw_path, &raw)?;
        info!(n_entries = entries.len(), "parsed the raw reference table");
        if let Err(error) = snapshot::write(&snapshot_path, digest, &entries) {
            warn!("failed to write the table snapshot: {error:#}");
        }
        Ok(Self::new(entries))
    }
}

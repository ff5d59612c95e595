//! Pre-parsed binary sidecar of the raw reference table, keyed on an MD5
//! digest of the raw bytes so a changed source invalidates the snapshot.

use std::{
    fs,
    path::{Path, PathBuf},
};

use bincode::{Decode, Encode, config};

use crate::{mcs::entry::Entry, prelude::*};

#[derive(Encode, Decode)]
pub struct Snapshot {
    pub digest: [u8; 16],
    pub entries: Vec<Entry>,
}

pub fn sidecar_path(raw_path: &Path) -> PathBuf {
    raw_path.with_extension("snapshot")
}

pub fn read(path: &Path) -> Result<Snapshot> {
    let buffer =
        fs::read(path).with_context(|| format!("failed to read `{}`", path.display()))?;
    let (snapshot, _) = bincode::decode_from_slice(&buffer, config::standard())
        .with_context(|| format!("failed to decode `{}`", path.display()))?;
    Ok(snapshot)
}

pub fn write(path: &Path, digest: [u8; 16], entries: &[Entry]) -> Result {
    let snapshot = Snapshot { digest, entries: entries.to_vec() };
    let buffer = bincode::encode_to_vec(&snapshot, config::standard())?;
    fs::write(path, buffer).with_context(|| format!("failed to write `{}`", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcs::source;

    #[test]
    fn encode_decode_preserves_entries() {
        let entries =
            source::parse_csv(include_bytes!("../../data/self_consumption.csv")).unwrap();
        let digest = md5::compute(b"raw bytes").0;

        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("table.snapshot");
        write(&path, digest, &entries).unwrap();

        let snapshot = read(&path).unwrap();
        assert_eq!(snapshot.digest, digest);
        assert_eq!(snapshot.entries, entries);
    }

    #[test]
    fn missing_snapshot_is_an_error() {
        assert!(read(Path::new("/nonexistent/table.snapshot")).is_err());
    }

    #[test]
    fn sidecar_replaces_the_extension() {
        assert_eq!(
            sidecar_path(Path::new("data/table.csv")),
            PathBuf::from("data/table.snapshot")
        );
    }
}

use crate::common::Result;
use crate::core::{write_report, ReportSummary};
use rand::Rng;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const WRITE_BUFFER_BYTES: usize = 1 << 20;

/// Report being written next to its final location.
///
/// Bytes go to a temporary file in the destination directory; `commit` moves it
/// onto the destination in one rename. Dropping an uncommitted `ReportFile`
/// deletes the temporary file, so a failed run leaves nothing at `path`.
pub struct ReportFile {
    path: PathBuf,
    writer: BufWriter<NamedTempFile>,
}

impl ReportFile {
    pub fn create(path: &Path) -> Result<Self> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let tmp = tempfile::Builder::new()
            .prefix(".cobertura-")
            .suffix(".xml.tmp")
            .tempfile_in(dir)?;
        tracing::debug!("Staging report at {}", tmp.path().display());

        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::with_capacity(WRITE_BUFFER_BYTES, tmp),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn commit(self) -> Result<PathBuf> {
        let tmp = self.writer.into_inner().map_err(|e| e.into_error())?;
        tmp.as_file().sync_all()?;

        // Temp files are created owner-only; a report should look like any other file.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(tmp.path(), fs::Permissions::from_mode(0o644))?;
        }

        tmp.persist(&self.path)?;
        Ok(self.path)
    }
}

impl Write for ReportFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Generate a report of roughly `target_bytes` at `path`.
///
/// The destination is only replaced once the whole document has been written.
pub fn write_report_file<R: Rng + ?Sized>(
    path: &Path,
    target_bytes: u64,
    rng: &mut R,
) -> Result<ReportSummary> {
    let mut file = ReportFile::create(path)?;
    let summary = write_report(&mut file, target_bytes, rng)?;
    let path = file.commit()?;

    tracing::debug!(
        "Committed {} bytes to {}",
        summary.bytes,
        path.display()
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn entries(dir: &Path) -> Vec<PathBuf> {
        fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect()
    }

    #[test]
    fn commit_moves_report_into_place() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("coverage.xml");

        let mut file = ReportFile::create(&target).unwrap();
        assert_eq!(file.path(), target.as_path());
        file.write_all(b"<coverage/>\n").unwrap();
        assert!(!target.exists());

        let committed = file.commit().unwrap();
        assert_eq!(committed, target);
        assert_eq!(fs::read(&target).unwrap(), b"<coverage/>\n");
        assert_eq!(entries(dir.path()), vec![target]);
    }

    #[test]
    fn dropping_without_commit_leaves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("coverage.xml");

        {
            let mut file = ReportFile::create(&target).unwrap();
            file.write_all(b"<coverage>").unwrap();
        }

        assert!(entries(dir.path()).is_empty());
    }

    #[test]
    fn commit_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("coverage.xml");
        fs::write(&target, "old").unwrap();

        let mut rng = StdRng::seed_from_u64(9);
        let summary = write_report_file(&target, 0, &mut rng).unwrap();

        assert_eq!(fs::metadata(&target).unwrap().len(), summary.bytes);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("no/such/dir/coverage.xml");
        assert!(ReportFile::create(&target).is_err());
    }
}

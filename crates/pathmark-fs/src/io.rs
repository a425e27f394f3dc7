//! Atomic I/O operations with file locking

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use backoff::ExponentialBackoffBuilder;
use fs2::FileExt;

use crate::{Error, NormalizedPath, Result};

/// Tuning for [`write_atomic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RobustnessConfig {
    /// How long to keep retrying the advisory lock before giving up.
    pub lock_timeout: Duration,
    /// Whether to fsync the temp file before the rename.
    pub enable_fsync: bool,
}

impl Default for RobustnessConfig {
    fn default() -> Self {
        Self {
            lock_timeout: Duration::from_secs(2),
            enable_fsync: true,
        }
    }
}

/// Write content atomically to a file with locking.
///
/// The content goes to a uniquely named temp file in the same directory,
/// which is then renamed over the target, so readers observe either the old
/// or the new content and never a torn write. An exclusive advisory lock on
/// a sibling lock file serializes concurrent writers; acquiring it is
/// retried with exponential backoff until `config.lock_timeout` elapses.
///
/// Symlinked targets are written through to the file they point at, and the
/// target's permissions carry over so executable scripts stay executable.
pub fn write_atomic(path: &NormalizedPath, content: &[u8], config: RobustnessConfig) -> Result<()> {
    let native_path = resolve_target(&path.to_native());

    let parent = match native_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent).map_err(|e| Error::io(&parent, e))?;

    let lock_path = lock_path_for(&native_path);
    let lock_file = acquire_lock(&lock_path, config.lock_timeout)?;

    let result = write_via_temp(&native_path, &parent, content, config.enable_fsync);

    // Unlinked before unlocking so it does not linger beside the target. A
    // writer that opened the old lock file may still lock the orphaned
    // inode; each write stays whole because of the rename.
    if let Err(e) = fs::remove_file(&lock_path) {
        tracing::debug!(path = %lock_path.display(), error = %e, "could not remove lock file");
    }
    drop(lock_file);

    result
}

fn write_via_temp(target: &Path, dir: &Path, content: &[u8], fsync: bool) -> Result<()> {
    let mut temp = tempfile::Builder::new()
        .prefix(".pathmark-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| Error::io(dir, e))?;

    temp.write_all(content)
        .map_err(|e| Error::io(temp.path(), e))?;

    if let Ok(metadata) = fs::metadata(target) {
        temp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| Error::io(temp.path(), e))?;
    }

    if fsync {
        temp.as_file()
            .sync_all()
            .map_err(|e| Error::io(temp.path(), e))?;
    }

    temp.persist(target)
        .map_err(|e| Error::io(target, e.error))?;

    tracing::debug!(path = %target.display(), bytes = content.len(), "wrote file atomically");
    Ok(())
}

fn acquire_lock(lock_path: &Path, timeout: Duration) -> Result<std::fs::File> {
    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(lock_path)
        .map_err(|e| Error::io(lock_path, e))?;

    let policy = ExponentialBackoffBuilder::new()
        .with_initial_interval(Duration::from_millis(10))
        .with_max_interval(Duration::from_millis(200))
        .with_max_elapsed_time(Some(timeout))
        .build();

    backoff::retry(policy, || {
        lock_file
            .try_lock_exclusive()
            .map_err(backoff::Error::transient)
    })
    .map_err(|_| Error::LockFailed {
        path: lock_path.to_path_buf(),
    })?;

    Ok(lock_file)
}

/// Follow a symlinked target so the rename replaces the real file.
fn resolve_target(path: &Path) -> PathBuf {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => {
            dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
        }
        _ => path.to_path_buf(),
    }
}

/// `<dir>/.<name>.lock`
fn lock_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.lock"))
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Write text content to a file atomically with default robustness settings.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes(), RobustnessConfig::default())
}

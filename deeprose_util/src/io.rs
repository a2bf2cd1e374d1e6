use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::{fs, io};

#[derive(Debug)]
pub struct IoErrorWithPath {
    pub error: io::Error,
    pub path: PathBuf,
}

pub trait IoErrorExt {
    fn with_path(self, path: impl AsRef<Path>) -> IoErrorWithPath;
}

impl IoErrorExt for io::Error {
    fn with_path(self, path: impl AsRef<Path>) -> IoErrorWithPath {
        IoErrorWithPath {
            error: self,
            path: path.as_ref().to_owned(),
        }
    }
}

impl Display for IoErrorWithPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.error)
    }
}

impl std::error::Error for IoErrorWithPath {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Write `contents` to `path` such that readers only ever see either the old file or the complete new one.
///
/// The data is first written and synced to a hidden temporary file in the same directory,
/// which is then renamed over `path`. On failure the temporary file is removed again and `path` is left untouched.
/// Errors are always reported against `path`, the temporary file is an implementation detail.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), IoErrorWithPath> {
    let tmp = temp_path_next_to(path);

    let result = write_and_sync(&tmp, contents).and_then(|()| match fs::rename(&tmp, path) {
        Ok(()) => Ok(()),
        Err(_) => {
            // some platforms refuse to rename over an existing file
            let _ = fs::remove_file(path);
            fs::rename(&tmp, path)
        }
    });

    result.map_err(|e| {
        let _ = fs::remove_file(&tmp);
        e.with_path(path)
    })
}

fn write_and_sync(path: &Path, contents: &[u8]) -> io::Result<()> {
    // the file handle is dropped (and closed) on every path out of this function
    let mut file = File::create(path)?;
    file.write_all(contents)?;
    file.sync_all()?;
    Ok(())
}

fn temp_path_next_to(path: &Path) -> PathBuf {
    let file_name = path.file_name().unwrap_or_default().to_string_lossy().into_owned();
    let pid = std::process::id();
    let n = TMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    path.with_file_name(format!(".{file_name}.{pid}.{n}.tmp"))
}

use deeprose_std::manifest::Manifest;
use deeprose_util::constants::DEEPROSE_MANIFEST_FILE_NAME;
use deeprose_util::io::IoErrorExt;
use path_clean::PathClean;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Marker that an error has already been reported to the user, and the process should exit with a failure code.
#[derive(Debug)]
pub struct ErrorExit;

pub struct FoundManifest {
    pub path: PathBuf,
    pub path_parent: PathBuf,
    pub parsed: Manifest,
}

/// Find, read and parse the manifest.
///
/// An explicitly passed manifest has to exist. Otherwise the working directory and its ancestors are searched,
/// and not finding any manifest is fine.
pub fn manifest_find_read_parse(manifest_path: Option<PathBuf>) -> Result<Option<FoundManifest>, ErrorExit> {
    let Some((path, path_parent, source)) = manifest_find_read(manifest_path)? else {
        return Ok(None);
    };

    match Manifest::from_toml(&source) {
        Ok(parsed) => Ok(Some(FoundManifest {
            path,
            path_parent,
            parsed,
        })),
        Err(e) => {
            eprintln!("Failed to parse manifest {}:\n{e}", path.display());
            Err(ErrorExit)
        }
    }
}

fn manifest_find_read(manifest_path: Option<PathBuf>) -> Result<Option<(PathBuf, PathBuf, String)>, ErrorExit> {
    let cwd = std::env::current_dir().map_err(|e| {
        eprintln!("Failed to get current working directory: {e}");
        ErrorExit
    })?;

    match manifest_path {
        Some(manifest_path) => {
            // directly read the manifest file
            let manifest_path = cwd.join(manifest_path).clean();
            let source = std::fs::read_to_string(&manifest_path).map_err(|e| {
                eprintln!("Failed to read manifest file {}", e.with_path(&manifest_path));
                ErrorExit
            })?;
            let Some(manifest_parent) = manifest_path.parent() else {
                eprintln!("Manifest path {manifest_path:?} does not have a parent directory");
                return Err(ErrorExit);
            };
            Ok(Some((manifest_path.clone(), manifest_parent.to_owned(), source)))
        }
        None => {
            // walk up the path until we find a folder containing a manifest file
            for ancestor in cwd.ancestors() {
                let cand_manifest_path = ancestor.join(DEEPROSE_MANIFEST_FILE_NAME);
                match std::fs::read_to_string(&cand_manifest_path) {
                    Ok(source) => return Ok(Some((cand_manifest_path, ancestor.to_owned(), source))),
                    Err(e) => match e.kind() {
                        ErrorKind::NotFound => continue,
                        _ => {
                            eprintln!("Failed to read manifest file {}", e.with_path(cand_manifest_path));
                            return Err(ErrorExit);
                        }
                    },
                }
            }
            Ok(None)
        }
    }
}

use crate::services::RecolorError;
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::io;

/// List the candidate files directly inside `dir` whose name ends with `extension`.
///
/// The scan is not recursive. Entries that are not regular files (including
/// directories that happen to carry the suffix) are skipped, as are entries
/// whose names are not valid UTF-8. Candidates are returned sorted by file
/// name so that a run always visits files in the same order.
///
/// # Errors
///
/// Returns [`RecolorError::Scan`] if the directory cannot be listed.
pub fn scan_candidates(dir: &Utf8Path, extension: &str) -> Result<Vec<Utf8PathBuf>, RecolorError> {
    let scan_error = |source: io::Error| RecolorError::Scan {
        dir: dir.to_path_buf(),
        source,
    };

    let mut candidates = Vec::new();

    for entry in fs::read_dir(dir).map_err(scan_error)? {
        let entry = entry.map_err(scan_error)?;

        let path = match Utf8PathBuf::try_from(entry.path()) {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("Skipping entry with non-UTF-8 name: {}", e.as_path().display());
                continue;
            }
        };

        let matches_suffix = path
            .file_name()
            .is_some_and(|name| name.ends_with(extension));
        if !matches_suffix {
            continue;
        }

        // is_file follows symlinks, so a link to a component file still counts
        if !path.is_file() {
            tracing::debug!("Skipping {}: not a regular file", path);
            continue;
        }

        candidates.push(path);
    }

    candidates.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    tracing::debug!(
        "Found {} candidate file(s) with suffix {} in {}",
        candidates.len(),
        extension,
        dir
    );

    Ok(candidates)
}

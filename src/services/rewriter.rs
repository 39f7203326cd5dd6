use crate::services::{RecolorError, Substitution, TextStore};
use camino::Utf8Path;

/// What happened to a single candidate file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// No token matched, or the result equals the original. The file was not written.
    Unchanged,

    /// The file was overwritten with the substituted text
    Rewritten { replacements: usize },
}

impl FileOutcome {
    pub fn is_rewritten(&self) -> bool {
        matches!(self, FileOutcome::Rewritten { .. })
    }
}

/// Read `path`, run it through `engine` and write it back only if the text changed.
///
/// A file whose content comes out identical is never reopened for writing,
/// so its modification time stays put.
///
/// # Errors
///
/// [`RecolorError::Read`] if the file cannot be read or is not valid UTF-8,
/// [`RecolorError::Write`] if the new content cannot be written.
pub fn rewrite_file<S: TextStore>(
    store: &S,
    path: &Utf8Path,
    engine: &Substitution,
) -> Result<FileOutcome, RecolorError> {
    let original = store.read_text(path).map_err(|source| RecolorError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let result = engine.apply(&original);
    if result.is_unchanged() || result.text == original.as_str() {
        tracing::debug!("{}: no tokens to replace", path);
        return Ok(FileOutcome::Unchanged);
    }

    store
        .write_text(path, &result.text)
        .map_err(|source| RecolorError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!("Rewrote {} ({} replacement(s))", path, result.replacements);

    Ok(FileOutcome::Rewritten {
        replacements: result.replacements,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RecolorConfig, ReplacementRule};
    use crate::services::MockTextStore;
    use std::io;

    fn default_engine() -> Substitution {
        Substitution::new(RecolorConfig::default().rules()).unwrap()
    }

    #[test]
    fn test_rewrites_changed_content() {
        let mut store = MockTextStore::new();
        store
            .expect_read_text()
            .returning(|_| Ok("color: var(--accent-primary);".to_string()));
        store
            .expect_write_text()
            .withf(|path, contents| path.as_str() == "a.tsx" && contents == "color: #3e6ae1;")
            .times(1)
            .returning(|_, _| Ok(()));

        let outcome = rewrite_file(&store, Utf8Path::new("a.tsx"), &default_engine()).unwrap();
        assert_eq!(outcome, FileOutcome::Rewritten { replacements: 1 });
    }

    #[test]
    fn test_unchanged_content_is_not_written() {
        let mut store = MockTextStore::new();
        store
            .expect_read_text()
            .returning(|_| Ok("padding: 4px;".to_string()));
        store.expect_write_text().never();

        let outcome = rewrite_file(&store, Utf8Path::new("b.tsx"), &default_engine()).unwrap();
        assert_eq!(outcome, FileOutcome::Unchanged);
    }

    #[test]
    fn test_identity_rule_is_not_written() {
        let engine =
            Substitution::new(vec![ReplacementRule::new("#393c41", "#393c41")]).unwrap();

        let mut store = MockTextStore::new();
        store
            .expect_read_text()
            .returning(|_| Ok("stroke: #393c41;".to_string()));
        store.expect_write_text().never();

        let outcome = rewrite_file(&store, Utf8Path::new("grid.tsx"), &engine).unwrap();
        assert!(!outcome.is_rewritten());
    }

    #[test]
    fn test_read_failure() {
        let mut store = MockTextStore::new();
        store
            .expect_read_text()
            .returning(|_| Err(io::Error::new(io::ErrorKind::InvalidData, "not UTF-8")));

        let err = rewrite_file(&store, Utf8Path::new("c.tsx"), &default_engine()).unwrap_err();
        assert!(matches!(err, RecolorError::Read { path, .. } if path == "c.tsx"));
    }

    #[test]
    fn test_write_failure() {
        let mut store = MockTextStore::new();
        store
            .expect_read_text()
            .returning(|_| Ok("var(--status-online)".to_string()));
        store.expect_write_text().returning(|_, _| {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
        });

        let err = rewrite_file(&store, Utf8Path::new("d.tsx"), &default_engine()).unwrap_err();
        assert!(matches!(err, RecolorError::Write { .. }));
    }
}

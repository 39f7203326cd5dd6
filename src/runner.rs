use crate::models::RecolorConfig;
use crate::report::{Reporter, RunSummary};
use crate::services::{
    FileOutcome, FsStore, RecolorError, Substitution, TextStore, rewrite_file, scan_candidates,
};
use camino::Utf8Path;
use std::io::Write;

/// Run one recolor pass over the configured directory on the local filesystem.
///
/// See [`run_with_store`].
pub fn run<W: Write>(config: &RecolorConfig, out: W) -> Result<RunSummary, RecolorError> {
    run_with_store(config, &FsStore, out)
}

/// Scan, substitute, rewrite and report, in that order.
///
/// Files are processed one at a time. The first read or write failure ends
/// the run: files rewritten before it keep their new content, nothing after it
/// is touched, and the summary line is not printed.
pub fn run_with_store<S: TextStore, W: Write>(
    config: &RecolorConfig,
    store: &S,
    out: W,
) -> Result<RunSummary, RecolorError> {
    let settings = &config.settings;
    let engine = Substitution::new(config.rules())?;
    let target_dir = Utf8Path::new(&settings.target_dir);

    tracing::info!(
        "Recoloring {} files in {} with {} rule(s)",
        settings.extension,
        target_dir,
        engine.rules().len()
    );

    let candidates = scan_candidates(target_dir, &settings.extension)?;

    let mut reporter = Reporter::new(out, settings.summary_label.as_str());
    let mut summary = RunSummary::new();

    for path in &candidates {
        match rewrite_file(store, path, &engine)? {
            FileOutcome::Unchanged => summary.record_unchanged(),
            FileOutcome::Rewritten { replacements } => {
                summary.record_rewritten(replacements);
                reporter.file_changed(path)?;
            }
        }
    }

    reporter.finish(&summary)?;
    summary.log_summary();

    Ok(summary)
}

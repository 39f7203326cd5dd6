use camino::Utf8Path;
use std::fs;
use std::io;

/// Whole-file text access used by the rewriter.
///
/// Content is UTF-8 on both sides and written back byte for byte; no line
/// ending translation happens in either direction.
#[cfg_attr(test, mockall::automock)]
pub trait TextStore {
    fn read_text(&self, path: &Utf8Path) -> io::Result<String>;

    fn write_text(&self, path: &Utf8Path, contents: &str) -> io::Result<()>;
}

/// [`TextStore`] backed by the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl TextStore for FsStore {
    fn read_text(&self, path: &Utf8Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write_text(&self, path: &Utf8Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }
}

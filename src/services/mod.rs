//! Services module - the moving parts of a recolor run.
//!
//! None of these depend on the CLI; every input is an explicit parameter so
//! they can be exercised against temporary directories or a mocked store.
//!
//! # Components
//!
//! - [`scan_candidates`]: lists the files directly inside the target directory whose
//!   name ends with the configured suffix (regular files only, sorted by name)
//! - [`Substitution`]: compiles the ordered token table into one matcher and replaces
//!   every occurrence of every token in a single left-to-right pass
//! - [`rewrite_file`]: read → substitute → write back only when the text changed
//! - [`TextStore`] / [`FsStore`]: the file access seam the rewriter goes through
//! - [`RecolorError`]: scan, read, write and rule-table failures
//!
//! # Usage Example
//!
//! ```ignore
//! use recolor::services::{FsStore, Substitution, rewrite_file, scan_candidates};
//!
//! let engine = Substitution::new(config.rules())?;
//! for path in scan_candidates(dir, ".tsx")? {
//!     rewrite_file(&FsStore, &path, &engine)?;
//! }
//! ```

pub mod error;
pub mod rewriter;
pub mod scanner;
pub mod store;
pub mod substitution;

pub use error::RecolorError;
pub use rewriter::{FileOutcome, rewrite_file};
pub use scanner::scan_candidates;
#[cfg(test)]
pub use store::MockTextStore;
pub use store::{FsStore, TextStore};
pub use substitution::{Substituted, Substitution};

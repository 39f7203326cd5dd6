//! Data models for recolor.
//!
//! - [`RecolorConfig`]: target directory, candidate suffix and the ordered token table,
//!   loaded from `recolor.yaml` or built from defaults
//! - [`ReplacementRule`]: one token → literal pair handed to the substitution engine

pub mod config;
pub mod rule;

pub use config::{DEFAULT_REPLACEMENTS, RecolorConfig, RecolorSettings};
pub use rule::ReplacementRule;

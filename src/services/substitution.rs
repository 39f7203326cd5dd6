use crate::models::ReplacementRule;
use crate::services::RecolorError;
use regex::{Regex, RegexBuilder};
use std::borrow::Cow;
use std::collections::HashMap;

/// Upper bound on the compiled size of the combined token matcher
pub const MATCHER_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Output of one substitution pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substituted<'t> {
    pub text: Cow<'t, str>,
    pub replacements: usize,
}

impl Substituted<'_> {
    pub fn is_unchanged(&self) -> bool {
        self.replacements == 0
    }
}

/// Replaces every configured token with its literal value.
///
/// All tokens are compiled into a single alternation of escaped literals, so
/// a buffer is scanned once and every occurrence is replaced simultaneously.
/// Longer tokens are tried first, which makes the result independent of rule
/// order even when one token is a prefix of another.
///
/// When no two tokens overlap and no replacement overlaps any token (see
/// [`Substitution::is_chain_stable`]) this is equivalent to applying the
/// rules one after another over a progressively updated buffer. Overlapping
/// tables such as `var(--text)` next to `var(--text)-muted` can give a
/// different result than the sequential chain.
#[derive(Debug, Clone)]
pub struct Substitution {
    rules: Vec<ReplacementRule>,

    /// `None` when the table is empty
    matcher: Option<Regex>,

    lookup: HashMap<String, String>,
}

impl Substitution {
    /// Compile the rule table.
    ///
    /// # Errors
    ///
    /// Rejects empty patterns, patterns listed more than once and tables
    /// too large to compile into a single matcher.
    pub fn new(rules: Vec<ReplacementRule>) -> Result<Self, RecolorError> {
        Self::with_size_limit(rules, MATCHER_SIZE_LIMIT)
    }

    fn with_size_limit(
        rules: Vec<ReplacementRule>,
        size_limit: usize,
    ) -> Result<Self, RecolorError> {
        let mut lookup = HashMap::with_capacity(rules.len());
        for rule in &rules {
            if rule.pattern.is_empty() {
                return Err(RecolorError::EmptyPattern);
            }
            if lookup
                .insert(rule.pattern.clone(), rule.replacement.clone())
                .is_some()
            {
                return Err(RecolorError::DuplicatePattern(rule.pattern.clone()));
            }
        }

        let matcher = if rules.is_empty() {
            None
        } else {
            let mut tokens: Vec<&str> = rules.iter().map(|r| r.pattern.as_str()).collect();
            tokens.sort_by(|a, b| b.len().cmp(&a.len()));

            let alternation = tokens
                .iter()
                .map(|token| regex::escape(token))
                .collect::<Vec<_>>()
                .join("|");

            let matcher = RegexBuilder::new(&alternation)
                .size_limit(size_limit)
                .build()
                .map_err(RecolorError::Matcher)?;
            Some(matcher)
        };

        let substitution = Self {
            rules,
            matcher,
            lookup,
        };

        if !substitution.is_chain_stable() {
            tracing::warn!(
                "Rule table has overlapping tokens or replacements; results may differ from sequential application"
            );
        }

        Ok(substitution)
    }

    pub fn rules(&self) -> &[ReplacementRule] {
        &self.rules
    }

    /// True when simultaneous matching is guaranteed to agree with
    /// sequential rule-by-rule application.
    ///
    /// Requires that no two distinct tokens overlap (one containing the
    /// other, or the tail of one being the head of another) and that no
    /// replacement overlaps any token, since a replacement could otherwise
    /// complete a token for a later rule. Under this condition a second pass
    /// is also a no-op. The check is conservative: an empty replacement is
    /// always reported, because deleting text can join its neighbours into a token.
    pub fn is_chain_stable(&self) -> bool {
        self.rules.iter().enumerate().all(|(i, rule)| {
            self.rules.iter().enumerate().all(|(j, other)| {
                !overlaps(&rule.replacement, &other.pattern)
                    && (i == j || !overlaps(&rule.pattern, &other.pattern))
            })
        })
    }

    /// Replace every token occurrence in `text`.
    ///
    /// Returns the input borrowed when nothing matched.
    pub fn apply<'t>(&self, text: &'t str) -> Substituted<'t> {
        let Some(matcher) = &self.matcher else {
            return Substituted {
                text: Cow::Borrowed(text),
                replacements: 0,
            };
        };

        let mut output = String::new();
        let mut last = 0;
        let mut replacements = 0;

        for found in matcher.find_iter(text) {
            output.push_str(&text[last..found.start()]);
            match self.lookup.get(found.as_str()) {
                Some(literal) => output.push_str(literal),
                None => output.push_str(found.as_str()),
            }
            last = found.end();
            replacements += 1;
        }

        if replacements == 0 {
            return Substituted {
                text: Cow::Borrowed(text),
                replacements,
            };
        }

        output.push_str(&text[last..]);

        Substituted {
            text: Cow::Owned(output),
            replacements,
        }
    }
}

/// True when either string contains the other or their ends overlap.
fn overlaps(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a) || tail_meets_head(a, b) || tail_meets_head(b, a)
}

/// True when a proper suffix of `a` is a prefix of `b`.
fn tail_meets_head(a: &str, b: &str) -> bool {
    a.char_indices()
        .skip(1)
        .any(|(i, _)| b.starts_with(&a[i..]))
}

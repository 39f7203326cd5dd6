use std::fmt;

/// A single token → literal substitution.
///
/// The pattern is matched verbatim; characters that carry meaning in regex
/// syntax (the parentheses in `var(--x)`) are escaped by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementRule {
    pub pattern: String,
    pub replacement: String,
}

impl ReplacementRule {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

impl fmt::Display for ReplacementRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.pattern, self.replacement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_display() {
        let rule = ReplacementRule::new("var(--data-grid)", "#393c41");
        assert_eq!(rule.to_string(), "var(--data-grid) -> #393c41");
    }
}

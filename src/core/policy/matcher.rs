/// Matches a subject, action, or resource string against a policy clause.
///
/// `Glob` supports a single trailing `*` (e.g. `trading_account.*`), which
/// is the only wildcard shape the closed policy grammar needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    Wildcard,
    Set(Vec<String>),
}

impl Matcher {
    pub fn wildcard() -> Self {
        Self::Wildcard
    }

    pub fn set(values: Vec<impl Into<String>>) -> Self {
        Self::Set(values.into_iter().map(Into::into).collect())
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::Wildcard => true,
            Self::Set(values) => values.iter().any(|pattern| matches_pattern(pattern, value)),
        }
    }
}

fn matches_pattern(pattern: &str, value: &str) -> bool {
    if pattern == "*" {
        return true;
    }
    match pattern.strip_suffix('*') {
        Some(prefix) => value.starts_with(prefix),
        None => pattern == value,
    }
}

#[cfg(test)]
mod glob_tests {
    use super::matches_pattern;

    #[test]
    fn exact_match() {
        assert!(matches_pattern("trading_account.read", "trading_account.read"));
        assert!(!matches_pattern("trading_account.read", "trading_account.write"));
    }

    #[test]
    fn prefix_glob() {
        assert!(matches_pattern("trading_account.*", "trading_account.read"));
        assert!(matches_pattern("trading_account.*", "trading_account.share"));
        assert!(!matches_pattern("trading_account.*", "user.read"));
    }

    #[test]
    fn bare_star_matches_everything() {
        assert!(matches_pattern("*", "anything"));
    }
}

use regex::{Captures, Regex};

use std::borrow::Cow;

use crate::core::constants::patterns;
use crate::core::error::{LinkCaseError, Result};
use crate::core::types::MatchScope;

/// Finds URLs in raw text and lowercases them.
///
/// The scheme is matched case-insensitively. A match runs until the first
/// whitespace character or `)`, so Markdown link targets such as
/// `[text](https://Example.com/A)` stop before the closing parenthesis.
#[derive(Debug, Clone)]
pub struct UrlMatcher {
    scope: MatchScope,
    regex: Regex,
}

impl UrlMatcher {
    pub fn new(scope: MatchScope) -> Result<Self> {
        let pattern = Self::pattern_for(&scope)?;
        let regex = Regex::new(&pattern)?;
        Ok(Self { scope, regex })
    }

    /// Matcher for every URL regardless of host
    pub fn unrestricted() -> Result<Self> {
        Self::new(MatchScope::Any)
    }

    pub fn scope(&self) -> &MatchScope {
        &self.scope
    }

    fn pattern_for(scope: &MatchScope) -> Result<String> {
        match scope {
            MatchScope::Any => Ok(format!("{}{}+", patterns::SCHEME, patterns::URL_CHAR)),
            MatchScope::Host(host) => {
                validate_host(host)?;
                Ok(format!(
                    "(?i:https?://{}{}){}*",
                    patterns::WWW_PREFIX,
                    regex::escape(host),
                    patterns::URL_CHAR
                ))
            }
        }
    }

    /// All matched URLs, in order of appearance
    pub fn find_urls<'a>(&self, content: &'a str) -> Vec<&'a str> {
        self.regex.find_iter(content).map(|m| m.as_str()).collect()
    }

    /// Lowercase every matched URL, leaving everything else untouched.
    ///
    /// Returns the new content along with the number of matches. Content
    /// without matches comes back borrowed.
    pub fn lowercase_links<'a>(&self, content: &'a str) -> (Cow<'a, str>, usize) {
        let mut matches = 0;
        let rewritten = self.regex.replace_all(content, |caps: &Captures| {
            matches += 1;
            caps[0].to_lowercase()
        });
        (rewritten, matches)
    }
}

/// Check a configured hostname can be embedded in the URL pattern
pub fn validate_host(host: &str) -> Result<()> {
    if host.is_empty() {
        return Err(LinkCaseError::InvalidArgument(
            "Host cannot be empty".to_string(),
        ));
    }
    if host
        .chars()
        .any(|c| c.is_whitespace() || patterns::FORBIDDEN_HOST_CHARS.contains(&c))
    {
        return Err(LinkCaseError::InvalidArgument(format!(
            "Host '{host}' must be a bare domain name without whitespace, '/' or ')'"
        )));
    }
    Ok(())
}

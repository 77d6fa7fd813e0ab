use std::{error::Error, fmt::Display};

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use smol_str::SmolStr;

/// Keywords used when none are configured
pub const DEFAULT_KEYWORDS: [&str; 5] = ["sports", "football", "Arsenal", "Peacock", "EPL"];

lazy_static! {
    static ref DEFAULT_KEYWORD_SET: KeywordSet =
        KeywordSet::new(DEFAULT_KEYWORDS).expect("Default keyword set error");
}

#[derive(Debug)]
pub enum KeywordError {
    InvalidMatcher(regex::Error),
}

impl Display for KeywordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMatcher(e) => write!(f, "Cannot build keyword matcher: {}", e),
        }
    }
}
impl Error for KeywordError {}
impl From<regex::Error> for KeywordError {
    fn from(value: regex::Error) -> Self {
        Self::InvalidMatcher(value)
    }
}

/// Case-insensitive substring keywords.
///
/// All keywords are compiled into one alternation of escaped literals, so
/// characters like `+` or `(` in a channel name are matched as written.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    keywords: Vec<SmolStr>,
    matcher: Option<Regex>,
}

impl KeywordSet {
    pub fn new<I, S>(keywords: I) -> Result<Self, KeywordError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords: Vec<SmolStr> = keywords
            .into_iter()
            .map(|x| SmolStr::new(x.as_ref()))
            .collect();

        // an empty alternation would match everything
        let matcher = if keywords.is_empty() {
            None
        } else {
            let pattern = keywords
                .iter()
                .map(|x| regex::escape(x))
                .collect::<Vec<_>>()
                .join("|");
            Some(RegexBuilder::new(&pattern).case_insensitive(true).build()?)
        };

        Ok(Self { keywords, matcher })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.matcher.as_ref().is_some_and(|x| x.is_match(text))
    }

    pub fn keywords(&self) -> &[SmolStr] {
        &self.keywords
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        DEFAULT_KEYWORD_SET.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive() {
        let set = KeywordSet::new(["Arsenal"]).unwrap();
        assert!(set.is_match("#EXTINF:-1,ARSENAL TV"));
        assert!(set.is_match("#EXTINF:-1,arsenal tv"));
        assert!(set.is_match("#EXTINF:-1,ArSeNaL tv"));
        assert!(!set.is_match("#EXTINF:-1,Chelsea TV"));
    }

    #[test]
    fn test_incidental_substring() {
        let set = KeywordSet::default();
        // "epl" inside "Replay"
        assert!(set.is_match("#EXTINF:-1,Movie Replay"));
        assert!(set.is_match("#EXTINF:-1 group-title=\"Sports\",Anything"));
        assert!(!set.is_match("#EXTINF:-1,Cooking"));
    }

    #[test]
    fn test_keywords_are_literals() {
        let set = KeywordSet::new(["Sky+ (UK)"]).unwrap();
        assert!(set.is_match("#EXTINF:-1,sky+ (uk) Sports"));
        assert!(!set.is_match("#EXTINF:-1,Skyy UK"));
    }

    #[test]
    fn test_empty_set_matches_nothing() {
        let set = KeywordSet::new(Vec::<String>::new()).unwrap();
        assert!(set.is_empty());
        assert!(!set.is_match("#EXTINF:-1,Arsenal"));
        assert!(!set.is_match(""));
    }

    #[test]
    fn test_empty_keyword_matches_everything() {
        let set = KeywordSet::new([""]).unwrap();
        assert!(set.is_match("#EXTINF:-1,Anything"));
    }

    #[test]
    fn test_default_keywords() {
        let set = KeywordSet::default();
        assert_eq!(set.keywords().len(), DEFAULT_KEYWORDS.len());
        assert_eq!(set.keywords()[2], "Arsenal");
    }
}

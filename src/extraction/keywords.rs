//! Fixed-vocabulary keyword scan for job descriptions

use crate::error::{Result, SkillMatchError};
use aho_corasick::{AhoCorasick, MatchKind};
use std::collections::BTreeSet;

/// Finds well-known skill keywords anywhere in a text
pub struct KeywordScanner {
    matcher: AhoCorasick,
    keywords: Vec<String>,
}

impl KeywordScanner {
    pub fn new<I, S>(keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        if keywords.is_empty() {
            return Err(SkillMatchError::Configuration(
                "job keyword list must not be empty".to_string(),
            ));
        }

        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::Standard)
            .build(&keywords)?;

        Ok(Self { matcher, keywords })
    }

    /// Keywords present in `text` as whole words, sorted and deduplicated
    pub fn scan(&self, text: &str) -> Vec<String> {
        let mut found = BTreeSet::new();

        for m in self.matcher.find_overlapping_iter(text) {
            let before = text[..m.start()].chars().next_back();
            let after = text[m.end()..].chars().next();
            let bounded = !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric);
            if bounded {
                found.insert(self.keywords[m.pattern().as_usize()].clone());
            }
        }

        found.into_iter().collect()
    }

    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JobKeywordConfig;

    fn scanner() -> KeywordScanner {
        KeywordScanner::new(&JobKeywordConfig::default().keywords).unwrap()
    }

    #[test]
    fn test_scan_job_description() {
        let text = "We want a Python developer with AWS, Docker and Machine Learning experience.";
        assert_eq!(scanner().scan(text), vec!["aws", "docker", "machine learning", "python"]);
    }

    #[test]
    fn test_whole_words() {
        // "java" inside "javascript" does not count
        assert!(scanner().scan("Strong JavaScript skills").is_empty());
    }

    #[test]
    fn test_symbol_keywords() {
        assert_eq!(scanner().scan("C++ and Node.js backends"), vec!["c++", "node.js"]);
    }

    #[test]
    fn test_overlapping_keywords() {
        let scanner = KeywordScanner::new(["learning", "deep learning"]).unwrap();
        assert_eq!(scanner.scan("deep learning"), vec!["deep learning", "learning"]);
    }

    #[test]
    fn test_empty_keyword_list_rejected() {
        assert!(KeywordScanner::new(Vec::<String>::new()).is_err());
    }
}

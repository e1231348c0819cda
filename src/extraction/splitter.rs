//! Splitting section text into candidate tokens

use once_cell::sync::Lazy;
use regex::Regex;

static DELIMITERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[•\-\n\r,;]+").expect("Invalid delimiter regex"));
static PARENTHETICAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(.*?\)").expect("Invalid parenthetical regex"));
static PERCENTAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{1,3}%").expect("Invalid percentage regex"));

const MIN_CANDIDATE_LEN: usize = 2;
const MAX_CANDIDATE_LEN: usize = 60;

#[derive(Debug, Clone, Copy, Default)]
pub struct CandidateSplitter;

impl CandidateSplitter {
    pub fn new() -> Self {
        Self
    }

    /// Split on runs of bullets, hyphens, commas, semicolons and line breaks,
    /// then strip parentheticals and percentages from each piece.
    pub fn split(&self, section_text: &str) -> Vec<String> {
        DELIMITERS
            .split(section_text)
            .filter_map(|item| {
                let item = item.trim();
                if item.is_empty() {
                    return None;
                }
                let item = PARENTHETICAL.replace_all(item, "");
                let item = PERCENTAGE.replace_all(&item, "");
                let item = item.trim();

                let len = item.chars().count();
                (MIN_CANDIDATE_LEN..MAX_CANDIDATE_LEN)
                    .contains(&len)
                    .then(|| item.to_string())
            })
            .collect()
    }
}

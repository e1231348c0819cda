//! Skills-section detection

use crate::config::ExtractionConfig;
use crate::error::Result;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// How a section was located
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionStrategy {
    /// A header pattern matched; holds the pattern source
    Header(String),
    /// A comma-dense line was found at this line index
    LineFallback(usize),
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub text: String,
    /// Byte length of the matched header at the start of `text`
    pub header_len: usize,
    pub strategy: SectionStrategy,
}

impl Section {
    fn empty() -> Self {
        Self {
            text: String::new(),
            header_len: 0,
            strategy: SectionStrategy::NotFound,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Section text with the header label and its trailing colon removed
    pub fn body(&self) -> &str {
        self.text[self.header_len..].trim_start_matches(|c: char| c == ':' || c.is_whitespace())
    }
}

pub struct SectionLocator {
    headers: Vec<Regex>,
    window: usize,
    min_segments: usize,
    max_line_len: usize,
    line_count: usize,
}

impl SectionLocator {
    pub fn new(config: &ExtractionConfig) -> Result<Self> {
        let headers = config
            .header_patterns
            .iter()
            .map(|pattern| RegexBuilder::new(pattern).case_insensitive(true).build())
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            headers,
            window: config.section_window,
            min_segments: config.fallback_min_segments,
            max_line_len: config.fallback_max_line_len,
            line_count: config.fallback_line_count,
        })
    }

    /// Find the skills-like section of `text`.
    ///
    /// Header patterns are tried in priority order and the first one that
    /// occurs anywhere wins, even when a later pattern occurs earlier in the
    /// text. The result is a fixed window of characters starting at the
    /// header, cut without regard to word boundaries. Without a header, the
    /// first short comma-dense line and the lines after it are used.
    pub fn locate(&self, text: &str) -> Section {
        for header in &self.headers {
            if let Some(m) = header.find(text) {
                let rest = &text[m.start()..];
                let end = rest
                    .char_indices()
                    .nth(self.window)
                    .map(|(idx, _)| idx)
                    .unwrap_or(rest.len());
                let window = &rest[..end];

                return Section {
                    text: window.to_string(),
                    header_len: m.len().min(window.len()),
                    strategy: SectionStrategy::Header(header.as_str().to_string()),
                };
            }
        }

        let lines: Vec<&str> = text.lines().collect();
        for (idx, line) in lines.iter().enumerate() {
            if line.split(',').count() >= self.min_segments && line.chars().count() < self.max_line_len {
                let last = (idx + self.line_count).min(lines.len());
                return Section {
                    text: lines[idx..last].join("\n"),
                    header_len: 0,
                    strategy: SectionStrategy::LineFallback(idx),
                };
            }
        }

        Section::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locator() -> SectionLocator {
        SectionLocator::new(&ExtractionConfig::default()).unwrap()
    }

    #[test]
    fn test_header_match() {
        let section = locator().locate("Jane Roe\nSkills: Python, SQL, AWS");
        assert_eq!(section.text, "Skills: Python, SQL, AWS");
        assert_eq!(section.body(), "Python, SQL, AWS");
        assert_eq!(section.strategy, SectionStrategy::Header(r"\bskills\b".to_string()));
    }

    #[test]
    fn test_priority_beats_position() {
        // "expertise" occurs first in the text but "skills" has priority.
        let text = "Areas of expertise include leadership.\nSkills: Rust, Go";
        let section = locator().locate(text);
        assert!(section.text.starts_with("Skills"));
    }

    #[test]
    fn test_window_is_fixed_length() {
        let text = format!("Skills {}", "x".repeat(1000));
        let section = locator().locate(&text);
        assert_eq!(section.text.chars().count(), 600);
    }

    #[test]
    fn test_window_counts_characters() {
        let text = format!("Skills {}", "é".repeat(1000));
        let section = locator().locate(&text);
        assert_eq!(section.text.chars().count(), 600);
    }

    #[test]
    fn test_case_insensitive_header() {
        let section = locator().locate("TECHNICAL SKILLS\nKubernetes; Terraform");
        assert!(section.text.starts_with("SKILLS"));
        assert_eq!(section.body(), "Kubernetes; Terraform");
    }

    #[test]
    fn test_whole_word_header() {
        // "skillset" must not count as a "skills" header
        let section = locator().locate("A broad skillset\nnothing else here");
        assert!(section.is_empty());
    }

    #[test]
    fn test_line_fallback() {
        let text = "John Doe\nRust, Go, Python, SQL\nDocker\nKubernetes\nTerraform";
        let section = locator().locate(text);
        assert_eq!(section.text, "Rust, Go, Python, SQL\nDocker\nKubernetes");
        assert_eq!(section.strategy, SectionStrategy::LineFallback(1));
        assert_eq!(section.body(), section.text);
    }

    #[test]
    fn test_fallback_skips_long_lines() {
        let long = format!("{}, b, c", "a".repeat(250));
        let text = format!("{}\nx, y, z", long);
        let section = locator().locate(&text);
        assert_eq!(section.text, "x, y, z");
    }

    #[test]
    fn test_nothing_found() {
        let section = locator().locate("I enjoy hiking and reading.");
        assert!(section.is_empty());
        assert_eq!(section.strategy, SectionStrategy::NotFound);
        assert_eq!(section.body(), "");
    }
}

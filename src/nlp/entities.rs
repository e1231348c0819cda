//! Named entity recognition from a gazetteer plus token shape

use crate::error::Result;
use crate::nlp::model::AnnotationModel;
use crate::nlp::{Entity, EntityLabel, Token};
use aho_corasick::{AhoCorasick, MatchKind};

pub struct EntityRecognizer {
    matcher: AhoCorasick,
    labels: Vec<EntityLabel>,
    lowercase_entry: Vec<bool>,
}

impl EntityRecognizer {
    pub fn new(model: &AnnotationModel) -> Result<Self> {
        let entries = model.gazetteer();
        let patterns: Vec<&str> = entries.iter().map(|e| e.text.as_str()).collect();

        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .build(&patterns)?;

        Ok(Self {
            matcher,
            labels: entries.iter().map(|e| e.label).collect(),
            lowercase_entry: entries
                .iter()
                .map(|e| !e.text.chars().any(char::is_uppercase))
                .collect(),
        })
    }

    /// Entities in document order. Gazetteer hits come first; tokens shaped
    /// like technology names (`PostgreSQL`, `EC2`, `C++`, `Node.js`) that no
    /// hit covers are tagged `Technology`.
    pub fn recognize(&self, text: &str, tokens: &[Token]) -> Vec<Entity> {
        let mut entities: Vec<Entity> = Vec::new();

        for m in self.matcher.find_iter(text) {
            let surface = &text[m.start()..m.end()];
            if !is_word_bounded(text, m.start(), m.end()) {
                continue;
            }
            // Lowercase prose words ("rest", "spark") are not names unless the
            // gazetteer spells them that way or they carry symbols.
            let pattern = m.pattern().as_usize();
            if !self.lowercase_entry[pattern] && !looks_like_name(surface) {
                continue;
            }
            entities.push(Entity {
                text: surface.to_string(),
                label: self.labels[pattern],
                start: m.start(),
                end: m.end(),
            });
        }

        let shaped: Vec<Entity> = tokens
            .iter()
            .filter(|t| is_technology_shape(&t.text))
            .filter(|t| !entities.iter().any(|e| t.start < e.end && e.start < t.end))
            .map(|t| Entity {
                text: t.text.clone(),
                label: EntityLabel::Technology,
                start: t.start,
                end: t.end,
            })
            .collect();

        entities.extend(shaped);
        entities.sort_by_key(|e| e.start);
        entities
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '+' || c == '#' || c == '_'
}

fn is_word_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

fn looks_like_name(surface: &str) -> bool {
    surface.chars().next().is_some_and(char::is_uppercase)
        || surface.chars().any(|c| !c.is_alphabetic() && !c.is_whitespace())
}

pub fn is_technology_shape(word: &str) -> bool {
    let Some(first) = word.chars().next() else {
        return false;
    };
    let letters = word.chars().filter(|c| c.is_alphabetic()).count();
    if letters == 0 {
        return false;
    }

    if word.contains('+') || word.contains('#') {
        return true;
    }

    // Dotted names need a real extension: "Node.js", "ASP.NET", not "e.g"
    if let Some((head, tail)) = word.rsplit_once('.') {
        let head_ok = head.is_empty() || head.chars().any(char::is_alphabetic);
        if head_ok && tail.chars().filter(|c| c.is_alphabetic()).count() >= 2 {
            return true;
        }
    }

    // camelCase / PascalCase with an inner capital after a lowercase letter
    let chars: Vec<char> = word.chars().collect();
    if chars.windows(2).any(|w| w[0].is_lowercase() && w[1].is_uppercase()) {
        return true;
    }

    // Letters mixed with digits, starting with a letter: EC2, S3, K8s
    first.is_alphabetic() && word.chars().any(|c| c.is_ascii_digit())
}

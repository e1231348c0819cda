//! Sentence segmentation and tokenization
//!
//! Line breaks always end a sentence; within a line, Unicode sentence
//! boundaries apply. Words keep inner `+`, `#`, `.` and `-` so that tokens
//! like `C++`, `C#`, `Node.js` and `.NET` survive intact.

use crate::nlp::{PosTag, Token};
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.?\w[\w+#.\-]*|[^\w\s]").expect("Invalid token regex"));

/// Split `text` into tokens. Every token is tagged `Noun` (or `Punctuation`
/// when it has no word characters); real tagging happens afterwards.
pub fn tokenize(text: &str) -> (Vec<Token>, usize) {
    let mut tokens = Vec::new();
    let mut sentence_idx = 0;
    let mut line_offset = 0;

    for line in text.split_inclusive('\n') {
        for (sentence_offset, sentence) in sentence_spans(line) {
            if sentence.trim().is_empty() {
                continue;
            }
            let base = line_offset + sentence_offset;
            let before = tokens.len();

            for m in TOKEN.find_iter(sentence) {
                let word = m.as_str().trim_end_matches(|c: char| c == '.' || c == '-');
                let word = if word.is_empty() { m.as_str() } else { word };
                let pos = if word.chars().any(char::is_alphanumeric) {
                    PosTag::Noun
                } else {
                    PosTag::Punctuation
                };

                tokens.push(Token {
                    text: word.to_string(),
                    pos,
                    start: base + m.start(),
                    end: base + m.start() + word.len(),
                    sentence_idx,
                    token_idx: tokens.len(),
                });
            }

            if tokens.len() > before {
                sentence_idx += 1;
            }
        }
        line_offset += line.len();
    }

    (tokens, sentence_idx)
}

/// Unicode sentence bounds within one line. A bound not preceded by
/// whitespace is dropped, so a leading `.` as in `.NET` stays in its sentence.
fn sentence_spans(line: &str) -> Vec<(usize, &str)> {
    let mut spans: Vec<(usize, usize)> = Vec::new();

    for (offset, segment) in line.split_sentence_bound_indices() {
        let end = offset + segment.len();
        match spans.last_mut() {
            Some((start, prev_end)) if !line[*start..*prev_end].ends_with(char::is_whitespace) => *prev_end = end,
            _ => spans.push((offset, end)),
        }
    }

    spans.into_iter().map(|(start, end)| (start, &line[start..end])).collect()
}

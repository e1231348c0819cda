//! Noun chunk detection
//!
//! Identifies maximal noun phrases using pattern matching on POS tags.
//! Pattern: (ADJ)* (NOUN|PROPN)+, never crossing a sentence boundary.

use crate::nlp::{ChunkSpan, PosTag, Token};

#[derive(Debug, Clone, Copy, Default)]
pub struct NounChunker;

impl NounChunker {
    pub fn new() -> Self {
        Self
    }

    /// Extract noun chunks from tagged tokens, in document order
    pub fn extract_chunks(&self, tokens: &[Token]) -> Vec<ChunkSpan> {
        let mut chunks = Vec::new();
        let mut sentence_start = 0;

        while sentence_start < tokens.len() {
            let sentence_idx = tokens[sentence_start].sentence_idx;
            let sentence_end = tokens[sentence_start..]
                .iter()
                .position(|t| t.sentence_idx != sentence_idx)
                .map(|offset| sentence_start + offset)
                .unwrap_or(tokens.len());

            self.extract_from_sentence(&tokens[sentence_start..sentence_end], &mut chunks);
            sentence_start = sentence_end;
        }

        chunks
    }

    fn extract_from_sentence(&self, tokens: &[Token], chunks: &mut Vec<ChunkSpan>) {
        let mut i = 0;

        while i < tokens.len() {
            let mut noun_start = i;
            while noun_start < tokens.len() && tokens[noun_start].pos == PosTag::Adjective {
                noun_start += 1;
            }

            let mut end = noun_start;
            while end < tokens.len() && tokens[end].pos.is_noun() {
                end += 1;
            }

            if end == noun_start {
                // Adjectives without a head noun; resume after them
                i = noun_start.max(i + 1);
                continue;
            }

            let first = &tokens[i];
            let last = &tokens[end - 1];
            chunks.push(ChunkSpan {
                start_token: first.token_idx,
                end_token: last.token_idx + 1,
                start_char: first.start,
                end_char: last.end,
                sentence_idx: first.sentence_idx,
            });
            i = end;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(text: &str, pos: PosTag, start: usize, sentence_idx: usize, token_idx: usize) -> Token {
        Token {
            text: text.to_string(),
            pos,
            start,
            end: start + text.len(),
            sentence_idx,
            token_idx,
        }
    }

    fn token_texts(tokens: &[Token], chunk: &ChunkSpan) -> String {
        tokens[chunk.start_token..chunk.end_token]
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn make_tokens() -> Vec<Token> {
        // "The scalable backend services use distributed caches"
        vec![
            token("The", PosTag::Determiner, 0, 0, 0),
            token("scalable", PosTag::Adjective, 4, 0, 1),
            token("backend", PosTag::Noun, 13, 0, 2),
            token("services", PosTag::Noun, 21, 0, 3),
            token("use", PosTag::Verb, 30, 0, 4),
            token("distributed", PosTag::Adjective, 34, 0, 5),
            token("caches", PosTag::Noun, 46, 0, 6),
        ]
    }

    #[test]
    fn test_basic_chunk_extraction() {
        let tokens = make_tokens();
        let chunks = NounChunker::new().extract_chunks(&tokens);
        let texts: Vec<_> = chunks.iter().map(|c| token_texts(&tokens, c)).collect();
        assert_eq!(texts, vec!["scalable backend services", "distributed caches"]);
        assert_eq!(chunks[0].start_char, 4);
        assert_eq!(chunks[0].end_char, 29);
    }

    #[test]
    fn test_adjective_without_noun() {
        let tokens = vec![
            token("very", PosTag::Adverb, 0, 0, 0),
            token("strong", PosTag::Adjective, 5, 0, 1),
            token("and", PosTag::Conjunction, 12, 0, 2),
            token("Rust", PosTag::ProperNoun, 16, 0, 3),
        ];
        let chunks = NounChunker::new().extract_chunks(&tokens);
        assert_eq!(chunks.len(), 1);
        assert_eq!(token_texts(&tokens, &chunks[0]), "Rust");
    }

    #[test]
    fn test_punctuation_breaks_chunks() {
        let tokens = vec![
            token("Python", PosTag::ProperNoun, 0, 0, 0),
            token(",", PosTag::Punctuation, 6, 0, 1),
            token("SQL", PosTag::ProperNoun, 8, 0, 2),
        ];
        let chunks = NounChunker::new().extract_chunks(&tokens);
        assert_eq!(chunks.len(), 2);
    }

    #[test]
    fn test_cross_sentence_boundary() {
        let tokens = vec![
            token("machine", PosTag::Noun, 0, 0, 0),
            token("learning", PosTag::Noun, 8, 1, 1),
        ];
        let chunks = NounChunker::new().extract_chunks(&tokens);
        assert_eq!(chunks.len(), 2);
    }

    #[test]
    fn test_no_tokens() {
        assert!(NounChunker::new().extract_chunks(&[]).is_empty());
    }
}

//! Rule-based annotation pipeline

use crate::error::Result;
use crate::nlp::chunker::NounChunker;
use crate::nlp::entities::{is_technology_shape, EntityRecognizer};
use crate::nlp::model::AnnotationModel;
use crate::nlp::tokenizer::tokenize;
use crate::nlp::{Annotation, AnnotationPipeline, PosTag, Token};
use std::sync::Arc;

/// Tokenizer, lexicon tagger, noun chunker and gazetteer NER over a shared
/// read-only model
pub struct RulePipeline {
    model: Arc<AnnotationModel>,
    recognizer: EntityRecognizer,
    chunker: NounChunker,
}

impl RulePipeline {
    pub fn new(model: Arc<AnnotationModel>) -> Result<Self> {
        let recognizer = EntityRecognizer::new(&model)?;
        Ok(Self {
            model,
            recognizer,
            chunker: NounChunker::new(),
        })
    }

    fn tag(&self, tokens: &mut [Token]) {
        let mut suffix_verbs = Vec::new();

        for (idx, token) in tokens.iter_mut().enumerate() {
            if token.pos == PosTag::Punctuation {
                continue;
            }
            let lower = token.text.to_lowercase();

            token.pos = if let Some(tag) = self.model.lexicon_tag(&lower) {
                tag
            } else if lower.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
                PosTag::Numeral
            } else if is_technology_shape(&token.text) {
                PosTag::ProperNoun
            } else if lower.len() > 4 && lower.ends_with("ly") {
                PosTag::Adverb
            } else if self.model.has_verb_suffix(&lower) {
                suffix_verbs.push(idx);
                PosTag::Verb
            } else if self.model.has_adjective_suffix(&lower) {
                PosTag::Adjective
            } else if token.text.chars().next().is_some_and(char::is_uppercase) {
                PosTag::ProperNoun
            } else {
                PosTag::Noun
            };
        }

        // "-ed" words modifying a noun read as adjectives: "in distributed systems"
        for idx in suffix_verbs {
            let modifies_noun = tokens
                .get(idx + 1)
                .is_some_and(|next| next.pos.is_noun() && next.sentence_idx == tokens[idx].sentence_idx);
            let after_modifier = idx > 0
                && tokens[idx - 1].sentence_idx == tokens[idx].sentence_idx
                && matches!(
                    tokens[idx - 1].pos,
                    PosTag::Determiner | PosTag::Adjective | PosTag::Preposition
                );
            if modifies_noun && after_modifier {
                tokens[idx].pos = PosTag::Adjective;
            }
        }
    }
}

impl AnnotationPipeline for RulePipeline {
    fn annotate(&self, text: &str) -> Annotation {
        let (mut tokens, sentence_count) = tokenize(text);
        self.tag(&mut tokens);
        let noun_chunks = self.chunker.extract_chunks(&tokens);
        let entities = self.recognizer.recognize(text, &tokens);

        Annotation {
            tokens,
            sentence_count,
            noun_chunks,
            entities,
        }
    }
}

//! Candidate skills from named entities and noun chunks

use crate::nlp::{AnnotationPipeline, EntityLabel};
use std::collections::HashSet;
use std::sync::Arc;

/// Entity types that tend to name skills, tools or employers
pub const SKILL_ENTITY_LABELS: [EntityLabel; 6] = [
    EntityLabel::Organization,
    EntityLabel::Product,
    EntityLabel::CreativeWork,
    EntityLabel::Language,
    EntityLabel::NationalityOrGroup,
    EntityLabel::Technology,
];

const MAX_PHRASE_WORDS: usize = 4;
const MAX_PHRASE_LEN: usize = 60;

pub struct LinguisticExtractor {
    pipeline: Arc<dyn AnnotationPipeline>,
    max_entities: usize,
}

impl LinguisticExtractor {
    pub fn new(pipeline: Arc<dyn AnnotationPipeline>, max_entities: usize) -> Self {
        Self { pipeline, max_entities }
    }

    /// Lowercased candidates without duplicates: entity texts first, then
    /// noun phrases, each in document order.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let annotation = self.pipeline.annotate(text);
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();

        let entities = annotation
            .entities
            .iter()
            .take(self.max_entities)
            .filter(|entity| SKILL_ENTITY_LABELS.contains(&entity.label))
            .map(|entity| entity.text.to_lowercase());

        let phrases = annotation
            .chunk_texts(text)
            .map(|chunk| chunk.to_lowercase().trim().to_string())
            .filter(|phrase| is_skill_phrase(phrase));

        for candidate in entities.chain(phrases) {
            if seen.insert(candidate.clone()) {
                candidates.push(candidate);
            }
        }

        candidates
    }
}

fn is_skill_phrase(phrase: &str) -> bool {
    let words = phrase.split_whitespace().count();
    let len = phrase.chars().count();

    (1..=MAX_PHRASE_WORDS).contains(&words)
        && phrase
            .chars()
            .any(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '#' | '.' | '-'))
        && len > 1
        && len < MAX_PHRASE_LEN
}

//! Linguistic annotation: tokens, noun chunks and named entities
//!
//! The [`AnnotationPipeline`] trait is the seam between skill extraction and
//! whatever produces annotations. [`pipeline::RulePipeline`] is the bundled
//! implementation, driven by a read-only [`model::AnnotationModel`].

pub mod chunker;
pub mod entities;
pub mod model;
pub mod pipeline;
pub mod tokenizer;

use serde::{Deserialize, Serialize};

/// Coarse part-of-speech tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    Noun,
    ProperNoun,
    Adjective,
    Verb,
    Adverb,
    Determiner,
    Pronoun,
    Preposition,
    Conjunction,
    Auxiliary,
    Numeral,
    Punctuation,
}

impl PosTag {
    pub fn is_noun(&self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: String,
    pub pos: PosTag,
    /// Byte offsets into the annotated text
    pub start: usize,
    pub end: usize,
    pub sentence_idx: usize,
    pub token_idx: usize,
}

/// A noun phrase as token and byte ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkSpan {
    pub start_token: usize,
    pub end_token: usize,
    pub start_char: usize,
    pub end_char: usize,
    pub sentence_idx: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityLabel {
    Organization,
    Product,
    CreativeWork,
    Language,
    NationalityOrGroup,
    Technology,
    Person,
    Location,
    Date,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
    pub start: usize,
    pub end: usize,
}

/// Annotations for one text. Chunks and entities are in document order.
#[derive(Debug, Clone, Default)]
pub struct Annotation {
    pub tokens: Vec<Token>,
    pub sentence_count: usize,
    pub noun_chunks: Vec<ChunkSpan>,
    pub entities: Vec<Entity>,
}

impl Annotation {
    /// Surface text of each noun chunk
    pub fn chunk_texts<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.noun_chunks
            .iter()
            .map(move |chunk| &text[chunk.start_char..chunk.end_char])
    }
}

/// Tokenize, chunk noun phrases and tag named entities
pub trait AnnotationPipeline: Send + Sync {
    fn annotate(&self, text: &str) -> Annotation;
}

//! Skill extraction: section heuristics plus linguistic candidates,
//! canonicalized into one ordered skill set

use crate::config::Config;
use crate::error::Result;
use crate::extraction::canonical::{CanonicalMap, Canonicalizer};
use crate::extraction::linguistic::LinguisticExtractor;
use crate::extraction::section::{SectionLocator, SectionStrategy};
use crate::extraction::splitter::CandidateSplitter;
use crate::nlp::model::AnnotationModel;
use crate::nlp::pipeline::RulePipeline;
use crate::nlp::AnnotationPipeline;
use crate::skill_set::SkillSet;
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub skills: SkillSet,
    pub count: usize,
    pub section_strategy: SectionStrategy,
}

/// Extraction engine. Built once at startup; read-only afterwards, so one
/// instance can serve concurrent callers.
pub struct SkillEngine {
    locator: SectionLocator,
    splitter: CandidateSplitter,
    linguistic: LinguisticExtractor,
    canonicalizer: Canonicalizer,
}

impl SkillEngine {
    /// Build the engine, loading the annotation model named in the config or
    /// the built-in one. Errors here are fatal for the caller.
    pub fn new(config: &Config) -> Result<Self> {
        let model = match &config.model.gazetteer_path {
            Some(path) => AnnotationModel::load(path)?,
            None => AnnotationModel::builtin(),
        };
        let pipeline = RulePipeline::new(Arc::new(model))?;
        Self::with_pipeline(config, Arc::new(pipeline))
    }

    /// Build the engine around an existing annotation pipeline
    pub fn with_pipeline(config: &Config, pipeline: Arc<dyn AnnotationPipeline>) -> Result<Self> {
        Ok(Self {
            locator: SectionLocator::new(&config.extraction)?,
            splitter: CandidateSplitter::new(),
            linguistic: LinguisticExtractor::new(pipeline, config.extraction.max_entities),
            canonicalizer: Canonicalizer::new(CanonicalMap::from_pairs(&config.aliases)),
        })
    }

    pub fn extract(&self, text: &str) -> SkillSet {
        self.extract_report(text).skills
    }

    /// Extract skills and report how the skills section was found.
    ///
    /// Section candidates come first, then linguistic candidates, so the
    /// output order is fully determined by the input text.
    pub fn extract_report(&self, text: &str) -> ExtractionReport {
        let section = self.locator.locate(text);
        let section_candidates = if section.is_empty() {
            Vec::new()
        } else {
            self.splitter
                .split(section.body())
                .into_iter()
                .map(|candidate| candidate.to_lowercase())
                .collect()
        };
        debug!(
            "Section strategy {:?} produced {} candidates",
            section.strategy,
            section_candidates.len()
        );

        let linguistic_candidates = self.linguistic.extract(text);
        debug!("Linguistic extraction produced {} candidates", linguistic_candidates.len());

        let skills = self
            .canonicalizer
            .canonicalize(section_candidates.iter().chain(linguistic_candidates.iter()));
        debug!("Extracted {} skills", skills.len());

        ExtractionReport {
            count: skills.len(),
            skills,
            section_strategy: section.strategy,
        }
    }
}

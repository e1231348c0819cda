//! Skill extraction and skill-set matching for resumes and job postings

pub mod cli;
pub mod config;
pub mod error;
pub mod extraction;
pub mod input;
pub mod matching;
pub mod nlp;
pub mod output;
pub mod skill_set;

pub use config::Config;
pub use error::{Result, SkillMatchError};
pub use extraction::engine::{ExtractionReport, SkillEngine};
pub use matching::flatten::flatten_skills;
pub use matching::matcher::{compute_match, MatchReport, MatchResult};
pub use skill_set::SkillSet;

use once_cell::sync::OnceCell;

static ENGINE: OnceCell<SkillEngine> = OnceCell::new();

/// Build the process-wide engine. Later calls return the first engine and
/// ignore their config.
pub fn init(config: &Config) -> Result<&'static SkillEngine> {
    ENGINE.get_or_try_init(|| SkillEngine::new(config))
}

/// The process-wide engine, if `init` has succeeded
pub fn engine() -> Option<&'static SkillEngine> {
    ENGINE.get()
}

/// Extract canonical skills from free text
pub fn extract_skills(engine: &SkillEngine, text: &str) -> SkillSet {
    engine.extract(text)
}

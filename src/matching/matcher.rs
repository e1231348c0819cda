//! Resume/job skill-set matching

use crate::skill_set::SkillSet;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Skills on both sides, lexicographically ordered
    pub matched: SkillSet,
    /// Job skills missing from the resume, lexicographically ordered
    pub gap: SkillSet,
    /// Matched skills as a percentage of the resume's skills, two decimals
    pub match_percent: f64,
}

/// A match result together with the skill lists it was computed from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub resume_skills: Vec<String>,
    pub job_skills: Vec<String>,
    #[serde(flatten)]
    pub result: MatchResult,
}

impl MatchReport {
    pub fn new<S: AsRef<str>>(resume_skills: &[S], job_skills: &[S]) -> Self {
        Self {
            resume_skills: resume_skills.iter().map(|s| s.as_ref().to_string()).collect(),
            job_skills: job_skills.iter().map(|s| s.as_ref().to_string()).collect(),
            result: compute_match(resume_skills, job_skills),
        }
    }
}

/// Compare resume skills against job skills.
///
/// The percentage is relative to the resume's skill count, not the job's:
/// a resume listing many unrelated skills scores lower even when it covers
/// every job skill.
pub fn compute_match<S: AsRef<str>>(resume_skills: &[S], job_skills: &[S]) -> MatchResult {
    let resume: BTreeSet<String> = resume_skills.iter().map(|s| s.as_ref().to_lowercase()).collect();
    let job: BTreeSet<String> = job_skills.iter().map(|s| s.as_ref().to_lowercase()).collect();

    if resume.is_empty() || job.is_empty() {
        return MatchResult {
            matched: SkillSet::new(),
            gap: job.into_iter().collect(),
            match_percent: 0.0,
        };
    }

    let matched: SkillSet = resume.intersection(&job).cloned().collect();
    let gap: SkillSet = job.difference(&resume).cloned().collect();
    let match_percent = round2(matched.len() as f64 / resume.len() as f64 * 100.0);
    debug!(
        "Matched {} of {} resume skills against {} job skills ({}%)",
        matched.len(),
        resume.len(),
        job.len(),
        match_percent
    );

    MatchResult {
        matched,
        gap,
        match_percent,
    }
}

/// Two decimals, halves to even
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

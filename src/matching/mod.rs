//! Skill-set matching and skill-list normalization

pub mod flatten;
pub mod matcher;

//! Skill extraction from free-form document text

pub mod canonical;
pub mod engine;
pub mod keywords;
pub mod linguistic;
pub mod section;
pub mod splitter;

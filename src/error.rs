//! Error handling for skill extraction and matching

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillMatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Annotation model error: {0}")]
    ModelLoading(String),

    #[error("Invalid pattern: {0}")]
    Pattern(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, SkillMatchError>;

impl From<regex::Error> for SkillMatchError {
    fn from(err: regex::Error) -> Self {
        SkillMatchError::Pattern(err.to_string())
    }
}

impl From<aho_corasick::BuildError> for SkillMatchError {
    fn from(err: aho_corasick::BuildError) -> Self {
        SkillMatchError::Pattern(err.to_string())
    }
}

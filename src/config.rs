//! Configuration management for skill extraction and matching

use crate::error::{Result, SkillMatchError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub extraction: ExtractionConfig,
    pub aliases: BTreeMap<String, String>,
    pub job_keywords: JobKeywordConfig,
    pub model: ModelConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Header regexes in priority order; the first one found anywhere wins.
    pub header_patterns: Vec<String>,
    pub section_window: usize,
    pub fallback_min_segments: usize,
    pub fallback_max_line_len: usize,
    pub fallback_line_count: usize,
    pub max_entities: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JobKeywordConfig {
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// TOML annotation model replacing the built-in lexicon and gazetteer
    pub gazetteer_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
            aliases: default_aliases(),
            job_keywords: JobKeywordConfig::default(),
            model: ModelConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            header_patterns: vec![
                r"\bskills\b".to_string(),
                r"\btechnical skills\b".to_string(),
                r"\bcore competencies\b".to_string(),
                r"\bexpertise\b".to_string(),
            ],
            section_window: 600,
            fallback_min_segments: 3,
            fallback_max_line_len: 200,
            fallback_line_count: 3,
            max_entities: 50,
        }
    }
}

impl Default for JobKeywordConfig {
    fn default() -> Self {
        let keywords = [
            "python", "java", "c++", "sql", "mongodb", "flask", "django",
            "react", "node.js", "tensorflow", "keras", "pytorch",
            "aws", "gcp", "azure", "docker", "kubernetes",
            "nlp", "computer vision", "machine learning", "deep learning",
        ];
        Self {
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            color_output: true,
        }
    }
}

fn default_aliases() -> BTreeMap<String, String> {
    [
        ("py", "python"),
        ("python3", "python"),
        ("google cloud", "gcp"),
        ("aws", "aws"),
        ("amazon web services", "aws"),
        ("dbs", "databases"),
        ("sql server", "sql"),
        ("postgre", "postgresql"),
        ("nlp", "nlp"),
        ("machine learning", "machine learning"),
        ("ml", "machine learning"),
        ("data viz", "data visualization"),
        ("tableau", "tableau"),
        ("power bi", "power bi"),
        ("pandas", "pandas"),
        ("numpy", "numpy"),
    ]
    .iter()
    .map(|(alias, canonical)| (alias.to_string(), canonical.to_string()))
    .collect()
}

impl Config {
    /// Load from the default location, writing defaults there on first run
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            SkillMatchError::Configuration(format!("Failed to parse config {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| SkillMatchError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("skillmatch")
            .join("config.toml")
    }

    fn validate(&self) -> Result<()> {
        let extraction = &self.extraction;
        if extraction.section_window == 0 {
            return Err(SkillMatchError::Configuration(
                "extraction.section_window must be greater than zero".to_string(),
            ));
        }
        if extraction.fallback_line_count == 0 {
            return Err(SkillMatchError::Configuration(
                "extraction.fallback_line_count must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

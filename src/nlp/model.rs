//! Annotation model: part-of-speech lexicon and entity gazetteer
//!
//! A model is loaded once, wrapped in an `Arc` and never mutated. It can be
//! read from a TOML file:
//!
//! ```toml
//! adjective_suffixes = ["ive", "al"]
//!
//! [lexicon]
//! determiners = ["the", "a"]
//! verbs = ["built", "led"]
//!
//! [[entities]]
//! text = "Kubernetes"
//! label = "TECHNOLOGY"
//! ```
//!
//! Any table missing from the file falls back to the built-in model.

use crate::error::{Result, SkillMatchError};
use crate::nlp::{EntityLabel, PosTag};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    pub determiners: Vec<String>,
    pub pronouns: Vec<String>,
    pub prepositions: Vec<String>,
    pub conjunctions: Vec<String>,
    pub auxiliaries: Vec<String>,
    pub verbs: Vec<String>,
    pub adjectives: Vec<String>,
    pub adverbs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GazetteerEntry {
    pub text: String,
    pub label: EntityLabel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct ModelFile {
    adjective_suffixes: Vec<String>,
    verb_suffixes: Vec<String>,
    lexicon: Lexicon,
    entities: Vec<GazetteerEntry>,
}

impl Default for ModelFile {
    fn default() -> Self {
        Self {
            adjective_suffixes: to_strings(ADJECTIVE_SUFFIXES),
            verb_suffixes: to_strings(VERB_SUFFIXES),
            lexicon: Lexicon::default(),
            entities: builtin_gazetteer(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnnotationModel {
    closed_class: HashMap<String, PosTag>,
    adjective_suffixes: Vec<String>,
    verb_suffixes: Vec<String>,
    gazetteer: Vec<GazetteerEntry>,
}

impl AnnotationModel {
    pub fn builtin() -> Self {
        Self::from_file(ModelFile::default())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SkillMatchError::ModelLoading(format!("Failed to read model {}: {}", path.display(), e))
        })?;
        let file: ModelFile = toml::from_str(&content).map_err(|e| {
            SkillMatchError::ModelLoading(format!("Failed to parse model {}: {}", path.display(), e))
        })?;

        if file.entities.iter().any(|entry| entry.text.trim().is_empty()) {
            return Err(SkillMatchError::ModelLoading(format!(
                "Model {} contains an empty gazetteer entry",
                path.display()
            )));
        }

        let model = Self::from_file(file);
        info!("Loaded annotation model from {} ({} gazetteer entries)", path.display(), model.gazetteer.len());
        Ok(model)
    }

    fn from_file(file: ModelFile) -> Self {
        let lexicon = file.lexicon;
        let mut closed_class = HashMap::new();
        // Later groups win for words listed twice.
        let groups = [
            (lexicon.adverbs, PosTag::Adverb),
            (lexicon.adjectives, PosTag::Adjective),
            (lexicon.verbs, PosTag::Verb),
            (lexicon.conjunctions, PosTag::Conjunction),
            (lexicon.prepositions, PosTag::Preposition),
            (lexicon.pronouns, PosTag::Pronoun),
            (lexicon.auxiliaries, PosTag::Auxiliary),
            (lexicon.determiners, PosTag::Determiner),
        ];
        for (words, tag) in groups {
            for word in words {
                closed_class.insert(word.to_lowercase(), tag);
            }
        }

        Self {
            closed_class,
            adjective_suffixes: file.adjective_suffixes,
            verb_suffixes: file.verb_suffixes,
            gazetteer: file.entities,
        }
    }

    /// Tag for a word listed in the lexicon
    pub fn lexicon_tag(&self, lowercase_word: &str) -> Option<PosTag> {
        self.closed_class.get(lowercase_word).copied()
    }

    pub fn has_adjective_suffix(&self, lowercase_word: &str) -> bool {
        has_suffix(lowercase_word, &self.adjective_suffixes)
    }

    pub fn has_verb_suffix(&self, lowercase_word: &str) -> bool {
        has_suffix(lowercase_word, &self.verb_suffixes)
    }

    pub fn gazetteer(&self) -> &[GazetteerEntry] {
        &self.gazetteer
    }
}

impl Default for AnnotationModel {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Suffix rules only apply to words with a stem of at least three letters.
fn has_suffix(word: &str, suffixes: &[String]) -> bool {
    suffixes
        .iter()
        .any(|suffix| word.len() >= suffix.len() + 3 && word.ends_with(suffix.as_str()))
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

const ADJECTIVE_SUFFIXES: &[&str] = &["ive", "ous", "ful", "able", "ible", "ical", "less", "ish"];
const VERB_SUFFIXES: &[&str] = &["ed", "ize", "ized", "ise", "ised"];

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            determiners: to_strings(&[
                "a", "an", "the", "this", "that", "these", "those", "each", "every", "any",
                "some", "no", "all", "both", "either", "neither", "another", "such",
            ]),
            pronouns: to_strings(&[
                "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "you", "your",
                "yours", "he", "him", "his", "she", "her", "hers", "it", "its", "they", "them",
                "their", "theirs", "who", "whom", "whose", "which", "what", "anyone",
                "everyone", "someone", "something", "anything", "everything", "nothing",
            ]),
            prepositions: to_strings(&[
                "of", "in", "on", "at", "by", "for", "with", "without", "from", "to", "into",
                "onto", "over", "under", "about", "across", "after", "before", "between",
                "through", "during", "within", "via", "per", "including", "among", "around",
                "toward", "towards", "upon", "against", "beyond", "like", "as",
            ]),
            conjunctions: to_strings(&[
                "and", "or", "but", "nor", "so", "yet", "while", "although", "because", "if",
                "than", "then", "when", "where", "whereas", "whether", "unless", "until",
            ]),
            auxiliaries: to_strings(&[
                "is", "are", "was", "were", "be", "been", "being", "am", "have", "has", "had",
                "do", "does", "did", "will", "would", "shall", "should", "can", "could", "may",
                "might", "must", "not",
            ]),
            verbs: to_strings(&[
                "build", "built", "led", "manage", "develop", "create", "drive", "drove",
                "ship", "shipped", "write", "wrote", "ran", "make", "made", "seek", "seeking",
                "looking", "join", "using", "include", "includes", "require", "requires",
                "needs", "collaborate", "deliver", "maintain", "implement", "apply", "grow",
                "grew", "know", "get", "got", "take", "took", "keep", "bring", "brought",
                "enjoy", "love", "want", "hire", "hiring",
            ]),
            adjectives: to_strings(&[
                "senior", "junior", "strong", "solid", "excellent", "good", "great", "new",
                "large", "small", "high", "low", "fast", "key", "core", "deep", "proficient",
                "familiar", "responsible", "cross", "remote", "hybrid", "full", "native",
                "fluent", "advanced", "basic", "other", "various", "multiple", "several",
                "many", "more", "most", "less", "least", "best", "better",
            ]),
            adverbs: to_strings(&[
                "very", "also", "well", "highly", "closely", "too", "just", "only", "often",
                "always", "never", "not", "currently", "previously", "here", "there",
            ]),
        }
    }
}

fn builtin_gazetteer() -> Vec<GazetteerEntry> {
    let groups: &[(EntityLabel, &[&str])] = &[
        (
            EntityLabel::Organization,
            &[
                "Google", "Amazon", "Microsoft", "Apple", "Meta", "Facebook", "Netflix",
                "IBM", "Oracle", "Intel", "Nvidia", "Salesforce", "Adobe", "Uber", "Airbnb",
                "Stripe", "Spotify", "Twitter", "LinkedIn", "GitHub", "GitLab", "Atlassian",
                "Accenture", "Deloitte", "McKinsey", "Goldman Sachs", "JPMorgan",
                "Mozilla", "Apache Software Foundation", "Linux Foundation",
            ],
        ),
        (
            EntityLabel::Product,
            &[
                "Excel", "PowerPoint", "Outlook", "Tableau", "Power BI", "Jira",
                "Confluence", "Slack", "Figma", "Photoshop", "Illustrator", "Salesforce CRM",
                "SAP", "Looker", "Snowflake", "Databricks", "Jenkins", "Visual Studio",
                "IntelliJ", "Xcode", "Android Studio", "Postman", "Notion", "Trello",
            ],
        ),
        (
            EntityLabel::Technology,
            &[
                "Python", "Java", "JavaScript", "TypeScript", "Rust", "Golang", "C++",
                "C#", "Ruby", "PHP", "Swift", "Kotlin", "Scala", "MATLAB", "SQL",
                "NoSQL", "HTML", "CSS", "Bash", "React", "Angular", "Vue", "Node.js",
                "Django", "Flask", "FastAPI", "Spring Boot", "Rails", ".NET",
                "TensorFlow", "PyTorch", "Keras", "scikit-learn", "Pandas", "NumPy",
                "Spark", "Hadoop", "Kafka", "Airflow", "Docker", "Kubernetes", "Terraform",
                "Ansible", "AWS", "Azure", "GCP", "Google Cloud", "Amazon Web Services",
                "Linux", "Git", "PostgreSQL", "MySQL", "MongoDB", "Redis", "Elasticsearch",
                "GraphQL", "REST", "gRPC", "Machine Learning", "Deep Learning",
                "Computer Vision", "Natural Language Processing", "NLP", "CI/CD",
            ],
        ),
        (
            EntityLabel::CreativeWork,
            &["Clean Code", "The Pragmatic Programmer", "Design Patterns"],
        ),
        (
            EntityLabel::Language,
            &[
                "English", "Spanish", "French", "German", "Mandarin", "Chinese", "Japanese",
                "Korean", "Hindi", "Arabic", "Portuguese", "Italian", "Russian", "Dutch",
            ],
        ),
        (
            EntityLabel::NationalityOrGroup,
            &[
                "American", "British", "Canadian", "European", "Indian", "Asian", "African",
                "Latino", "Hispanic",
            ],
        ),
        (
            EntityLabel::Location,
            &[
                "New York", "San Francisco", "Seattle", "London", "Berlin", "Toronto",
                "Bangalore", "Singapore", "Remote US",
            ],
        ),
        (
            EntityLabel::Date,
            &[
                "January", "February", "March", "April", "June", "July", "August",
                "September", "October", "November", "December", "Present",
            ],
        ),
    ];

    groups
        .iter()
        .flat_map(|(label, names)| {
            names.iter().map(move |name| GazetteerEntry {
                text: name.to_string(),
                label: *label,
            })
        })
        .collect()
}

//! Integration tests for skill extraction and matching

use skillmatch::config::Config;
use skillmatch::extraction::canonical::{CanonicalMap, Canonicalizer};
use skillmatch::extraction::keywords::KeywordScanner;
use skillmatch::extraction::linguistic::LinguisticExtractor;
use skillmatch::extraction::section::SectionStrategy;
use skillmatch::input::manager::InputManager;
use skillmatch::nlp::model::AnnotationModel;
use skillmatch::nlp::pipeline::RulePipeline;
use skillmatch::{compute_match, flatten_skills, MatchReport, SkillEngine};
use std::path::Path;
use std::sync::Arc;

fn engine() -> SkillEngine {
    SkillEngine::new(&Config::default()).unwrap()
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("Jane Roe"));
    assert!(text.contains("Skills: Python, SQL"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("Jane Roe"));
    assert!(text.contains("Node.js"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let result = manager.extract_text(Path::new("tests/fixtures/unsupported.xyz")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let result = manager.extract_text(Path::new("tests/fixtures/nonexistent.txt")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_skill_list_must_be_json() {
    let manager = InputManager::new();
    let result = manager.read_skill_list(Path::new("tests/fixtures/sample_job.txt")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_resume_skills_from_txt() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    let report = engine().extract_report(&text);
    assert_eq!(report.section_strategy, SectionStrategy::Header(r"\bskills\b".to_string()));
    assert_eq!(report.count, report.skills.len());
    assert_eq!(&report.skills[..5], ["python", "sql", "aws", "docker", "machine learning"]);
}

#[tokio::test]
async fn test_resume_skills_from_markdown() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.md"))
        .await
        .unwrap();

    let skills = engine().extract(&text);
    assert_eq!(&skills[..4], ["python", "sql", "react", "node.js"]);
}

#[tokio::test]
async fn test_match_resume_against_job() {
    let mut manager = InputManager::new();
    let resume_text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let job_text = manager
        .extract_text(Path::new("tests/fixtures/sample_job.txt"))
        .await
        .unwrap();

    let engine = engine();
    let resume = engine.extract(&resume_text);
    let job = engine.extract(&job_text);
    let report = MatchReport::new(resume.as_slice(), job.as_slice());

    assert!(report.result.matched.contains("python"));
    assert!(report.result.matched.contains("aws"));
    assert!(report.result.gap.contains("kubernetes"));
    assert!(report.result.gap.contains("tableau"));
    assert!(report.result.match_percent > 0.0 && report.result.match_percent <= 100.0);
}

#[tokio::test]
async fn test_keyword_scan_of_job_posting() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_job.txt"))
        .await
        .unwrap();

    let scanner = KeywordScanner::new(&Config::default().job_keywords.keywords).unwrap();
    assert_eq!(
        scanner.scan(&text),
        ["aws", "docker", "kubernetes", "machine learning", "python"]
    );
}

#[tokio::test]
async fn test_compare_nested_skill_lists() {
    let manager = InputManager::new();
    let resume = manager
        .read_skill_list(Path::new("tests/fixtures/nested_skills.json"))
        .await
        .unwrap();
    let job = manager
        .read_skill_list(Path::new("tests/fixtures/job_skills.json"))
        .await
        .unwrap();

    let resume = flatten_skills(&resume);
    assert_eq!(resume, ["python", "sql", "aws", "docker"]);

    let result = compute_match(&resume, &flatten_skills(&job));
    assert_eq!(result.matched.as_slice(), ["aws", "python"]);
    assert_eq!(result.gap.as_slice(), ["kubernetes"]);
    assert_eq!(result.match_percent, 50.0);
}

#[test]
fn test_scenario_partial_overlap() {
    let result = compute_match(&["python", "sql"], &["python", "aws"]);
    assert_eq!(result.matched.as_slice(), ["python"]);
    assert_eq!(result.gap.as_slice(), ["aws"]);
    assert_eq!(result.match_percent, 50.0);
}

#[test]
fn test_scenario_empty_resume() {
    let result = compute_match::<&str>(&[], &["python"]);
    assert_eq!(result.match_percent, 0.0);
    assert!(result.matched.is_empty());
    assert_eq!(result.gap.as_slice(), ["python"]);
}

#[test]
fn test_scenario_skills_header_line() {
    let report = engine().extract_report("Skills: Python, SQL, AWS");
    assert_eq!(report.section_strategy, SectionStrategy::Header(r"\bskills\b".to_string()));
    assert_eq!(&report.skills[..3], ["python", "sql", "aws"]);
}

#[test]
fn test_scenario_alias_only_text() {
    let skills = engine().extract("py");
    assert!(skills.contains("python"));
    assert!(!skills.contains("py"));
}

#[test]
fn test_scenario_no_section_uses_linguistic_only() {
    let text = "Built APIs at Google using Kubernetes and Go services.";
    let config = Config::default();

    let report = engine().extract_report(text);
    assert_eq!(report.section_strategy, SectionStrategy::NotFound);

    let pipeline = RulePipeline::new(Arc::new(AnnotationModel::builtin())).unwrap();
    let linguistic = LinguisticExtractor::new(Arc::new(pipeline), config.extraction.max_entities);
    let canonicalizer = Canonicalizer::new(CanonicalMap::from_pairs(&config.aliases));
    let expected = canonicalizer.canonicalize(linguistic.extract(text));

    assert_eq!(report.skills, expected);
    assert!(report.skills.contains("kubernetes"));
}

#[test]
fn test_extraction_properties() {
    let engine = engine();
    let texts = [
        "Skills: Python, python, PY, Python3, SQL Server, sql",
        "Core competencies: data viz; Power BI; • Tableau (advanced) 90%",
        "Rust, Go, C++, C#, Node.js, TypeScript\nAlso some Kafka",
        "Led a team of five engineers at Microsoft building Azure tooling.",
        "",
    ];

    for text in texts {
        let first = engine.extract(text);
        let second = engine.extract(text);
        assert_eq!(first, second);

        for (idx, skill) in first.iter().enumerate() {
            let len = skill.chars().count();
            assert!((3..=60).contains(&len), "{:?} out of bounds", skill);
            assert_eq!(skill, &skill.to_lowercase());
            assert!(!first[idx + 1..].contains(skill), "{:?} duplicated", skill);
        }
    }
}

#[test]
fn test_aliases_collapse_in_section() {
    let skills = engine().extract("Skills: Python, python, PY, Python3, SQL Server, sql");
    assert_eq!(&skills[..2], ["python", "sql"]);
}

#[test]
fn test_process_wide_engine() {
    let config = Config::default();
    let first = skillmatch::init(&config).unwrap();
    let second = skillmatch::init(&config).unwrap();
    assert!(std::ptr::eq(first, second));
    assert!(skillmatch::engine().is_some());

    let skills = skillmatch::extract_skills(first, "Skills: Rust, SQL");
    assert_eq!(&skills[..2], ["rust", "sql"]);
}

#[test]
fn test_config_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("skillmatch").join("config.toml");

    let mut config = Config::default();
    config.aliases.insert("k8s".to_string(), "kubernetes".to_string());
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.aliases.get("k8s").map(String::as_str), Some("kubernetes"));

    let engine = SkillEngine::new(&loaded).unwrap();
    assert!(engine.extract("Skills: K8s, Docker, Helm").contains("kubernetes"));
}

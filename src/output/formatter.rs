//! Output formatters for extraction and match reports

use crate::config::OutputFormat;
use crate::error::{Result, SkillMatchError};
use crate::extraction::engine::ExtractionReport;
use crate::extraction::section::SectionStrategy;
use crate::matching::matcher::MatchReport;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting reports
pub trait OutputFormatter {
    fn format_extraction(&self, report: &ExtractionReport) -> Result<String>;
    fn format_match(&self, report: &MatchReport) -> Result<String>;
    fn format_keywords(&self, keywords: &[String]) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON formatter for API integration
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for saved reports
pub struct MarkdownFormatter;

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn header(&self, title: &str) -> String {
        if self.use_colors {
            format!("{}\n", title.bold().underline())
        } else {
            format!("{}\n{}\n", title, "=".repeat(title.chars().count()))
        }
    }

    fn skill_list(&self, skills: &[String], color: Color) -> String {
        if skills.is_empty() {
            return "  (none)\n".to_string();
        }
        skills
            .iter()
            .map(|skill| format!("  • {}\n", self.colorize(skill, color)))
            .collect()
    }

    fn percent_color(percent: f64) -> Color {
        match percent {
            p if p >= 75.0 => Color::Green,
            p if p >= 40.0 => Color::Yellow,
            _ => Color::Red,
        }
    }
}

fn describe_strategy(strategy: &SectionStrategy) -> String {
    match strategy {
        SectionStrategy::Header(pattern) => format!("header pattern {}", pattern),
        SectionStrategy::LineFallback(line) => format!("comma-separated line {}", line + 1),
        SectionStrategy::NotFound => "no skills section".to_string(),
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_extraction(&self, report: &ExtractionReport) -> Result<String> {
        let mut out = self.header("Extracted Skills");
        out.push_str(&format!("Section: {}\n", describe_strategy(&report.section_strategy)));
        out.push_str(&format!("Skills found: {}\n\n", report.count));
        out.push_str(&self.skill_list(&report.skills, Color::Cyan));
        Ok(out)
    }

    fn format_match(&self, report: &MatchReport) -> Result<String> {
        let result = &report.result;
        let percent = format!("{:.2}%", result.match_percent);

        let mut out = self.header("Skill Match");
        out.push_str(&format!(
            "Match: {} ({} of {} resume skills)\n",
            self.colorize(&percent, Self::percent_color(result.match_percent)),
            result.matched.len(),
            report.resume_skills.len()
        ));
        out.push_str(&format!("\nMatched skills ({}):\n", result.matched.len()));
        out.push_str(&self.skill_list(&result.matched, Color::Green));
        out.push_str(&format!("\nSkill gap ({}):\n", result.gap.len()));
        out.push_str(&self.skill_list(&result.gap, Color::Red));
        Ok(out)
    }

    fn format_keywords(&self, keywords: &[String]) -> Result<String> {
        let mut out = self.header("Job Keywords");
        out.push_str(&self.skill_list(keywords, Color::Cyan));
        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_json<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_extraction(&self, report: &ExtractionReport) -> Result<String> {
        self.to_json(report)
    }

    fn format_match(&self, report: &MatchReport) -> Result<String> {
        self.to_json(report)
    }

    fn format_keywords(&self, keywords: &[String]) -> Result<String> {
        self.to_json(&serde_json::json!({ "skills": keywords, "count": keywords.len() }))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    fn bullet_list(skills: &[String]) -> String {
        if skills.is_empty() {
            return "_None_\n".to_string();
        }
        skills.iter().map(|skill| format!("- {}\n", skill)).collect()
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_extraction(&self, report: &ExtractionReport) -> Result<String> {
        Ok(format!(
            "# Extracted Skills\n\n**Section:** {}  \n**Skills found:** {}\n\n{}",
            describe_strategy(&report.section_strategy),
            report.count,
            Self::bullet_list(&report.skills)
        ))
    }

    fn format_match(&self, report: &MatchReport) -> Result<String> {
        let result = &report.result;
        Ok(format!(
            "# Skill Match\n\n**Match:** {:.2}%\n\n## Matched Skills ({})\n\n{}\n## Skill Gap ({})\n\n{}",
            result.match_percent,
            result.matched.len(),
            Self::bullet_list(&result.matched),
            result.gap.len(),
            Self::bullet_list(&result.gap)
        ))
    }

    fn format_keywords(&self, keywords: &[String]) -> Result<String> {
        Ok(format!("# Job Keywords\n\n{}", Self::bullet_list(keywords)))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

/// Pick the formatter for a format
pub fn formatter_for(format: OutputFormat, use_colors: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleFormatter::new(use_colors)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter),
    }
}

/// Save formatted output to file
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(file_path, content).map_err(|e| {
        SkillMatchError::OutputFormatting(format!("Failed to write {}: {}", file_path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill_set::SkillSet;

    fn extraction() -> ExtractionReport {
        let skills: SkillSet = ["python", "sql"].into_iter().collect();
        ExtractionReport {
            count: skills.len(),
            skills,
            section_strategy: SectionStrategy::Header(r"\bskills\b".to_string()),
        }
    }

    fn match_report() -> MatchReport {
        MatchReport::new(&["python", "sql"], &["python", "aws"])
    }

    #[test]
    fn test_console_without_colors() {
        let out = ConsoleFormatter::new(false).format_match(&match_report()).unwrap();
        assert!(out.contains("Match: 50.00% (1 of 2 resume skills)"));
        assert!(out.contains("  • python"));
        assert!(out.contains("Skill gap (1):\n  • aws"));
    }

    #[test]
    fn test_console_extraction() {
        let out = ConsoleFormatter::new(false).format_extraction(&extraction()).unwrap();
        assert!(out.contains(r"Section: header pattern \bskills\b"));
        assert!(out.contains("Skills found: 2"));
    }

    #[test]
    fn test_json_extraction() {
        let out = JsonFormatter::new(false).format_extraction(&extraction()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["skills"], serde_json::json!(["python", "sql"]));
        assert_eq!(value["count"], 2);
    }

    #[test]
    fn test_markdown_match() {
        let out = MarkdownFormatter.format_match(&match_report()).unwrap();
        assert!(out.starts_with("# Skill Match"));
        assert!(out.contains("## Skill Gap (1)\n\n- aws\n"));
    }

    #[test]
    fn test_formatter_for() {
        assert_eq!(formatter_for(OutputFormat::Json, false).supports_format(), OutputFormat::Json);
        assert_eq!(formatter_for(OutputFormat::Markdown, true).supports_format(), OutputFormat::Markdown);
    }

    #[test]
    fn test_save_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("report.md");
        save_report_to_file("# hi", &path).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "# hi");
    }
}

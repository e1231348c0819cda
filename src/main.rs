//! skillmatch: extract skills from resumes and job postings and compare them

use anyhow::Context;
use clap::Parser;
use log::{error, info};
use skillmatch::cli::{parse_output_format, Cli, Commands, ConfigAction};
use skillmatch::config::{Config, OutputFormat};
use skillmatch::extraction::keywords::KeywordScanner;
use skillmatch::input::manager::InputManager;
use skillmatch::output::formatter::{formatter_for, save_report_to_file, OutputFormatter};
use skillmatch::{flatten_skills, MatchReport, SkillEngine};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, cli.config, config).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config_path: Option<PathBuf>, config: Config) -> anyhow::Result<()> {
    match command {
        Commands::Extract { input, output, save } => {
            let formatter = select_formatter(output.as_deref(), &config)?;
            let engine = startup_engine(&config)?;
            let mut inputs = InputManager::new();

            let text = inputs
                .extract_text(&input)
                .await
                .with_context(|| format!("Failed to read {}", input.display()))?;
            let report = engine.extract_report(&text);
            info!("Extracted {} skills from {}", report.count, input.display());

            emit(&formatter.format_extraction(&report)?, save.as_deref())?;
        }

        Commands::Match { resume, job, output, save } => {
            let formatter = select_formatter(output.as_deref(), &config)?;
            let engine = startup_engine(&config)?;
            let mut inputs = InputManager::new();

            let resume_text = inputs
                .extract_text(&resume)
                .await
                .with_context(|| format!("Failed to read resume {}", resume.display()))?;
            let job_text = inputs
                .extract_text(&job)
                .await
                .with_context(|| format!("Failed to read job posting {}", job.display()))?;

            let resume_skills = engine.extract(&resume_text);
            let job_skills = engine.extract(&job_text);
            info!(
                "Matching {} resume skills against {} job skills",
                resume_skills.len(),
                job_skills.len()
            );

            let report = MatchReport::new(resume_skills.as_slice(), job_skills.as_slice());
            emit(&formatter.format_match(&report)?, save.as_deref())?;
        }

        Commands::Compare { resume, job, output, save } => {
            let formatter = select_formatter(output.as_deref(), &config)?;
            let inputs = InputManager::new();

            let resume_list = inputs
                .read_skill_list(&resume)
                .await
                .with_context(|| format!("Failed to read skill list {}", resume.display()))?;
            let job_list = inputs
                .read_skill_list(&job)
                .await
                .with_context(|| format!("Failed to read skill list {}", job.display()))?;

            let report = MatchReport::new(&flatten_skills(&resume_list), &flatten_skills(&job_list));
            emit(&formatter.format_match(&report)?, save.as_deref())?;
        }

        Commands::Keywords { input, output, save } => {
            let formatter = select_formatter(output.as_deref(), &config)?;
            let scanner = KeywordScanner::new(&config.job_keywords.keywords)?;
            let mut inputs = InputManager::new();

            let text = inputs
                .extract_text(&input)
                .await
                .with_context(|| format!("Failed to read {}", input.display()))?;
            let found = scanner.scan(&text);
            info!("Found {} of {} keywords", found.len(), scanner.keyword_count());

            emit(&formatter.format_keywords(&found)?, save.as_deref())?;
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            match action {
                Some(ConfigAction::Show) | None => {
                    let content = toml::to_string_pretty(&config).context("Failed to serialize configuration")?;
                    println!("# {}\n{}", path.display(), content);
                }

                Some(ConfigAction::Reset) => {
                    Config::default().save_to(&path)?;
                    println!("Configuration reset: {}", path.display());
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }
            }
        }
    }

    Ok(())
}

/// Build the process-wide engine; failures here end the run
fn startup_engine(config: &Config) -> anyhow::Result<&'static SkillEngine> {
    skillmatch::init(config).context("Failed to initialize skill engine")
}

fn select_formatter(output: Option<&str>, config: &Config) -> anyhow::Result<Box<dyn OutputFormatter>> {
    let format = match output {
        Some(format) => parse_output_format(format).map_err(anyhow::Error::msg)?,
        None => config.output.format,
    };
    let use_colors = config.output.color_output && format == OutputFormat::Console;
    Ok(formatter_for(format, use_colors))
}

fn emit(content: &str, save: Option<&Path>) -> anyhow::Result<()> {
    match save {
        Some(path) => {
            save_report_to_file(content, path)?;
            println!("Report saved to {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

//! Bungo Control - CLI for the book pipeline's validation core.
//!
//! Validates manuscript files against the anti-AI rule tables and
//! emits quality reports; also builds and checks persona prompts.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

use bungo_common::intensity::revolutionary_intensity;
use bungo_common::persona::{self, Category};
use bungo_common::validator::Severity;
use bungo_common::{ContentValidator, QualityReport};

#[derive(Parser)]
#[command(name = "bungoctl")]
#[command(about = "Bungo pipeline - manuscript validation and prompt tools", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a manuscript file and print its quality report
    Validate {
        /// Path to the manuscript (UTF-8 text or Markdown)
        file: PathBuf,

        /// Output the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build the persona prompt for a category and check it
    Prompt {
        /// Book category: self-help, business, or technology
        category: Category,

        /// Append the maximum-intensity block
        #[arg(long)]
        max_intensity: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Validate { file, json } => validate_file(&file, json),
        Commands::Prompt {
            category,
            max_intensity,
        } => build_prompt(category, max_intensity),
    }
}

fn validate_file(file: &PathBuf, json: bool) -> Result<()> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("could not read {}", file.display()))?;
    debug!(file = %file.display(), chars = text.chars().count(), "loaded manuscript");

    let validator = ContentValidator::default();
    let result = validator.validate(&text);
    let report = QualityReport::build(&result);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let severity = match result.severity {
        Severity::Clean => "CLEAN".green().to_string(),
        Severity::Medium => "MEDIUM".yellow().to_string(),
        Severity::High => "HIGH".red().to_string(),
        Severity::Critical => "CRITICAL".red().bold().to_string(),
    };

    println!("Severity:            {severity}");
    println!("Machine responses:   {}", report.machine_response_hits);
    println!("Manipulation flags:  {}", report.manipulation_hits);
    println!("Human-style score:   {}/100", report.human_style_score);
    println!("Intensity:           {}/100", revolutionary_intensity(&text));
    println!("Recommendation:      {}", report.recommendation);

    for hit in &result.machine_response_hits {
        println!("  {} {}", "machine:".red(), hit.rule);
    }
    for hit in &result.manipulation_hits {
        println!("  {} {}", "manipulation:".yellow(), hit.rule);
    }
    for issue in &result.style_issues {
        println!("  {} {}", "style:".yellow(), issue);
    }

    Ok(())
}

fn build_prompt(category: Category, max_intensity: bool) -> Result<()> {
    let prompt = persona::complete_prompt(category, max_intensity);
    let check = persona::validate_prompt(&prompt);

    println!("{prompt}");
    eprintln!();
    if check.is_valid {
        eprintln!("{}", "prompt check: PASSED".green());
    } else {
        warn!(issues = check.issues.len(), "generated prompt failed its own check");
        eprintln!("{}", "prompt check: ISSUES FOUND".red());
        for issue in &check.issues {
            eprintln!("  - {issue}");
        }
    }

    Ok(())
}

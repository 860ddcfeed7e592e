//! calificar CLI - Psychometric Scoring and Certification Reporting
//!
//! Command-line interface for calificar operations.

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![allow(clippy::uninlined_format_args)]

use std::{path::PathBuf, process::ExitCode};

use calificar::{Analyzer, CertificationBand, ReportRenderer, ResponseMatrix};
use clap::{Parser, Subcommand};

/// calificar - Psychometric Scoring and Certification Reporting in Pure Rust
#[derive(Parser)]
#[command(name = "calificar")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a response matrix and print the scored result
    Analyze {
        /// Path to the response matrix file (comma-separated 0/1 rows)
        matrix: PathBuf,
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
        /// Also write the JSON artifact to this path
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Number of ranked persons in the text summary
        #[arg(short, long, default_value = "10")]
        top: usize,
    },
    /// Render the full text report for a response matrix
    Report {
        /// Path to the response matrix file
        matrix: PathBuf,
        /// Output file for the report (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Number of ranked persons in the top table
        #[arg(short, long, default_value = "10")]
        top: usize,
    },
    /// Validate a response matrix without scoring it
    Validate {
        /// Path to the response matrix file
        matrix: PathBuf,
    },
    /// Print the certification standards table
    Standards,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            matrix,
            format,
            output,
            top,
        } => cmd_analyze(&matrix, &format, output.as_ref(), top),
        Commands::Report {
            matrix,
            output,
            top,
        } => cmd_report(&matrix, output.as_ref(), top),
        Commands::Validate { matrix } => cmd_validate(&matrix),
        Commands::Standards => cmd_standards(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_analyze(
    matrix_path: &PathBuf,
    format: &str,
    output: Option<&PathBuf>,
    top: usize,
) -> calificar::Result<()> {
    let matrix = ResponseMatrix::from_csv(matrix_path)?;
    let result = Analyzer::new().analyze(&matrix);

    if format == "json" {
        println!("{}", result.to_json()?);
    } else {
        let stats = &result.statistics;
        println!("Analysis of {}", matrix_path.display());
        println!("{}", "=".repeat(50));
        println!("Participants:     {}", stats.total_participants);
        println!("Items:            {}", stats.total_items);
        println!("Overall accuracy: {:.2}%", stats.overall_accuracy);
        println!("Average score:    {:.2}", stats.average_score);
        println!("Best score:       {:.2}", stats.best_score);
        println!("Worst score:      {:.2}", stats.worst_score);
        println!();

        println!("{:<6} {:<16} {:<7} LEVEL", "RANK", "PARTICIPANT", "SCORE");
        println!("{}", "-".repeat(60));
        for (rank, person) in result.top(top).iter().enumerate() {
            println!(
                "{:<6} {:<16} {:<7} {}",
                rank + 1,
                format!("Participant {}", person.person_index),
                person.certification_score,
                person.certification_level.label()
            );
        }
    }

    if let Some(output_path) = output {
        result.save_json(output_path)?;
        println!("Result written to: {}", output_path.display());
    }

    Ok(())
}

fn cmd_report(matrix_path: &PathBuf, output: Option<&PathBuf>, top: usize) -> calificar::Result<()> {
    let matrix = ResponseMatrix::from_csv(matrix_path)?;
    let result = Analyzer::new().analyze(&matrix);
    let report = ReportRenderer::new().with_top_n(top).render(&result);

    if let Some(output_path) = output {
        std::fs::write(output_path, &report).map_err(|e| calificar::Error::io(e, output_path))?;
        println!("Report written to: {}", output_path.display());
    } else {
        println!("{}", report);
    }

    Ok(())
}

fn cmd_validate(matrix_path: &PathBuf) -> calificar::Result<()> {
    let matrix = ResponseMatrix::from_csv(matrix_path)?;

    println!("Valid matrix: {}", matrix_path.display());
    println!("Persons: {}", matrix.num_persons());
    println!("Items:   {}", matrix.num_items());
    println!(
        "Correct responses: {}/{}",
        matrix.total_correct(),
        matrix.num_persons() * matrix.num_items()
    );

    Ok(())
}

fn cmd_standards() -> calificar::Result<()> {
    println!("Certification Standards");
    println!("=======================");
    println!("{:<24} {:<10} DESCRIPTION", "LEVEL", "RANGE");
    println!("{}", "-".repeat(60));
    for band in CertificationBand::standards() {
        println!(
            "{:<24} {:<10} {}",
            band.level.label(),
            format!("{}-{}", band.min_score, band.max_score),
            band.description
        );
    }

    Ok(())
}

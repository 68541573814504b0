use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use mediscreen_core::config::timeout_from_env_value;
use mediscreen_core::constants::{DEFAULT_NOTES_SERVICE_URL, DEFAULT_PATIENT_SERVICE_URL};
use mediscreen_core::{
    age::today, classify, AssessmentResult, AssessmentService, CoreConfig, Gender,
    NoteTextScanner,
};

#[derive(Parser)]
#[command(name = "mediscreen")]
#[command(about = "Mediscreen diabetes risk assessment CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess one patient against the configured services
    Assess {
        /// Patient registry identifier
        patient_id: String,
        /// Reference date for the age calculation (YYYY-MM-DD, default today)
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },
    /// Assess every patient with a family name
    AssessFamily {
        /// Family name to search for
        family_name: String,
        /// Reference date for the age calculation (YYYY-MM-DD, default today)
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },
    /// Classify offline from an age, gender and trigger count
    Classify {
        #[arg(long)]
        age: u32,
        /// M, F, Male or Female
        #[arg(long)]
        gender: Gender,
        #[arg(long)]
        triggers: usize,
    },
    /// Count trigger terms in local note files, one note per file
    Scan {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Assess { patient_id, as_of }) => {
            let service = service_from_env()?;
            match service
                .assess_as_of(&patient_id, as_of.unwrap_or_else(today))
                .await
            {
                Ok(result) => print_result(&result),
                Err(e) => eprintln!("Error assessing patient {}: {}", patient_id, e),
            }
        }
        Some(Commands::AssessFamily { family_name, as_of }) => {
            let service = service_from_env()?;
            match service
                .assess_by_family_name(&family_name, as_of.unwrap_or_else(today))
                .await
            {
                Ok(results) => results.iter().for_each(print_result),
                Err(e) => eprintln!("Error assessing family {}: {}", family_name, e),
            }
        }
        Some(Commands::Classify {
            age,
            gender,
            triggers,
        }) => {
            println!("{}", classify(age, gender, triggers));
        }
        Some(Commands::Scan { files }) => {
            let mut notes = Vec::with_capacity(files.len());
            for path in &files {
                match std::fs::read_to_string(path) {
                    Ok(body) => notes.push(body),
                    Err(e) => {
                        eprintln!("Error reading {}: {}", path.display(), e);
                        return Ok(());
                    }
                }
            }

            let report = NoteTextScanner::new().scan(&notes);
            for m in &report.matches {
                println!("{}: {}", files[m.note_index].display(), m.term);
            }
            println!("Triggers: {}", report.trigger_count());
            println!("Distinct terms: {}", report.distinct_terms().join(", "));
        }
        None => {
            println!("Use 'mediscreen --help' for commands");
        }
    }

    Ok(())
}

/// Build an assessment service from the same environment variables the server reads.
fn service_from_env() -> Result<AssessmentService, Box<dyn std::error::Error>> {
    let patient_url = std::env::var("PATIENT_SERVICE_URL")
        .unwrap_or_else(|_| DEFAULT_PATIENT_SERVICE_URL.into());
    let notes_url =
        std::env::var("NOTES_SERVICE_URL").unwrap_or_else(|_| DEFAULT_NOTES_SERVICE_URL.into());
    let timeout = timeout_from_env_value(std::env::var("COLLABORATOR_TIMEOUT_SECS").ok())?;

    let cfg = CoreConfig::new(patient_url, notes_url, timeout)?;
    let (patients, notes) = mediscreen_clients::from_config(&cfg)?;
    Ok(AssessmentService::new(Arc::new(patients), Arc::new(notes)))
}

fn print_result(result: &AssessmentResult) {
    println!("{}", result);
    println!("  Triggers: {}", result.trigger_count);
}

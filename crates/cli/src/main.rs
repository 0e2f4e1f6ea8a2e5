use clap::{Parser, Subcommand};
use tropicare_core::scoring::structured::{self, DurationBucket, FeverLevel, StructuredResponse};
use tropicare_core::scoring::threshold;
use tropicare_core::{DoctorDirectory, SymptomCatalog};
use tropicare_types::Severity;

#[derive(Parser)]
#[command(name = "tropicare")]
#[command(about = "Tropicare symptom triage CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score selected catalog symptoms (threshold strategy)
    Score {
        /// Symptom labels (comma-separated), e.g. "Headache,Vomiting"
        symptoms: String,
    },
    /// Assess a structured questionnaire (structured strategy)
    Assess {
        /// Main complaint, e.g. "fever and headache"
        main_symptom: String,
        /// Fever level: high, mild, none or unsure
        fever: String,
        /// Duration: under-24h, 1-3-days, 4-7-days or over-1-week
        duration: String,
        /// Severity rating, 1-10
        severity: i64,
        /// Additional symptoms (comma-separated)
        #[arg(long)]
        additional: Option<String>,
        /// Recent travel to a malaria-endemic area
        #[arg(long)]
        travel: bool,
    },
    /// List the doctor directory
    Doctors,
    /// List the symptom catalog
    Symptoms,
}

fn parse_fever(text: &str) -> Option<FeverLevel> {
    match text {
        "high" => Some(FeverLevel::High),
        "mild" => Some(FeverLevel::Mild),
        "none" => Some(FeverLevel::None),
        "unsure" => Some(FeverLevel::Unsure),
        _ => None,
    }
}

fn parse_duration(text: &str) -> Option<DurationBucket> {
    match text {
        "under-24h" => Some(DurationBucket::UnderTwentyFourHours),
        "1-3-days" => Some(DurationBucket::OneToThreeDays),
        "4-7-days" => Some(DurationBucket::FourToSevenDays),
        "over-1-week" => Some(DurationBucket::OverOneWeek),
        _ => None,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Score { symptoms }) => {
            let catalog = SymptomCatalog::builtin();
            let selected: Vec<String> = symptoms
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if selected.is_empty() {
                eprintln!("Error: no symptoms given");
                return Ok(());
            }

            let outcome = threshold::diagnose(&catalog, &selected);
            println!(
                "Malaria: {}, Typhoid: {}",
                outcome.scores.malaria, outcome.scores.typhoid
            );
            println!("Diagnosis: {}", outcome.diagnosis);
            println!("Confidence: {}", outcome.confidence.label());
        }
        Some(Commands::Assess {
            main_symptom,
            fever,
            duration,
            severity,
            additional,
            travel,
        }) => {
            let Some(fever) = parse_fever(&fever) else {
                eprintln!("Error: fever must be one of high, mild, none, unsure");
                return Ok(());
            };
            let Some(duration) = parse_duration(&duration) else {
                eprintln!("Error: duration must be one of under-24h, 1-3-days, 4-7-days, over-1-week");
                return Ok(());
            };
            let severity = match Severity::new(severity) {
                Ok(severity) => severity,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return Ok(());
                }
            };

            let additional_symptoms: Vec<String> = additional
                .as_deref()
                .unwrap_or("")
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();

            let response = StructuredResponse {
                main_symptom,
                fever,
                duration,
                additional_symptoms,
                severity,
                travel_history: travel,
                medications_taken: None,
            };

            let assessment = structured::assess(&response);
            println!(
                "Malaria: {}, Typhoid: {}",
                assessment.scores.malaria, assessment.scores.typhoid
            );
            println!("Diagnosis: {}", assessment.diagnosis);
            println!("Confidence: {}%", assessment.confidence);
            println!("Severity: {}", assessment.severity_grade.label());
            println!("Urgency: {}", assessment.urgency.label());
            if assessment.requires_xray {
                println!("Chest X-ray recommended");
            }

            let directory = DoctorDirectory::builtin();
            let specialists = directory.recommend(&assessment.diseases);
            if !specialists.is_empty() {
                println!("Recommended specialists:");
                for profile in specialists {
                    println!(
                        "  {} ({}) at {}",
                        profile.name, profile.specialization, profile.hospital
                    );
                }
            }
        }
        Some(Commands::Doctors) => {
            let directory = DoctorDirectory::builtin();
            for profile in directory.profiles() {
                println!(
                    "ID: {}, Name: {}, Specialization: {}, Hospital: {}, Hours: {}",
                    profile.id,
                    profile.name,
                    profile.specialization,
                    profile.hospital,
                    profile.working_hours
                );
            }
        }
        Some(Commands::Symptoms) => {
            let catalog = SymptomCatalog::builtin();
            for entry in catalog.entries() {
                let conditions: Vec<&str> = entry
                    .conditions
                    .iter()
                    .map(|condition| condition.label())
                    .collect();
                println!(
                    "{} (weight {}): {}",
                    entry.name,
                    entry.weight,
                    conditions.join(", ")
                );
            }
        }
        None => {
            println!("Use 'tropicare --help' for commands");
        }
    }

    Ok(())
}

use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use historial_core::{
    constants::DEFAULT_DATABASE_PATH, CoreConfig, NewPatient, Patient, PatientDirectoryService,
};

#[derive(Parser)]
#[command(name = "historial")]
#[command(about = "Historial patient directory CLI")]
struct Cli {
    /// SQLite database file (":memory:" for a throwaway store)
    #[arg(long, env = "HISTORIAL_DATABASE_PATH", default_value = DEFAULT_DATABASE_PATH)]
    database: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all patients
    List,
    /// Find a patient by document identifier
    Find {
        documento: String,
    },
    /// Create a patient
    Create {
        nombre: String,
        apellido: String,
        documento: String,
        /// Date of birth (YYYY-MM-DD)
        fecha_nacimiento: NaiveDate,
        tratamiento: String,
    },
    /// Replace a patient's treatment
    UpdateTreatment {
        documento: String,
        tratamiento: String,
    },
    /// Delete a patient by document identifier
    Delete {
        documento: String,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    run(cli, &mut io::stdout().lock())
}

/// Executes the parsed command, writing its output to `out`.
fn run(cli: Cli, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    let Some(command) = cli.command else {
        writeln!(out, "Use 'historial --help' for commands")?;
        return Ok(());
    };

    let store = CoreConfig::new(cli.database).open_store()?;
    let directory = PatientDirectoryService::new(Arc::new(store));

    match command {
        Commands::List => {
            let patients = directory.list_all()?;
            if patients.is_empty() {
                writeln!(out, "No patients found.")?;
            } else {
                for patient in patients {
                    write_patient(out, &patient)?;
                }
            }
        }
        Commands::Find { documento } => match directory.find_by_document(&documento)? {
            Some(patient) => write_patient(out, &patient)?,
            None => writeln!(out, "No patient with documento {}", documento)?,
        },
        Commands::Create {
            nombre,
            apellido,
            documento,
            fecha_nacimiento,
            tratamiento,
        } => {
            let patient = directory.create(NewPatient {
                first_name: nombre,
                last_name: apellido,
                document: documento,
                birth_date: fecha_nacimiento,
                treatment: tratamiento,
            })?;
            write_patient(out, &patient)?;
        }
        Commands::UpdateTreatment {
            documento,
            tratamiento,
        } => match directory.update_treatment(&documento, tratamiento)? {
            Some(patient) => write_patient(out, &patient)?,
            None => writeln!(out, "No patient with documento {}", documento)?,
        },
        Commands::Delete { documento } => {
            writeln!(out, "{}", directory.delete(&documento)?)?;
        }
    }

    Ok(())
}

fn write_patient(out: &mut impl Write, patient: &Patient) -> Result<(), Box<dyn Error>> {
    writeln!(out, "{}", serde_json::to_string_pretty(patient)?)?;
    Ok(())
}

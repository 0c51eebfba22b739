use argument_engine_lib::models::argument::WinnersLosers;
use argument_engine_lib::models::conjunction::Dnf;
use argument_engine_lib::models::preference::{NoPreference, Preference, Ranking};
use argument_engine_lib::models::proposition::{Atom, Proposition};
use argument_engine_lib::services::{cases, decompose, impossible, explanation, questions};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ─── CLI argument parsing ───────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "argubench")]
#[command(about = "Propositional argumentation engine: defeat/rebuttal semantics over a formula-level information base")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decide what arguments survive for/against a question, under an
    /// information base and an optional preference ranking.
    Explain {
        /// JSON array of premise Propositions
        #[arg(long)]
        information: PathBuf,

        /// JSON Proposition naming the question
        #[arg(long)]
        question: PathBuf,

        /// JSON array of [rank, Proposition] pairs; omit for no preference
        #[arg(long)]
        preference: Option<PathBuf>,

        /// Write JSON result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Normalize a single formula to DNF and report its cases/impossibility.
    Decompose {
        /// JSON Proposition to decompose
        #[arg(long)]
        formula: PathBuf,
    },
}

// ─── Output types ───────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ExplainOutput {
    winners_losers: WinnersLosers,
    questions: Vec<Vec<Atom>>,
}

#[derive(Debug, Serialize)]
struct DecomposeOutput {
    cases: Dnf,
    impossible: bool,
}

// ─── Error handling ─────────────────────────────────────────────────────────

#[derive(Debug)]
enum CliError {
    Io(PathBuf, std::io::Error),
    Json(PathBuf, serde_json::Error),
    WriteOutput(PathBuf, std::io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(path, e) => write!(f, "failed to read {}: {}", path.display(), e),
            CliError::Json(path, e) => write!(f, "failed to parse JSON in {}: {}", path.display(), e),
            CliError::WriteOutput(path, e) => write!(f, "failed to write {}: {}", path.display(), e),
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &PathBuf) -> Result<T, CliError> {
    let text = fs::read_to_string(path).map_err(|e| CliError::Io(path.clone(), e))?;
    serde_json::from_str(&text).map_err(|e| CliError::Json(path.clone(), e))
}

fn emit(output: &Option<PathBuf>, json: &str) -> Result<(), CliError> {
    match output {
        Some(path) => fs::write(path, json).map_err(|e| CliError::WriteOutput(path.clone(), e)),
        None => {
            println!("{}", json);
            Ok(())
        }
    }
}

// ─── Commands ────────────────────────────────────────────────────────────

fn cmd_explain(
    information: &PathBuf,
    question: &PathBuf,
    preference: &Option<PathBuf>,
    output: &Option<PathBuf>,
) -> Result<(), CliError> {
    let information: Vec<Proposition> = read_json(information)?;
    let question: Proposition = read_json(question)?;

    let ranking: Option<Ranking> = match preference {
        Some(path) => {
            let entries: Vec<(i64, Proposition)> = read_json(path)?;
            Some(Ranking::new(entries))
        }
        None => None,
    };
    let preference_ref: &dyn Preference = match &ranking {
        Some(r) => r,
        None => &NoPreference,
    };

    eprintln!(
        "Explaining {} premise(s) against the question...",
        information.len()
    );
    let result = explanation(preference_ref, &question, &information);
    let open_questions = questions(preference_ref, &result);

    let out = ExplainOutput {
        winners_losers: result,
        questions: open_questions,
    };
    let json = serde_json::to_string_pretty(&out).expect("WinnersLosers serialization is infallible");
    emit(output, &json)
}

fn cmd_decompose(formula: &PathBuf) -> Result<(), CliError> {
    let proposition: Proposition = read_json(formula)?;
    let d = decompose(&proposition);
    let out = DecomposeOutput {
        cases: cases(&proposition),
        impossible: impossible(&d),
    };
    let json = serde_json::to_string_pretty(&out).expect("Dnf serialization is infallible");
    println!("{}", json);
    Ok(())
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Explain {
            information,
            question,
            preference,
            output,
        } => cmd_explain(information, question, preference, output),
        Commands::Decompose { formula } => cmd_decompose(formula),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

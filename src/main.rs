//! `floorplan`: command-line front end for the planner engine.
//!
//! Commands load and save plan files, check rooms against minimum sizes,
//! print a text summary, and ask an LLM to lay out a new plan.

mod config;
mod error;
mod llm;
mod services;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use planner::describe::describe_plan;
use planner::doc::Document;
use planner::engine::EngineCore;
use planner::standards::standards_context;
use planner::validation::validate_document;
use tracing::{debug, error, info};

use crate::config::{AppConfig, ConfigError};
use crate::error::ErrorCode;
use crate::llm::AnthropicClient;
use crate::llm::config::LlmConfig;
use crate::llm::types::LlmError;
use crate::services::generate::{GenerateError, GenerateOptions, generate_plan};
use crate::services::plan_file::{PlanFileError, now_ms, read_plan, write_plan};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Llm(#[from] LlmError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error(transparent)]
    PlanFile(#[from] PlanFileError),
    #[error("{count} room(s) below minimum size")]
    InvalidRooms { count: usize },
}

impl ErrorCode for CliError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Llm(e) => e.error_code(),
            Self::Generate(e) => e.error_code(),
            Self::PlanFile(e) => e.error_code(),
            Self::InvalidRooms { .. } => "E_INVALID_ROOMS",
        }
    }

    fn retryable(&self) -> bool {
        match self {
            Self::Llm(e) => e.retryable(),
            Self::Generate(e) => e.retryable(),
            Self::Config(_) | Self::PlanFile(_) | Self::InvalidRooms { .. } => false,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "floorplan", about = "Floor plan editor tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write an empty plan. Prints to stdout without `--out`.
    New {
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
    /// Report rooms smaller than the minimum for their type.
    Validate { file: PathBuf },
    /// Print a text summary of a plan.
    Describe { file: PathBuf },
    /// Print the standard room size table.
    Standards,
    /// Generate a plan from a description. Prints to stdout without `--out`.
    Generate {
        prompt: String,
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenvy::dotenv() {
        debug!(error = %e, "no .env loaded");
    }

    let cli = Cli::parse();
    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = e.error_code(), retryable = e.retryable(), "{e}");
            eprintln!("error [{}]: {e}", e.error_code());
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> Result<(), CliError> {
    let app = AppConfig::from_env()?;
    match command {
        Command::New { out } => {
            let engine = EngineCore::with_config(app.engine_config());
            emit(&engine, out.as_deref()).await
        }
        Command::Validate { file } => {
            let doc = read_plan(&file, &Document::new(), &app.extent).await?;
            let issues = validate_document(&doc, &app.extent);
            if issues.is_empty() {
                println!("ok: {} room(s) checked", doc.rooms.len());
                return Ok(());
            }
            for (id, message) in &issues {
                println!("{id}: {message}");
            }
            Err(CliError::InvalidRooms { count: issues.len() })
        }
        Command::Describe { file } => {
            let doc = read_plan(&file, &Document::new(), &app.extent).await?;
            println!("{}", describe_plan(&doc));
            Ok(())
        }
        Command::Standards => {
            println!("{}", standards_context());
            Ok(())
        }
        Command::Generate { prompt, out } => run_generate(&app, &prompt, out.as_deref()).await,
    }
}

async fn run_generate(app: &AppConfig, prompt: &str, out: Option<&Path>) -> Result<(), CliError> {
    let llm_config = LlmConfig::from_env()?;
    let options = GenerateOptions { max_tokens: llm_config.max_tokens, extent: app.extent };
    let client = AnthropicClient::from_config(llm_config)?;
    info!(model = client.model(), "generating plan");

    let plan = generate_plan(&client, prompt, &options).await?;
    let mut engine = EngineCore::with_config(app.engine_config());
    engine.apply_generated(plan);
    info!(summary = %describe_plan(engine.document()), "plan generated");
    emit(&engine, out).await
}

/// Write the engine's document to `out`, or print it when no path is given.
async fn emit(engine: &EngineCore, out: Option<&Path>) -> Result<(), CliError> {
    match out {
        Some(path) => {
            write_plan(path, engine.document()).await?;
            println!("wrote {}", path.display());
        }
        None => println!("{}", engine.export_json(now_ms()).map_err(PlanFileError::from)?),
    }
    Ok(())
}

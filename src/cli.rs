// src/cli.rs
use anyhow::{Context, Result};
use clap::{ArgGroup, Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use tracing::info;

use crate::core::{ConfigManager, ConfigOverrides, GapService, ServiceClient};
use crate::error::{GapError, Operation};
use crate::render::{render_json, render_report};
use crate::types::AnalysisResult;
use crate::workflow::GapWorkflow;

#[derive(Parser)]
#[command(name = "resume-gap", version)]
#[command(about = "Compare a resume against a job description using a remote analysis service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Base URL of the analysis service (overrides config file and API_BASE_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Request timeout in seconds; 0 disables it
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Also write JSON logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Verbose logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze the gap between a resume and a job description
    Analyze(AnalyzeArgs),
    /// Upload a PDF/Word document and print the extracted text
    Extract { document: PathBuf },
    /// Print the resolved configuration
    Config,
}

#[derive(Args, Debug, Default)]
#[command(group(ArgGroup::new("job_input").args(["job", "job_file"])))]
#[command(group(ArgGroup::new("resume_input").args(["resume_text", "resume_file", "upload"])))]
pub struct AnalyzeArgs {
    /// Job description text
    #[arg(long)]
    pub job: Option<String>,

    /// Read the job description from a file ("-" for stdin)
    #[arg(long)]
    pub job_file: Option<PathBuf>,

    /// Resume text typed on the command line
    #[arg(long)]
    pub resume_text: Option<String>,

    /// Read pasted resume text from a file ("-" for stdin)
    #[arg(long)]
    pub resume_file: Option<PathBuf>,

    /// Upload a PDF/Word resume for remote text extraction
    #[arg(long)]
    pub upload: Option<PathBuf>,

    /// Print the result as JSON instead of the report
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            api_url: self.api_url.clone(),
            timeout_seconds: self.timeout,
            config_path: self.config.clone(),
        }
    }
}

pub async fn handle_command(command: Command, config: ConfigManager) -> Result<()> {
    match command {
        Command::Analyze(args) => {
            let client = ServiceClient::new(config.service.clone())
                .context("Failed to create HTTP client")?;
            let result = run_analyze(GapWorkflow::new(client), &args).await?;

            if args.json {
                println!("{}", render_json(&result)?);
            } else {
                print!("{}", render_report(&result));
            }
        }

        Command::Extract { document } => {
            info!("Extraction endpoint: {}", config.service.extract_url());
            let client = ServiceClient::new(config.service.clone())
                .context("Failed to create HTTP client")?;
            let mut workflow = GapWorkflow::new(client);

            let notice = workflow
                .upload_resume(&document)
                .await
                .map_err(|e| report(e, Operation::Extract))?;
            eprintln!("{}", notice);
            println!("{}", workflow.session().resume_text);
        }

        Command::Config => {
            if let Some(path) = &config.source_file {
                info!("Configuration file: {}", path.display());
            }
            let rendered = toml::to_string_pretty(&config.service)
                .context("Failed to render configuration")?;
            print!("{}", rendered);
        }
    }

    Ok(())
}

/// Collect the inputs named by `args`, then run the analysis.
pub async fn run_analyze<S: GapService>(
    mut workflow: GapWorkflow<S>,
    args: &AnalyzeArgs,
) -> Result<AnalysisResult> {
    let job_description = match (&args.job, &args.job_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => read_text_source(path).await?,
        (None, None) => String::new(),
    };
    workflow.session_mut().set_job_description(job_description);

    if let Some(text) = &args.resume_text {
        workflow.paste_resume(text.clone());
    } else if let Some(path) = &args.resume_file {
        workflow.paste_resume(read_text_source(path).await?);
    } else if let Some(path) = &args.upload {
        let notice = workflow
            .upload_resume(path)
            .await
            .map_err(|e| report(e, Operation::Extract))?;
        eprintln!("{}", notice);
    }

    workflow
        .analyze()
        .await
        .map_err(|e| report(e, Operation::Analyze))
}

/// Show the blocking alert for `err` and turn it into a command failure.
fn report(err: GapError, operation: Operation) -> anyhow::Error {
    eprintln!("{}", err.alert(operation));
    anyhow::Error::new(err)
}

async fn read_text_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buffer)
            .await
            .context("Failed to read stdin")?;
        return Ok(buffer);
    }

    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read file: {}", path.display()))
}

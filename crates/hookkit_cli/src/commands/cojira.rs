//! cojira command - Gate a commit on the state of its Jira ticket.
//!
//! Exit codes: 1 status category not allowed, 2 fix version not allowed,
//! 3 fix version missing, 4 no ticket in the subject.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use tracing::info;

use hookkit_core::{HookReport, ProcessEnv};
use hookkit_ticket::{GateConfig, GateOptions, JiraClient, TicketGate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Args)]
pub struct CojiraArgs {
    /// Commit message file
    filename: PathBuf,

    /// Pass when no Jira URI is configured
    #[arg(short, long)]
    lenient: bool,

    /// Jira base URI, or $VAR to read it from the environment
    #[arg(short = 'u', long)]
    jira_uri: Option<String>,

    /// Jira personal access token, or $VAR to read it from the environment
    #[arg(short = 'p', long)]
    jira_pat: Option<String>,

    /// Status category that always passes (repeatable)
    #[arg(short = 'i', long)]
    allow_status_category: Vec<String>,

    /// Status category that fails (repeatable; default "done")
    #[arg(short = 'e', long)]
    disallow_status_category: Vec<String>,

    /// Fix version the ticket may have (repeatable, comma-separated, $VAR);
    /// enables the fix version check
    #[arg(short = 'v', long)]
    allowed_fix_version: Vec<String>,

    /// HTTP timeout in seconds
    #[arg(long, env = "HOOKKIT_HTTP_TIMEOUT", default_value_t = 30)]
    timeout: u64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl CojiraArgs {
    pub fn gate_options(&self) -> GateOptions {
        GateOptions {
            lenient: self.lenient,
            tracker_uri: self.jira_uri.clone(),
            token: self.jira_pat.clone(),
            allow_status_categories: self.allow_status_category.clone(),
            disallow_status_categories: self.disallow_status_category.clone(),
            allowed_fix_versions: self.allowed_fix_version.clone(),
            timeout: Duration::from_secs(self.timeout),
        }
    }
}

pub async fn execute(args: CojiraArgs) -> Result<u8> {
    let config = GateConfig::resolve(&args.gate_options(), &ProcessEnv);
    info!("Checking commit message {:?} with {:?}", args.filename, config);

    let client = JiraClient::new(&config.tracker_uri, &config.token, config.timeout)
        .context("Failed to create Jira client")?;
    let report = TicketGate::new(config, client)
        .run(&args.filename)
        .await
        .context("Failed to check ticket")?;
    let exit_code = report.exit_code();

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
            println!("{}", json);
        }
        OutputFormat::Text => HookReport::from(report).print(),
    }

    Ok(exit_code)
}

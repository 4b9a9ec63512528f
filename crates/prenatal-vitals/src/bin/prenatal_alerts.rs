//! Prenatal Alerts CLI Tool
//!
//! Evaluate vital-sign readings and contraction sessions from JSON.
//! Results go to stdout (or `--output`), logs to stderr.
//!
//! Usage:
//!   prenatal-alerts vitals <reading> [--no-validate]
//!   prenatal-alerts contractions <session> [--window-minutes <m>] [--now <rfc3339>]
//!   prenatal-alerts rules
//!
//! `<reading>` and `<session>` are inline JSON, `@file`, or `-` for stdin.

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use prenatal_vitals::{
    analyze_recent, evaluate_vital_alerts, highest_severity, rule_tables, AlertSeverity,
    AnalyzerConfig, Contraction, LaborStatus, PatternResult, PreviousReading, RuleDescription,
    VitalAlert, VitalReading, VitalsError,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "prenatal-alerts")]
#[command(author = "Mycelix Health")]
#[command(version = "0.1.0")]
#[command(about = "Evaluate prenatal vital signs and labor contraction patterns", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json, global = true)]
    format: OutputFormat,

    /// Output file (stdout if not specified)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Analyzer configuration file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log evaluation details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one vital-sign reading
    Vitals {
        /// Reading as JSON, @file, or - for stdin
        reading: String,

        /// Skip caller-side validation of the reading
        #[arg(long)]
        no_validate: bool,
    },

    /// Classify a contraction timer session
    Contractions {
        /// JSON array of contractions, @file, or - for stdin
        session: String,

        /// Trailing window in minutes (overrides the config file)
        #[arg(short, long)]
        window_minutes: Option<i64>,

        /// Reference time, RFC 3339 (defaults to the latest contraction start)
        #[arg(long, value_parser = parse_timestamp)]
        now: Option<DateTime<Utc>>,
    },

    /// List the alert rules in evaluation order
    Rules,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Single-line JSON
    Compact,
    /// Human-readable table
    Table,
}

/// Vitals input: an envelope with context, or a bare reading
enum VitalsInput {
    Envelope(VitalsEnvelope),
    Bare(VitalReading),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct VitalsEnvelope {
    reading: VitalReading,
    #[serde(default)]
    previous: Option<PreviousReading>,
    #[serde(default)]
    now: Option<DateTime<Utc>>,
}

impl VitalsInput {
    /// An object with a `reading` key is an envelope, anything else a bare
    /// reading. Errors inside an envelope are reported, never reinterpreted.
    fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let Some(object) = value.as_object() else {
            return Err(serde::de::Error::custom("vitals input must be a JSON object"));
        };
        if object.contains_key("reading") {
            serde_json::from_value(value).map(VitalsInput::Envelope)
        } else {
            serde_json::from_value(value).map(VitalsInput::Bare)
        }
    }

    fn into_parts(self) -> (VitalReading, Option<PreviousReading>, Option<DateTime<Utc>>) {
        match self {
            VitalsInput::Envelope(e) => (e.reading, e.previous, e.now),
            VitalsInput::Bare(reading) => (reading, None, None),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VitalsReport {
    alerts: Vec<VitalAlert>,
    highest_severity: Option<AlertSeverity>,
}

enum Report {
    Vitals(VitalsReport),
    Pattern(PatternResult),
    Rules(Vec<RuleDescription>),
}

impl Report {
    fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        match self {
            Report::Vitals(report) => serde_json::to_value(report),
            Report::Pattern(result) => serde_json::to_value(result),
            Report::Rules(rules) => serde_json::to_value(rules),
        }
    }

    fn to_table(&self) -> String {
        match self {
            Report::Vitals(report) => vitals_table(report),
            Report::Pattern(result) => pattern_table(result),
            Report::Rules(rules) => rules_table(rules),
        }
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let report = match cli.command {
        Commands::Vitals { reading, no_validate } => {
            let input = VitalsInput::from_json(&load_input(&reading)?)?;
            Report::Vitals(evaluate_input(input, !no_validate)?)
        }
        Commands::Contractions { session, window_minutes, now } => {
            let mut config = match &cli.config {
                Some(path) => AnalyzerConfig::from_json_file(path)?,
                None => AnalyzerConfig::default(),
            };
            if let Some(minutes) = window_minutes {
                config = config.with_window_minutes(minutes);
            }

            let contractions = parse_session(&load_input(&session)?)?;
            let now = now
                .or_else(|| contractions.iter().map(|c| c.start_time).max())
                .unwrap_or_else(Utc::now);

            let result = analyze_recent(&contractions, now, &config)?;
            info!(status = %result.status, analyzed = result.contraction_count, "contraction session analyzed");
            Report::Pattern(result)
        }
        Commands::Rules => Report::Rules(rule_tables()),
    };

    let output_str = match cli.format {
        OutputFormat::Json => serde_json::to_string_pretty(&report.to_json()?)?,
        OutputFormat::Compact => serde_json::to_string(&report.to_json()?)?,
        OutputFormat::Table => {
            if cli.output.is_some() {
                colored::control::set_override(false);
            }
            report.to_table()
        }
    };

    if let Some(output_path) = cli.output {
        fs::write(&output_path, &output_str)?;
        eprintln!("Output written to: {}", output_path.display());
    } else {
        println!("{}", output_str);
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "prenatal_vitals=debug,prenatal_alerts=debug"
    } else {
        "prenatal_vitals=info,prenatal_alerts=info"
    };
    let filter = EnvFilter::try_from_env("PRENATAL_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn evaluate_input(input: VitalsInput, validate: bool) -> Result<VitalsReport, VitalsError> {
    let (reading, previous, now) = input.into_parts();
    let now = now.unwrap_or_else(Utc::now);

    if validate {
        reading.validate()?;
        if let Some(previous) = &previous {
            previous.validate_against(now)?;
        }
    } else {
        debug!("reading validation skipped");
    }

    let alerts = evaluate_vital_alerts(&reading, previous.as_ref(), Some(now));
    let highest_severity = highest_severity(&alerts);
    info!(alerts = alerts.len(), highest = ?highest_severity, "reading evaluated");

    Ok(VitalsReport {
        alerts,
        highest_severity,
    })
}

/// Inline JSON, `@file`, or `-` for stdin
fn load_input(input: &str) -> io::Result<String> {
    if input == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else if let Some(path) = input.strip_prefix('@') {
        fs::read_to_string(path)
    } else {
        Ok(input.to_string())
    }
}

fn parse_session(json: &str) -> Result<Vec<Contraction>, serde_json::Error> {
    serde_json::from_str(json)
}

fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| format!("invalid RFC 3339 timestamp '{}': {}", s, e))
}

// Table rendering

fn color_severity(severity: AlertSeverity) -> ColoredString {
    match severity {
        AlertSeverity::Critical => severity.as_str().red().bold(),
        AlertSeverity::Warning => severity.as_str().yellow(),
        AlertSeverity::Info => severity.as_str().cyan(),
    }
}

fn vitals_table(report: &VitalsReport) -> String {
    if report.alerts.is_empty() {
        return format!("{}", "No alerts. All readings within normal ranges.".green());
    }

    let mut out = format!("{:<10} {:<24} {}\n", "SEVERITY".bold(), "TYPE".bold(), "MESSAGE".bold());
    for alert in &report.alerts {
        out.push_str(&format!(
            "{:<10} {:<24} {}\n",
            color_severity(alert.severity),
            alert.alert_type.as_str(),
            alert.message
        ));
    }
    if report.alerts.iter().any(VitalAlert::requires_immediate_attention) {
        out.push_str(&format!("\n{}", "Immediate attention required.".red().bold()));
    }
    out
}

fn pattern_table(result: &PatternResult) -> String {
    let status = match result.status {
        LaborStatus::ActiveLabor => result.status.as_str().red().bold(),
        LaborStatus::EarlyLabor => result.status.as_str().yellow().bold(),
        LaborStatus::Monitoring => result.status.as_str().green(),
    };
    let minutes = result
        .avg_interval
        .map_or_else(|| "-".to_string(), |m| format!("{} min", m));
    let seconds = result
        .avg_duration
        .map_or_else(|| "-".to_string(), |s| format!("{} s", s));

    format!(
        "{:<14} {}\n{:<14} {}\n{:<14} {}\n{:<14} {}\n{:<14} {}\n\n{}",
        "Status:", status,
        "Alert:", if result.should_alert { "yes".red().bold() } else { "no".normal() },
        "Contractions:", result.contraction_count,
        "Avg interval:", minutes,
        "Avg duration:", seconds,
        result.message
    )
}

fn rules_table(rules: &[RuleDescription]) -> String {
    let mut out = format!(
        "{:<16} {:<24} {:<10} {}\n",
        "METRIC".bold(),
        "TYPE".bold(),
        "SEVERITY".bold(),
        "CONDITION".bold()
    );
    for rule in rules {
        out.push_str(&format!(
            "{:<16} {:<24} {:<10} {}\n",
            rule.metric,
            rule.alert_type.as_str(),
            color_severity(rule.severity),
            rule.condition
        ));
    }
    out
}

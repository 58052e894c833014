//! `find-meeting` CLI — resolve meeting slots for a day's calendar.
//!
//! ## Usage
//!
//! ```sh
//! # Resolve slots (stdin → stdout)
//! echo '{"events":[],"request":{"duration":30}}' | find-meeting query
//!
//! # From file to file, with the optional attendees each slot suits
//! find-meeting query -i day.json -o slots.json --scored
//!
//! # Human-readable clock ranges
//! find-meeting query -i day.json --format text
//!
//! # Show how the day splits by optional-attendee availability
//! find-meeting partition -i day.json --pretty
//!
//! # Log each resolver stage to stderr
//! find-meeting -v query -i day.json
//! ```

mod input;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use meeting_resolver::{
    partition_optional, query_scored, Event, MeetingRequest, ScoredSlot, TimeRange,
};
use serde::Serialize;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

use input::Document;

#[derive(Parser)]
#[command(
    name = "find-meeting",
    version,
    about = "Find time slots for a meeting in a day's calendar"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log resolver stages to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the slots where the meeting can be held
    Query {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Include the optional attendees free for each slot
        #[arg(long)]
        scored: bool,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Split the day by which optional attendees are free
    Partition {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// JSON array
    Json,
    /// One `HH:MM-HH:MM` range per line
    Text,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Query {
            input,
            output,
            scored,
            pretty,
            format,
        } => {
            let (events, request) = read_document(input.as_deref())?;
            let slots = query_scored(&events, &request);
            tracing::info!(slots = slots.len(), "resolved meeting slots");

            let rendered = match format {
                Format::Text => render_text(&slots, scored),
                Format::Json if scored => to_json(&slots, pretty)?,
                Format::Json => {
                    let ranges: Vec<TimeRange> = slots.iter().map(|s| s.range).collect();
                    to_json(&ranges, pretty)?
                }
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Partition {
            input,
            output,
            pretty,
            format,
        } => {
            let (events, request) = read_document(input.as_deref())?;
            let segments = partition_optional(&events, &request.optional);

            let rendered = match format {
                Format::Text => {
                    let slots: Vec<ScoredSlot> = segments
                        .into_iter()
                        .map(|s| ScoredSlot {
                            range: s.range,
                            available: s.available,
                        })
                        .collect();
                    render_text(&slots, true)
                }
                Format::Json => to_json(&segments, pretty)?,
            };
            write_output(output.as_deref(), &rendered)?;
        }
    }

    Ok(())
}

/// Send logs to stderr so stdout stays machine-readable.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_document(path: Option<&str>) -> Result<(Vec<Event>, MeetingRequest)> {
    let json = read_input(path)?;
    let (events, request) = Document::parse(&json)?.into_parts()?;
    input::validate_request(&request)?;
    tracing::debug!(
        events = events.len(),
        duration = request.duration,
        "loaded calendar"
    );
    Ok((events, request))
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("Failed to serialize output")
}

fn render_text(slots: &[ScoredSlot], with_attendees: bool) -> String {
    let mut out = String::new();
    for slot in slots {
        out.push_str(&slot.range.to_string());
        if with_attendees && !slot.available.is_empty() {
            let names: Vec<&str> = slot.available.iter().map(String::as_str).collect();
            out.push_str("  ");
            out.push_str(&names.join(", "));
        }
        out.push('\n');
    }
    out
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}

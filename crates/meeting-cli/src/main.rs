//! `meetq` CLI — find free meeting windows from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Free windows for the request in query.json, as JSON
//! meetq find -i query.json
//!
//! # Same, piped through stdin, as human-readable lines
//! cat query.json | meetq find --format text
//!
//! # Show the merged busy blocks for the mandatory attendees
//! meetq busy -i query.json
//!
//! # Debug logging (or set RUST_LOG)
//! meetq -vv find -i query.json
//! ```

mod input;
mod logging;

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use meeting_engine::{merge_busy_blocks, query, Event, MeetingRequest, TimeRange};
use serde::Serialize;
use tracing::info;

use crate::input::QueryInput;

#[derive(Parser)]
#[command(
    name = "meetq",
    version,
    about = "Find every window in a day where all attendees are free"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List the free windows that satisfy the meeting request
    Find {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Show the merged busy blocks of the mandatory attendees
    Busy {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Text,
}

#[derive(Serialize)]
struct WindowDto {
    start: u32,
    end: u32,
    duration: u32,
}

impl From<TimeRange> for WindowDto {
    fn from(r: TimeRange) -> Self {
        Self {
            start: r.start(),
            end: r.end(),
            duration: r.duration(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Find {
            input,
            output,
            format,
        } => {
            let (events, request) = load(input.as_deref())?;
            let windows = query(&events, &request);
            info!(
                events = events.len(),
                duration = request.duration(),
                windows = windows.len(),
                "query complete"
            );
            let rendered = render(&windows, format)?;
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Busy {
            input,
            output,
            format,
        } => {
            let (events, request) = load(input.as_deref())?;
            let busy = merge_busy_blocks(&events, request.attendees().iter().map(String::as_str));
            let blocks: Vec<TimeRange> = busy.iter().collect();
            let rendered = render(&blocks, format)?;
            write_output(output.as_deref(), &rendered)?;
        }
    }

    Ok(())
}

fn load(path: Option<&str>) -> Result<(Vec<Event>, MeetingRequest)> {
    let json = read_input(path)?;
    QueryInput::parse(&json)?.into_parts()
}

fn render(ranges: &[TimeRange], format: Format) -> Result<String> {
    match format {
        Format::Json => {
            let dtos: Vec<WindowDto> = ranges.iter().copied().map(WindowDto::from).collect();
            let mut out = serde_json::to_string_pretty(&dtos)?;
            out.push('\n');
            Ok(out)
        }
        Format::Text => Ok(ranges
            .iter()
            .map(|r| format!("{} ({} min)\n", r, r.duration()))
            .collect()),
    }
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

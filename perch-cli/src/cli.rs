use std::path::PathBuf;

use clap::{Parser, Subcommand};
use perch::geom::{Placement, Rect, Viewport};

use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(name = "perch")]
#[command(about = "Resolve anchored overlay positions")]
#[command(version)]
pub struct Cli {
    /// Print debug logs to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Also write debug logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Print results as JSON lines
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay a JSON scenario through a position controller
    Run {
        /// Scenario file
        scenario: PathBuf,
    },
    /// Resolve a single position
    Place {
        /// Viewport size as WIDTHxHEIGHT
        #[arg(long, value_parser = parse_viewport)]
        viewport: Viewport,

        /// Trigger rect as X,Y,WIDTH,HEIGHT
        #[arg(long, value_parser = parse_rect)]
        trigger: Rect,

        /// Content size as WIDTHxHEIGHT
        #[arg(long, value_parser = parse_size)]
        content: Rect,

        /// Preferred placement, e.g. bottom, top-start, left-end
        #[arg(long, default_value = "bottom")]
        placement: Placement,

        /// Gap between trigger and content
        #[arg(long, default_value_t = perch::geom::DEFAULT_OFFSET)]
        offset: f32,
    },
}

fn parse_numbers<const N: usize>(value: &str, separator: char) -> Result<[f32; N], CliError> {
    let parts: Vec<&str> = value.split(separator).map(str::trim).collect();
    if parts.len() != N {
        return Err(CliError::InvalidArgument(value.to_string()));
    }

    let mut numbers = [0.0; N];
    for (slot, part) in numbers.iter_mut().zip(parts) {
        *slot = part
            .parse()
            .map_err(|_| CliError::InvalidArgument(value.to_string()))?;
    }
    Ok(numbers)
}

pub fn parse_rect(value: &str) -> Result<Rect, CliError> {
    let [x, y, width, height] = parse_numbers(value, ',')?;
    Ok(Rect::new(x, y, width, height))
}

pub fn parse_size(value: &str) -> Result<Rect, CliError> {
    let [width, height] = parse_numbers(value, 'x')?;
    Ok(Rect::from_size(width, height))
}

pub fn parse_viewport(value: &str) -> Result<Viewport, CliError> {
    let [width, height] = parse_numbers(value, 'x')?;
    Ok(Viewport::new(width, height))
}

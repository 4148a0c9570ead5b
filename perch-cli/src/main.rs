mod cli;
mod error;
mod scenario;

use std::fs::File;

use clap::Parser;
use log::LevelFilter;
use perch::ControllerConfig;
use perch::geom::{boundary, compute_position, Placement, PositionResult, Rect, Viewport};
use simplelog::{
    ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::scenario::{Published, Scenario};

fn init_logging(cli: &Cli) -> Result<(), CliError> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    if cli.verbose {
        loggers.push(TermLogger::new(
            LevelFilter::Debug,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }

    if let Some(path) = &cli.log_file {
        let log_file = File::create(path).map_err(CliError::LogFile)?;
        loggers.push(WriteLogger::new(LevelFilter::Debug, Config::default(), log_file));
    }

    if !loggers.is_empty() {
        CombinedLogger::init(loggers)?;
    }
    Ok(())
}

fn print(published: &Published, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string(published)?);
    } else {
        let result = &published.result;
        println!(
            "frame {}: {} at ({}, {}){}",
            published.frame,
            result.placement(),
            result.x,
            result.y,
            if result.did_flip { " flipped" } else { "" }
        );
    }
    Ok(())
}

/// Resolve one placement against a bare viewport.
fn place(
    viewport: Viewport,
    trigger: Rect,
    content: Rect,
    placement: Placement,
    offset: f32,
) -> Result<PositionResult, CliError> {
    let config = ControllerConfig::new().placement(placement).offset(offset);
    config.validate()?;

    let area = boundary(viewport, config.insets);
    Ok(compute_position(trigger, content, area, &config.placement))
}

fn run(cli: Cli) -> Result<(), CliError> {
    init_logging(&cli)?;

    match cli.command {
        Command::Run { scenario } => {
            let scenario = Scenario::load(&scenario)?;
            for published in scenario.replay()? {
                print(&published, cli.json)?;
            }
        }
        Command::Place {
            viewport,
            trigger,
            content,
            placement,
            offset,
        } => {
            let result = place(viewport, trigger, content, placement, offset)?;
            print(&Published { frame: 0, result }, cli.json)?;
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use perch::ConfigError;
    use perch::geom::Side;

    use super::*;

    #[test]
    fn test_place_flips_at_bottom_edge() {
        let result = place(
            Viewport::new(400.0, 400.0),
            Rect::new(350.0, 350.0, 20.0, 20.0),
            Rect::from_size(100.0, 40.0),
            Placement::bottom(),
            8.0,
        )
        .unwrap();

        assert_eq!(result.side, Side::Top);
        assert_eq!(result.y, 302.0);
        assert!(result.did_flip);
    }

    #[test]
    fn test_place_rejects_non_finite_offset() {
        let err = place(
            Viewport::new(400.0, 400.0),
            Rect::new(100.0, 100.0, 20.0, 20.0),
            Rect::from_size(100.0, 40.0),
            Placement::bottom(),
            f32::NAN,
        )
        .unwrap_err();

        assert!(matches!(err, CliError::Config(ConfigError::InvalidOffset(_))));
    }
}

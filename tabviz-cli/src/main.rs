//! tabviz command line
//!
//! Renders the library's charts from values passed as arguments.

mod config;
mod demo;
mod input;

use std::path::PathBuf;

use clap::Parser;
use error_stack::Report;
use tabviz::config::{RenderConfig, load_config_from};
use tabviz::output::OutputDir;
use tabviz::{Plotter, Table, TabvizError};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Command, Config, PairArgs};

/// Render a report with its attachments for the terminal.
pub(crate) fn report(report: Report<TabvizError>) -> anyhow::Error {
    anyhow::anyhow!("{report:?}")
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tabviz=info,tabviz_cli=info".into()),
        )
        .init();

    let cfg = Config::parse();

    let render = match &cfg.config {
        Some(path) => load_config_from(path).map_err(report)?,
        None => RenderConfig::default(),
    };
    let out = cfg
        .out_dir
        .clone()
        .unwrap_or_else(|| OutputDir::default().root().to_path_buf());
    info!(out_dir = %out.display(), "tabviz");
    let plotter = Plotter::new(out, render);

    match cfg.command {
        Command::Bars { labels } => {
            let counts = plotter.category_frequency(labels).map_err(report)?;
            for (label, n) in &counts.bars {
                println!("{label}\t{n}");
            }
            println!("{}", counts.path.display());
        }
        Command::Line { values } => print_path(plotter.line_1d(&values).map_err(report)?),
        Command::Scatter(PairArgs { x, y }) => {
            print_path(plotter.scatter_2d(&x, &y).map_err(report)?)
        }
        Command::Scatter3d { pair, z } => {
            print_path(plotter.scatter_3d(&pair.x, &pair.y, &z).map_err(report)?)
        }
        Command::Themed(pair) => {
            let table = xy_table(pair)?;
            print_path(plotter.themed_scatter(&table).map_err(report)?)
        }
        Command::Interactive { pair, open } => {
            let table = xy_table(pair)?;
            let path = plotter.interactive_scatter(&table).map_err(report)?;
            if open {
                open::that(&path)?;
            }
            print_path(path)
        }
        Command::Explore { columns, json } => {
            let table = input::parse_table(&columns)?;
            let exploration = plotter.explore(&table).map_err(report)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&exploration)?);
            } else {
                exploration.artifacts.into_iter().for_each(print_path);
            }
        }
        Command::Demo => demo::run(&plotter)?,
    }

    Ok(())
}

fn xy_table(PairArgs { x, y }: PairArgs) -> anyhow::Result<Table> {
    Table::from_columns([("x", x), ("y", y)]).map_err(report)
}

fn print_path(path: PathBuf) {
    println!("{}", path.display());
}

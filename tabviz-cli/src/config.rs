//! Command-line configuration

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Render charts from values given on the command line
#[derive(Parser, Clone, Debug)]
#[command(name = "tabviz")]
#[command(about = "Render bar, scatter, line, 3D, boxplot, heatmap and interactive charts")]
pub struct Config {
    /// Directory the artifacts are written to
    #[arg(long, global = true, env = "TABVIZ_PLOTS_DIR")]
    pub out_dir: Option<PathBuf>,

    /// JSON render config (dpi, font, colours, colormap)
    #[arg(long, global = true, env = "TABVIZ_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Command {
    /// Bar chart of how often each label occurs
    Bars {
        labels: Vec<String>,
    },

    /// Line through the values against their index
    Line {
        #[arg(allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// 2D scatter of paired values
    Scatter(PairArgs),

    /// 3D scatter of x, y and z values
    Scatter3d {
        #[command(flatten)]
        pair: PairArgs,

        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        z: Vec<f64>,
    },

    /// Scatter on a white grid, read from x and y columns
    Themed(PairArgs),

    /// Standalone HTML scatter with zoom and hover
    Interactive {
        #[command(flatten)]
        pair: PairArgs,

        /// Open the document in the default browser
        #[arg(long)]
        open: bool,
    },

    /// Statistics CSV, box plot, correlation heatmap and findings for a table
    Explore {
        /// Column as name=v1,v2,... (repeatable); empty entries are missing
        #[arg(long = "column", required = true)]
        columns: Vec<String>,

        /// Print the summary and correlation matrix as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run every chart on built-in sample data
    Demo,
}

#[derive(Args, Clone, Debug)]
pub struct PairArgs {
    /// Comma-separated x values
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub x: Vec<f64>,

    /// Comma-separated y values
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub y: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Config::command().debug_assert();
    }

    #[test]
    fn parses_pairs_and_globals() {
        let cfg = Config::try_parse_from([
            "tabviz", "scatter", "--x", "1,2,-3", "--y", "4,5,6", "--out-dir", "out",
        ])
        .unwrap();
        assert_eq!(cfg.out_dir, Some(PathBuf::from("out")));
        let Command::Scatter(pair) = cfg.command else {
            panic!("expected scatter");
        };
        assert_eq!(pair.x, vec![1.0, 2.0, -3.0]);
        assert_eq!(pair.y, vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn explore_requires_a_column() {
        assert!(Config::try_parse_from(["tabviz", "explore"]).is_err());
    }
}

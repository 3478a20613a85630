//! imchart binary
//!
//! Renders the chart page from CSV files, or prints the inferred schema of a
//! single CSV file.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use imchart_core::{render_page, PageConfig};
use imchart_io::load_table;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "imchart", version, about = "Render statistical charts from CSV files")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the boxplot, bar chart and line chart into one HTML page
    Render {
        /// Page configuration (TOML, or JSON with a .json extension)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Directory the configured CSV sources are read from
        #[arg(short, long, default_value = ".")]
        data_dir: PathBuf,

        /// Output HTML file
        #[arg(short, long, default_value = "index.html")]
        out: PathBuf,

        /// Also write each rendered chart as `<container>.svg` into this directory
        #[arg(long)]
        svg_dir: Option<PathBuf>,
    },

    /// Print the inferred column types of a CSV file as JSON
    Inspect {
        /// CSV file to inspect
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging, honoring RUST_LOG
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Render {
            config,
            data_dir,
            out,
            svg_dir,
        } => {
            let config = match config {
                Some(path) => PageConfig::load(&path).await?,
                None => PageConfig::default(),
            };
            let page = render_page(&config, &data_dir).await?;
            page.write(&out).await?;
            tracing::info!("Wrote {:?}", out);

            if let Some(dir) = svg_dir {
                for (container, scene) in &page.charts {
                    if let Some(scene) = scene {
                        let path = dir.join(format!("{}.svg", container));
                        scene.write_svg(&path).await?;
                        tracing::info!("Wrote {:?}", path);
                    }
                }
            }
        }
        Command::Inspect { file } => {
            let table = load_table(&file).await?;
            let schema = table.infer_schema();
            tracing::info!(
                "{} records, value columns: {}",
                schema.num_records,
                schema.numeric_columns().join(", ")
            );
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
    }
    Ok(())
}

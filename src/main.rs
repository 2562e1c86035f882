use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use std::path::Path;

mod field;
mod inventory;
mod row;
mod schema;
mod store;
mod subnet;
mod table;
mod view;

pub type Result<T> = anyhow::Result<T>;

use inventory::Inventory;
use store::{CsvFileStore, DatasetStore, WriteMode};

#[derive(Parser)]
#[command(name = "netinv")]
#[command(about = "Network device inventory CSV validator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an inventory CSV and report every finding.
    Validate {
        #[arg(long)]
        csv: String,
    },

    /// Print the IP list from a validated CSV.
    Ips {
        #[arg(long)]
        csv: String,

        /// Annotate each IP with the owning device and its location.
        #[arg(long)]
        annotate: bool,

        /// Label each IP with the job/device composite instead.
        #[arg(long, conflicts_with = "annotate")]
        labels: bool,
    },

    /// Print per-device detail records as JSON.
    Detail {
        #[arg(long)]
        csv: String,
    },

    /// Print the device table (fixed column subset).
    Show {
        #[arg(long)]
        csv: String,
    },

    /// Write the validated dataset to a destination CSV.
    Export {
        #[arg(long)]
        csv: String,

        #[arg(short = 'o', long)]
        out: String,

        /// Append rows to the destination instead of replacing it.
        #[arg(long)]
        append: bool,
    },

    /// Convert between dotted subnet masks and CIDR prefix lengths.
    Subnet {
        #[arg(long)]
        mask: Option<String>,

        #[arg(long)]
        prefix: Option<u8>,
    },
}

/// Load and validate, printing every finding on failure.
fn load(csv: &str) -> Result<Inventory> {
    let mut inv = Inventory::new();
    inv.load_and_validate(Path::new(csv));
    if !inv.is_valid() {
        for err in inv.errors() {
            eprintln!("{}", err);
        }
        bail!(
            "{} failed validation with {} error(s)",
            csv,
            inv.errors().len()
        );
    }
    Ok(inv)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Validate { csv } => {
            let inv = load(&csv)?;
            println!("OK ({} devices)", inv.len());
        }

        Commands::Ips {
            csv,
            annotate,
            labels,
        } => {
            let inv = load(&csv)?;
            if annotate {
                for line in inv.annotated_ips() {
                    println!("{}", line);
                }
            } else if labels {
                for (ip, label) in inv.labeled_ips() {
                    println!("{}\t{}", ip, label);
                }
            } else if !inv.is_empty() {
                println!("{}", inv.ip_text());
            }
        }

        Commands::Detail { csv } => {
            let inv = load(&csv)?;
            println!("{}", serde_json::to_string_pretty(&inv.details())?);
        }

        Commands::Show { csv } => {
            let inv = load(&csv)?;
            print_table(view::DISPLAY_COLUMNS, &inv.display_table());
        }

        Commands::Export { csv, out, append } => {
            let inv = load(&csv)?;
            let dataset = inv.dataset().context("no validated dataset")?;
            let mode = if append {
                WriteMode::Append
            } else {
                WriteMode::Replace
            };
            CsvFileStore.save(dataset, &out, mode)?;
            println!("Wrote {}", out);
        }

        Commands::Subnet { mask, prefix } => match (mask, prefix) {
            (Some(mask), None) => match subnet::mask_to_prefix(&mask) {
                Some(p) => println!("/{}", p),
                None => bail!("invalid subnet mask: {}", mask),
            },
            (None, Some(prefix)) => match subnet::prefix_to_mask(prefix) {
                Some(m) => println!("{}", m),
                None => bail!("invalid CIDR prefix: {}", prefix),
            },
            _ => bail!("pass exactly one of --mask or --prefix"),
        },
    }

    Ok(())
}

/// Left-aligned plain-text table with a header row.
fn print_table(columns: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = columns.iter().map(|c| c.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.len());
            }
        }
    }

    let line = |cells: Vec<&str>| {
        let parts: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
            .collect();
        println!("{}", parts.join("  ").trim_end());
    };

    line(columns.to_vec());
    for row in rows {
        line(row.iter().map(String::as_str).collect());
    }
}

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use chrono::Utc;
use clap::{Parser, Subcommand};
use log::info;

use orders_pdf::Assembler;
use orders_pdf::backup::{DeletedOrder, backup_deleted_order};
use orders_pdf::config::{PageArgs, ReportArgs, StoreArgs};
use orders_pdf::inspect::inspect;
use orders_pdf::page_params::PageParams;
use orders_pdf::report::{ReportOptions, generate_report};
use orders_pdf::store::LocalBlobStore;

/// Deleted-order backups and their plain-text PDF summary
#[derive(Parser, Debug)]
#[command(name = "orders_pdf", about = "Back up deleted orders and render them into a PDF summary")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a text file (one line per row) into a PDF
    Render {
        /// Title printed at the top of every page
        #[arg(long, default_value = "")]
        title: String,
        /// Input text file, "-" for stdin
        #[arg(long, default_value = "-")]
        input: String,
        /// Output PDF path
        #[arg(long, short)]
        output: PathBuf,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Summarise every deleted-order backup into one stored PDF
    Report {
        #[command(flatten)]
        store: StoreArgs,
        #[command(flatten)]
        report: ReportArgs,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Store the backup text of a deleted order (JSON payload, "-" for stdin)
    Backup {
        /// Order JSON file, "-" for stdin
        #[arg(long, default_value = "-")]
        order: String,
        #[command(flatten)]
        store: StoreArgs,
    },
    /// Parse a PDF and print its pages and text as JSON
    Inspect {
        /// PDF file to read
        path: PathBuf,
    },
}

fn read_input(source: &str) -> io::Result<String> {
    if source == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        fs::read_to_string(source)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Render { title, input, output, page } => {
            let text = read_input(&input)?;
            let lines: Vec<&str> = text.lines().collect();
            let pdf = Assembler::new(PageParams::from(&page)).assemble(&title, &lines);
            info!("{} line(s) -> {} page(s)", lines.len(), pdf.page_count());
            fs::write(&output, pdf.into_bytes())?;
            println!("Done.");
        }
        Command::Report { store, report, page } => {
            let store = LocalBlobStore::new(store.bucket);
            let assembler = Assembler::new(PageParams::from(&page));
            let summary = generate_report(&store, &assembler, &ReportOptions::from(&report), Utc::now())?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Command::Backup { order, store } => {
            let order: DeletedOrder = serde_json::from_str(&read_input(&order)?)?;
            let store = LocalBlobStore::new(store.bucket);
            let key = backup_deleted_order(&store, &order, Utc::now())?;
            println!("{key}");
        }
        Command::Inspect { path } => {
            let summary = inspect(&fs::read(path)?)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn every_argument_is_documented() {
        let cmd = Cli::command();
        cmd.clone().debug_assert();
        for sub in cmd.get_subcommands() {
            assert!(sub.get_about().is_some(), "{} has no about", sub.get_name());
            for arg in sub.get_arguments().filter(|a| a.get_id() != "help") {
                assert!(arg.get_help().is_some(), "{} --{} has no help", sub.get_name(), arg.get_id());
            }
        }
    }
}

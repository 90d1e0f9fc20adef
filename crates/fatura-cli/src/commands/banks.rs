//! Banks command - list supported statement layouts.

use clap::Args;
use console::style;

use fatura_core::{Bank, SortOrder};

/// Arguments for the banks command.
#[derive(Args)]
pub struct BanksArgs {
    /// Show spreadsheet placement details
    #[arg(long)]
    detailed: bool,
}

pub fn run(args: BanksArgs) -> anyhow::Result<()> {
    println!("{}", style("Supported banks:").bold());

    for bank in Bank::ALL {
        let profile = bank.profile();
        let sort = match profile.sort {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        };
        println!("  {} - sorts {} by default", style(bank).green(), sort);

        if args.detailed {
            println!(
                "      boundary patterns: {} ({})",
                profile.boundaries.len(),
                if profile.boundaries.len() > 1 {
                    "primary + delimiter"
                } else {
                    "primary only"
                }
            );
            println!(
                "      sheet region: row {}, columns {}-{}",
                profile.sheet.start_row, profile.sheet.description_col, profile.sheet.amount_col
            );
        }
    }

    Ok(())
}

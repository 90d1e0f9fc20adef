//! Process command - parse statement text dumps into transactions.

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Args;
use console::style;
use tracing::{debug, info};

use fatura_core::{Bank, SortOrder, StatementBatch, StatementParser};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input OCR text dumps, one file per capture pass
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Statement issuer (c6 or xp)
    #[arg(short, long, value_parser = parse_bank)]
    bank: Bank,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Override the bank's default sort order
    #[arg(short, long, value_enum)]
    sort: Option<SortArg>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Aligned plain-text table
    Table,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum SortArg {
    /// Earliest day and month first
    Asc,
    /// Latest day and month first
    Desc,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Asc => SortOrder::Ascending,
            SortArg::Desc => SortOrder::Descending,
        }
    }
}

fn parse_bank(value: &str) -> Result<Bank, String> {
    Bank::from_str(value).map_err(|e| e.to_string())
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    for input in &args.inputs {
        if !input.exists() {
            anyhow::bail!("Input file not found: {}", input.display());
        }
    }

    let mut dumps = Vec::with_capacity(args.inputs.len());
    for input in &args.inputs {
        info!("Reading dump: {}", input.display());
        dumps.push(fs::read_to_string(input)?);
    }
    let text = dumps.join("\n");
    debug!("Read {} characters from {} dumps", text.len(), dumps.len());

    let mut parser = StatementParser::new(args.bank);
    if let Some(sort) = args.sort {
        parser = parser.with_sort(sort.into());
    }

    let batch = parser.parse(&text);

    if batch.is_empty() {
        eprintln!(
            "{} no transactions recognized in the input",
            style("warning:").yellow()
        );
    }

    let output = format_batch(&batch, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_batch(batch: &StatementBatch, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(batch)?),
        OutputFormat::Csv => format_csv(batch),
        OutputFormat::Table => Ok(format_table(batch)),
    }
}

fn format_csv(batch: &StatementBatch) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(StatementBatch::COLUMNS)?;
    for transaction in &batch.transactions {
        wtr.write_record([
            &transaction.date,
            &transaction.description,
            &transaction.installment,
            &transaction.amount,
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_table(batch: &StatementBatch) -> String {
    let [date, description, installment, amount] = StatementBatch::COLUMNS;

    let mut output = String::new();
    output.push_str(&format!(
        "Statement: {} ({} transactions)\n\n",
        batch.bank,
        batch.len()
    ));
    output.push_str(&format!(
        "{date:<12} {description:<40} {installment:<12} {amount:>12}\n"
    ));
    for t in &batch.transactions {
        output.push_str(&format!(
            "{:<12} {:<40} {:<12} {:>12}\n",
            t.date, t.description, t.installment, t.amount
        ));
    }

    output
}

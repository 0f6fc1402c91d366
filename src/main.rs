mod allocate;
mod cli;
mod extract;
mod grid;
mod prelude;
mod session;
mod store;
mod tables;
mod units;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Args, Command},
    extract::{LabelScanExtractor, ReportExtractor},
    grid::Grid,
    prelude::*,
    session::Session,
    store::JsonFileStore,
    tables::{build_breakdown_table, build_inputs_table, build_summary_table},
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut session = Session::open(JsonFileStore::new(args.store_dir));

    match args.command {
        Command::Inspect(inspect_args) => {
            let grid = Grid::from_workbook_path(&inspect_args.report)?;
            let summary = LabelScanExtractor.extract(&grid);
            println!("{}", build_summary_table(&summary));
            Ok(())
        }

        Command::Inputs(inputs_args) => {
            let mut inputs = *session.inputs();
            if inputs_args.billing.merge_into(&mut inputs) {
                session.update_inputs(inputs)?;
            }
            println!("{}", build_inputs_table(session.inputs()));
            if !session.inputs().is_configured() {
                warn!("household usage is not set, calculation is unavailable");
            }
            Ok(())
        }

        Command::Calculate(calculate_args) => {
            let grid = Grid::from_workbook_path(&calculate_args.report)?;
            session.load_report(LabelScanExtractor.extract(&grid));

            let mut inputs = *session.inputs();
            if calculate_args.billing.merge_into(&mut inputs) {
                session.update_inputs(inputs)?;
            }
            if !session.can_calculate() {
                bail!("household usage must be positive, set it with `--household-usage` first");
            }
            session.calculate()?;

            if let Some(summary) = session.summary() {
                println!("{}", build_summary_table(summary));
            }
            println!("{}", build_inputs_table(session.inputs()));
            if let Some(breakdown) = session.breakdown() {
                println!("{}", build_breakdown_table(breakdown));
            }

            if calculate_args.print {
                session.hand_off_print()?;
                info!("print record written");
            }
            Ok(())
        }
    }
}

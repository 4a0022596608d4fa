mod args;
mod config;
mod reader;
mod writer;

use args::Args;

use mmp::batch::{self, BatchReport};
use mmp::summary::Summary;
use mmp::{MessageParser, Result};

fn main() -> Result {
    let args = args::parse_input_args()?;

    config::configure_app(args.verbose)?;

    log::debug!("Application configured. Beginning process...");

    let parser = MessageParser::new()?;

    let report = process_data(&parser, &args)?;

    log::debug!("Process complete. Beginning report...");

    write_report(&args, &report)?;

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Read input file and parse every message in it
fn process_data(parser: &MessageParser, args: &Args) -> Result<BatchReport> {
    log::debug!("Found filepath as input arg: {:?}", args.input);

    let rdr = reader::build_message_reader(&args.input)?;

    let report = batch::process_lines(parser, rdr)?;

    if !report.errors.is_empty() {
        log::warn!("{} lines could not be processed", report.errors.len());
    }

    Ok(report)
}

/// Build the output document and write it to the output file or stdout
fn write_report(args: &Args, report: &BatchReport) -> Result {
    let summary = if args.summary {
        Some(Summary::build(report)?)
    } else {
        None
    };

    let document = writer::OutputDocument::new(&args.input, report, summary);

    log::debug!("Serializing {} transactions...", document.transactions.len());
    let output = writer::write_to_string(&document)?;

    match &args.output {
        Some(path) => {
            log::debug!("Writing to {path:?}");
            writer::write_to_file(path, &output)?;
        }
        None => println!("{}", output),
    }

    Ok(())
}

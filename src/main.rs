mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use breakpoints::logging;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use workflow::QueryWorkflow;

fn main() -> Result<()> {
    let cli = parse_cli();
    logging::initialize(cli.verbose);

    let resolved = settings::load(&cli)?;

    if cli.print_config {
        resolved.print_summary();
    }

    let workflow = QueryWorkflow::from_config(&resolved);
    let report = workflow.run(&cli.query_command())?;

    match cli.output {
        OutputFormat::Plain => print_plain(&report),
        OutputFormat::Json => print_json(&report)?,
    }

    Ok(())
}

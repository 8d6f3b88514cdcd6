use std::path::PathBuf;

use breakpoints::{Breakpoints, Edge};
use clap::parser::ValueSource;
use clap::{
    ArgAction, ArgMatches, ColorChoice, CommandFactory, FromArgMatches, Parser,
    Subcommand, ValueEnum,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use crate::settings::SettingSource;

pub(crate) const UNIT_ENV: &str = "BREAKPOINTS_UNIT";
pub(crate) const STEP_ENV: &str = "BREAKPOINTS_STEP";

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
    let matches = <CliArgs as CommandFactory>::command().get_matches();
    from_matches(matches).unwrap_or_else(|err| err.exit())
}

/// Build [`CliArgs`] from parsed matches, recording where `--unit` and
/// `--step` came from.
pub(crate) fn from_matches(mut matches: ArgMatches) -> Result<CliArgs, clap::Error> {
    let unit_source = value_source(&matches, "unit", "--unit", UNIT_ENV);
    let step_source = value_source(&matches, "step", "--step", STEP_ENV);

    let mut cli = CliArgs::from_arg_matches_mut(&mut matches)?;
    cli.unit_source = unit_source;
    cli.step_source = step_source;
    Ok(cli)
}

fn value_source(
    matches: &ArgMatches,
    id: &str,
    flag: &'static str,
    env: &'static str,
) -> Option<SettingSource> {
    match matches.value_source(id)? {
        ValueSource::EnvVariable => Some(SettingSource::Environment(env)),
        _ => Some(SettingSource::CliFlag(flag)),
    }
}

/// Parse a `KEY=WIDTH` pair.
fn parse_value(raw: &str) -> Result<(String, f64), String> {
    let (key, width) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=WIDTH, got '{raw}'"))?;
    let width = width
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("invalid width '{}': {err}", width.trim()))?;
    Ok((key.trim().to_string(), width))
}

/// Interpret a command line edge. A configured key always wins; otherwise a
/// finite number is a raw width and anything else is an (unknown) key.
pub(crate) fn edge_from_arg<'a>(breakpoints: &Breakpoints, raw: &'a str) -> Edge<'a> {
    if breakpoints.width(raw).is_some() {
        return Edge::Key(raw);
    }
    match raw.trim().parse::<f64>() {
        Ok(width) if width.is_finite() => Edge::Width(width),
        _ => Edge::Key(raw),
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "breakpoints",
    version,
    about = "Generate CSS media queries from named responsive breakpoints",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
/// Command-line arguments accepted by the `breakpoints` binary.
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "BREAKPOINTS_CONFIG",
        help = "Read breakpoints from this configuration file (default: first default file found)"
    )]
    pub(crate) config: Option<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short,
        long,
        value_name = "UNIT",
        env = "BREAKPOINTS_UNIT",
        help = "Unit appended to every width (default: px)"
    )]
    pub(crate) unit: Option<String>,
    #[arg(
        short,
        long,
        value_name = "STEP",
        env = "BREAKPOINTS_STEP",
        allow_negative_numbers = true,
        help = "Exclusivity step, divided by 100 and subtracted from upper bounds (default: 5)"
    )]
    pub(crate) step: Option<f64>,
    #[arg(
        long = "value",
        value_name = "KEY=WIDTH",
        value_parser = parse_value,
        action = ArgAction::Append,
        help = "Define a breakpoint; replaces configured breakpoints when given (default: xs=0 sm=600 md=900 lg=1200 xl=1536)"
    )]
    pub(crate) values: Vec<(String, f64)>,
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Choose how results are printed"
    )]
    pub(crate) output: OutputFormat,
    #[arg(long = "print-config", help = "Print the effective configuration (default: disabled)")]
    pub(crate) print_config: bool,
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        help = "Increase log verbosity; BREAKPOINTS_LOG overrides it"
    )]
    pub(crate) verbose: u8,
    #[command(subcommand)]
    pub(crate) command: Option<QueryCommand>,
    #[arg(skip)]
    pub(crate) unit_source: Option<SettingSource>,
    #[arg(skip)]
    pub(crate) step_source: Option<SettingSource>,
}

impl CliArgs {
    /// The requested command, defaulting to the full table.
    pub(crate) fn query_command(&self) -> QueryCommand {
        self.command.clone().unwrap_or(QueryCommand::Table)
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub(crate) enum QueryCommand {
    /// Match widths at or above EDGE (a key or a width).
    Up {
        #[arg(allow_negative_numbers = true)]
        edge: String,
    },
    /// Match widths below EDGE (a key or a width).
    Down {
        #[arg(allow_negative_numbers = true)]
        edge: String,
    },
    /// Match widths from START up to, but excluding, END.
    Between {
        #[arg(allow_negative_numbers = true)]
        start: String,
        #[arg(allow_negative_numbers = true)]
        end: String,
    },
    /// Match widths from KEY up to the next breakpoint.
    Only { key: String },
    /// Match widths outside the range `only KEY` matches.
    Not { key: String },
    /// List breakpoints in ascending width order.
    Keys,
    /// Print every query for every breakpoint.
    Table,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Plain,
    Json,
}

#[cfg(test)]
pub(crate) fn parse_args<I, T>(args: I) -> CliArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = <CliArgs as CommandFactory>::command()
        .try_get_matches_from(args)
        .expect("arguments parse");
    from_matches(matches).expect("arguments convert")
}

mod args;
mod output;

pub(crate) use args::{CliArgs, OutputFormat, QueryCommand, edge_from_arg, parse_cli};
#[cfg(test)]
pub(crate) use args::parse_args;
pub(crate) use output::{print_json, print_plain};

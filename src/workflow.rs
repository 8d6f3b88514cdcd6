use anyhow::{Context, Result};
use breakpoints::Breakpoints;
use serde::Serialize;

use crate::cli::{QueryCommand, edge_from_arg};
use crate::settings::ResolvedConfig;

/// Result of running one command against a resolved breakpoint set.
#[derive(Debug, PartialEq)]
pub(crate) enum Report {
    Query { command: &'static str, query: String },
    Keys(Breakpoints),
    Table(Vec<TableRow>),
}

/// Every query generated for a single breakpoint.
#[derive(Debug, PartialEq, Serialize)]
pub(crate) struct TableRow {
    pub(crate) key: String,
    pub(crate) width: f64,
    pub(crate) up: String,
    pub(crate) down: String,
    pub(crate) only: String,
    /// Absent when the breakpoint is the only one configured.
    pub(crate) not: Option<String>,
}

/// Builds the breakpoint set once and answers commands against it.
pub(crate) struct QueryWorkflow {
    breakpoints: Breakpoints,
}

impl QueryWorkflow {
    pub(crate) fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            breakpoints: Breakpoints::new(config.options.clone()),
        }
    }

    pub(crate) fn run(&self, command: &QueryCommand) -> Result<Report> {
        let bp = &self.breakpoints;
        let report = match command {
            QueryCommand::Up { edge } => Report::Query {
                command: "up",
                query: bp.up(edge_from_arg(bp, edge))?,
            },
            QueryCommand::Down { edge } => Report::Query {
                command: "down",
                query: bp.down(edge_from_arg(bp, edge))?,
            },
            QueryCommand::Between { start, end } => Report::Query {
                command: "between",
                query: bp.between(edge_from_arg(bp, start), edge_from_arg(bp, end))?,
            },
            QueryCommand::Only { key } => Report::Query {
                command: "only",
                query: bp.only(key)?,
            },
            QueryCommand::Not { key } => Report::Query {
                command: "not",
                query: bp.not(key)?,
            },
            QueryCommand::Keys => Report::Keys(bp.clone()),
            QueryCommand::Table => Report::Table(self.table()?),
        };
        Ok(report)
    }

    fn table(&self) -> Result<Vec<TableRow>> {
        let bp = &self.breakpoints;
        bp.values()
            .iter()
            .map(|(key, width)| -> Result<TableRow> {
                let row = TableRow {
                    key: key.clone(),
                    width: *width,
                    up: bp.up(key)?,
                    down: bp.down(key)?,
                    only: bp.only(key)?,
                    not: bp.not(key).ok(),
                };
                Ok(row)
            })
            .collect::<Result<_>>()
            .context("failed to build the breakpoint table")
    }
}

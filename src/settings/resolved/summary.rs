use std::fmt::Write;

use breakpoints::{Breakpoints, DEFAULT_STEP, DEFAULT_UNIT};

use super::{ResolvedConfig, SettingSource};

pub(super) fn format_summary(config: &ResolvedConfig) -> String {
    let breakpoints = Breakpoints::new(config.options.clone());
    let sources = &config.sources;
    let mut out = String::new();

    let _ = writeln!(out, "Effective configuration:");
    match &config.config_file {
        Some(path) => {
            let _ = writeln!(out, "  Config file: {}", path.display());
        }
        None => {
            let _ = writeln!(out, "  Config file: (none)");
        }
    }
    let _ = writeln!(
        out,
        "  Unit: {} {}",
        breakpoints.unit(),
        origin(sources.unit.as_ref(), DEFAULT_UNIT)
    );
    let _ = writeln!(
        out,
        "  Step: {} {}",
        breakpoints.step(),
        origin(sources.step.as_ref(), &DEFAULT_STEP.to_string())
    );
    let _ = writeln!(
        out,
        "  Breakpoints: {}",
        origin(sources.values.as_ref(), "xs, sm, md, lg, xl")
    );
    for (key, width) in breakpoints.values() {
        let _ = writeln!(out, "    {key}: {width}");
    }

    out
}

fn origin(source: Option<&SettingSource>, default: &str) -> String {
    match source {
        Some(source) => format!("(from {source})"),
        None => format!("(default: {default})"),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use breakpoints::BreakpointsOptions;

    use super::super::ConfigSources;
    use super::*;

    #[test]
    fn summary_lists_sorted_breakpoints_and_origins() {
        let config = ResolvedConfig {
            options: BreakpointsOptions::new()
                .with_values([("wide", 1000.0), ("narrow", 0.0)])
                .with_unit("em"),
            config_file: Some(PathBuf::from("/tmp/breakpoints.toml")),
            sources: ConfigSources {
                values: Some(SettingSource::ConfigKey("values")),
                unit: Some(SettingSource::CliFlag("--unit")),
                step: None,
            },
        };

        let summary = format_summary(&config);
        assert!(summary.contains("Config file: /tmp/breakpoints.toml"));
        assert!(summary.contains("Unit: em (from CLI flag `--unit`)"));
        assert!(summary.contains("Step: 5 (default: 5)"));
        assert!(summary.contains("    narrow: 0\n    wide: 1000\n"));
    }

    #[test]
    fn summary_prints_without_panic() {
        ResolvedConfig::from_options(BreakpointsOptions::default()).print_summary();
    }
}

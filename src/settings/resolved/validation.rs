use breakpoints::BreakpointsOptions;

use super::{ConfigError, ConfigSources};

pub(super) fn validate(
    options: &BreakpointsOptions,
    sources: &ConfigSources,
) -> Result<(), ConfigError> {
    if let Some(step) = options.step
        && !step.is_finite()
    {
        return Err(ConfigError::non_finite_step(step, sources));
    }

    if let Some(unit) = &options.unit
        && unit.chars().any(char::is_whitespace)
    {
        return Err(ConfigError::unit_with_whitespace(unit, sources));
    }

    for (key, width) in options.values.iter().flatten() {
        if key.is_empty() {
            return Err(ConfigError::empty_key(*width, sources));
        }
        if !width.is_finite() || *width < 0.0 {
            return Err(ConfigError::invalid_width(key, *width, sources));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::SettingSource;
    use super::super::errors::Problem;
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(validate(&BreakpointsOptions::default(), &ConfigSources::default()).is_ok());
    }

    #[test]
    fn validation_rejects_non_finite_step() {
        let options = BreakpointsOptions::new().with_step(f64::NAN);
        let sources = ConfigSources {
            step: Some(SettingSource::Environment("BREAKPOINTS_STEP")),
            ..ConfigSources::default()
        };

        let err = validate(&options, &sources).unwrap_err();
        assert_eq!(err.key, "step");
        let message = err.to_string();
        assert!(message.contains("value: NaN"));
        assert!(message.contains("environment variable `BREAKPOINTS_STEP`"));
    }

    #[test]
    fn validation_rejects_negative_widths() {
        let options = BreakpointsOptions::new().with_values([("xs", -1.0), ("sm", 600.0)]);
        let sources = ConfigSources {
            values: Some(SettingSource::CliFlag("--value")),
            ..ConfigSources::default()
        };

        let err = validate(&options, &sources).unwrap_err();
        assert_eq!(err.key, "values");
        assert!(err.to_string().contains("value: xs=-1"));
        assert!(err.to_string().contains("CLI flag"));
    }

    #[test]
    fn validation_rejects_empty_keys() {
        let options = BreakpointsOptions::new().with_value("", 10.0);
        let err = validate(&options, &ConfigSources::default()).unwrap_err();
        assert_eq!(err.problem, Problem::EmptyKey);
        assert_eq!(err.origin, SettingSource::ConfigKey("values"));
    }

    #[test]
    fn validation_rejects_units_with_whitespace() {
        let options = BreakpointsOptions::new().with_unit("p x");
        let err = validate(&options, &ConfigSources::default()).unwrap_err();
        assert_eq!(err.key, "unit");
    }

    #[test]
    fn negative_step_is_allowed() {
        let options = BreakpointsOptions::new().with_step(-5.0);
        assert!(validate(&options, &ConfigSources::default()).is_ok());
    }
}

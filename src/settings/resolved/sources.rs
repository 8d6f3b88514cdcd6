use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
    CliFlag(&'static str),
    Environment(&'static str),
    ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
            Self::Environment(var) => write!(f, "environment variable `{var}`"),
            Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
        }
    }
}

/// Where each configured field came from. `None` means the default applies.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct ConfigSources {
    pub(crate) values: Option<SettingSource>,
    pub(crate) unit: Option<SettingSource>,
    pub(crate) step: Option<SettingSource>,
}

impl ConfigSources {
    pub(crate) fn source_for_values(&self) -> SettingSource {
        self.values
            .clone()
            .unwrap_or(SettingSource::ConfigKey("values"))
    }

    pub(crate) fn source_for_unit(&self) -> SettingSource {
        self.unit.clone().unwrap_or(SettingSource::ConfigKey("unit"))
    }

    pub(crate) fn source_for_step(&self) -> SettingSource {
        self.step.clone().unwrap_or(SettingSource::ConfigKey("step"))
    }
}

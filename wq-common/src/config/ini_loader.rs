use std::{fmt::Display, str::FromStr};

use anyhow::{bail, Context};
use configparser::ini::Ini;

use crate::error::Error;

pub struct IniLoader {
    pub ini: Ini,
}

impl IniLoader {
    pub fn new(config_file: &str) -> anyhow::Result<Self> {
        let mut ini = Ini::new();
        if let Err(err) = ini.load(config_file) {
            bail!(Error::ConfigError(format!(
                "failed to load config file [{}]: {}",
                config_file, err
            )))
        }
        Ok(Self { ini })
    }

    pub fn from_content(content: &str) -> anyhow::Result<Self> {
        let mut ini = Ini::new();
        if let Err(err) = ini.read(content.to_string()) {
            bail!(Error::ConfigError(format!("failed to parse config: {}", err)))
        }
        Ok(Self { ini })
    }

    /// Trimmed value, blank values count as absent.
    pub fn get_raw(&self, section: &str, key: &str) -> Option<String> {
        self.ini
            .get(section, key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    pub fn contains(&self, section: &str, key: &str) -> bool {
        self.get_raw(section, key).is_some()
    }

    pub fn get_required<T>(&self, section: &str, key: &str) -> anyhow::Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        match self.get_raw(section, key) {
            Some(value) => Self::parse(section, key, &value),
            None => bail!(Error::ConfigError(format!(
                "config [{}].{} is required",
                section, key
            ))),
        }
    }

    pub fn get_optional<T>(&self, section: &str, key: &str) -> anyhow::Result<T>
    where
        T: FromStr + Default,
        T::Err: Display,
    {
        self.get_with_default(section, key, T::default())
    }

    pub fn get_with_default<T>(&self, section: &str, key: &str, default: T) -> anyhow::Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        match self.get_raw(section, key) {
            Some(value) => Self::parse(section, key, &value),
            None => Ok(default),
        }
    }

    fn parse<T>(section: &str, key: &str, value: &str) -> anyhow::Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        value
            .parse::<T>()
            .map_err(|err| Error::ConfigError(format!("[{}]: {}", value, err)))
            .with_context(|| format!("invalid config [{}].{}", section, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTENT: &str = r#"
[runtime]
log_level=debug
blank=

[dispatcher]
worker_count=abc
"#;

    #[test]
    fn test_get_values() {
        let loader = IniLoader::from_content(CONTENT).unwrap();
        let log_level: String = loader.get_required("runtime", "log_level").unwrap();
        assert_eq!(log_level, "debug");

        assert!(!loader.contains("runtime", "blank"));
        assert!(loader
            .get_required::<String>("runtime", "blank")
            .is_err());
        assert_eq!(
            loader.get_with_default("runtime", "missing", 3usize).unwrap(),
            3
        );
        assert_eq!(
            loader.get_optional::<String>("runtime", "missing").unwrap(),
            ""
        );
    }

    #[test]
    fn test_unparsable_value() {
        let loader = IniLoader::from_content(CONTENT).unwrap();
        let err = loader
            .get_with_default("dispatcher", "worker_count", 1usize)
            .unwrap_err();
        assert!(err.to_string().contains("worker_count"));
    }
}

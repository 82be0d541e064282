use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::CoreError;

/// Whether the process runs against mock fixtures or the live items API
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(try_from = "String")]
pub enum RunMode {
    #[default]
    Development,
    Production,
}

impl RunMode {
    pub fn is_development(self) -> bool {
        self == RunMode::Development
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RunMode::Development => "development",
            RunMode::Production => "production",
        }
    }
}

impl FromStr for RunMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(RunMode::Development),
            "production" | "prod" => Ok(RunMode::Production),
            other => Err(CoreError::ValidationError(format!("unknown run mode: {}", other))),
        }
    }
}

impl TryFrom<String> for RunMode {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_mode() {
        assert_eq!("development".parse::<RunMode>().unwrap(), RunMode::Development);
        assert_eq!(" PROD ".parse::<RunMode>().unwrap(), RunMode::Production);
        assert!("staging".parse::<RunMode>().is_err());
        assert!(RunMode::default().is_development());
        assert_eq!(RunMode::Production.to_string(), "production");
    }

    #[test]
    fn test_deserialize_matches_parse() {
        let mode: RunMode = serde_json::from_str(r#""Production""#).unwrap();
        assert_eq!(mode, RunMode::Production);

        let mode: RunMode = serde_json::from_str(r#"" dev ""#).unwrap();
        assert_eq!(mode, RunMode::Development);

        assert!(serde_json::from_str::<RunMode>(r#""staging""#).is_err());
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::errors::LnError;

/// Log priorities, numbered the way `android.util.Log` numbers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "LevelRepr")]
#[repr(i32)]
pub enum Priority {
    Verbose = 2,
    Debug = 3,
    Info = 4,
    Warn = 5,
    Error = 6,
    Assert = 7,
}

impl Priority {
    pub const ALL: [Priority; 6] = [
        Priority::Verbose,
        Priority::Debug,
        Priority::Info,
        Priority::Warn,
        Priority::Error,
        Priority::Assert,
    ];

    pub fn as_raw(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> &'static str {
        match self {
            Priority::Verbose => "verbose",
            Priority::Debug => "debug",
            Priority::Info => "info",
            Priority::Warn => "warn",
            Priority::Error => "error",
            Priority::Assert => "assert",
        }
    }

    /// `log` has no assert tier, so `Assert` lands on `Error`.
    pub fn to_log_level(self) -> log::Level {
        match self {
            Priority::Verbose => log::Level::Trace,
            Priority::Debug => log::Level::Debug,
            Priority::Info => log::Level::Info,
            Priority::Warn => log::Level::Warn,
            Priority::Error | Priority::Assert => log::Level::Error,
        }
    }

    pub fn to_tracing_level(self) -> tracing::Level {
        match self {
            Priority::Verbose => tracing::Level::TRACE,
            Priority::Debug => tracing::Level::DEBUG,
            Priority::Info => tracing::Level::INFO,
            Priority::Warn => tracing::Level::WARN,
            Priority::Error | Priority::Assert => tracing::Level::ERROR,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Debug
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<log::Level> for Priority {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => Priority::Verbose,
            log::Level::Debug => Priority::Debug,
            log::Level::Info => Priority::Info,
            log::Level::Warn => Priority::Warn,
            log::Level::Error => Priority::Error,
        }
    }
}

impl TryFrom<i32> for Priority {
    type Error = LnError;

    fn try_from(raw: i32) -> Result<Self, LnError> {
        Priority::ALL
            .into_iter()
            .find(|p| p.as_raw() == raw)
            .ok_or_else(|| LnError::InvalidLevel(raw.to_string()))
    }
}

impl FromStr for Priority {
    type Err = LnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v" | "verbose" | "trace" => Ok(Priority::Verbose),
            "d" | "debug" => Ok(Priority::Debug),
            "i" | "info" => Ok(Priority::Info),
            "w" | "warn" | "warning" => Ok(Priority::Warn),
            "e" | "error" => Ok(Priority::Error),
            "a" | "assert" | "wtf" | "fatal" => Ok(Priority::Assert),
            other => Err(LnError::InvalidLevel(other.to_string())),
        }
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

// Config sources hand levels over either as names or as Android's integers.
#[derive(Deserialize)]
#[serde(untagged)]
enum LevelRepr {
    Raw(i64),
    Name(String),
}

impl TryFrom<LevelRepr> for Priority {
    type Error = LnError;

    fn try_from(repr: LevelRepr) -> Result<Self, LnError> {
        match repr {
            LevelRepr::Raw(raw) => i32::try_from(raw)
                .map_err(|_| LnError::InvalidLevel(raw.to_string()))
                .and_then(Priority::try_from),
            LevelRepr::Name(name) => name.parse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_matches_android_values() {
        assert!(Priority::Verbose < Priority::Debug);
        assert!(Priority::Error < Priority::Assert);
        assert_eq!(Priority::Info.as_raw(), 4);
        assert_eq!(Priority::default(), Priority::Debug);
    }

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("WTF".parse::<Priority>().unwrap(), Priority::Assert);
        assert_eq!(" trace ".parse::<Priority>().unwrap(), Priority::Verbose);
        assert_eq!("w".parse::<Priority>().unwrap(), Priority::Warn);
        assert!("loud".parse::<Priority>().is_err());
    }

    #[test]
    fn raw_values_outside_the_range_are_rejected() {
        assert_eq!(Priority::try_from(6).unwrap(), Priority::Error);
        assert!(Priority::try_from(1).is_err());
        assert!(Priority::try_from(8).is_err());
    }

    #[test]
    fn log_level_round_trip_collapses_assert() {
        assert_eq!(Priority::Assert.to_log_level(), log::Level::Error);
        assert_eq!(Priority::from(log::Level::Error), Priority::Error);
        assert_eq!(Priority::from(log::Level::Trace), Priority::Verbose);
    }
}

//! Closed enumerations attached to every [`HandlerError`](crate::HandlerError).

use crate::error::{Error, Result};
use core::fmt::{self, Display};
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// How serious an error is.
///
/// Variants are declared from least to most severe; [`Severity::weight`] is
/// the ordering key used by chain analysis.
///
/// # Examples
///
/// ```
/// use handler_error::Severity;
///
/// assert!(Severity::Critical.weight() > Severity::Warning.weight());
/// assert_eq!("info".parse::<Severity>().unwrap(), Severity::Info);
/// assert!("fatal".parse::<Severity>().is_err());
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug,
    Info,
    Warning,
    #[default]
    Error,
    Critical,
}

impl Severity {
    /// Every severity, least severe first.
    pub const ALL: [Severity; 5] =
        [Severity::Debug, Severity::Info, Severity::Warning, Severity::Error, Severity::Critical];

    /// Numeric weight, `1` for debug up to `5` for critical.
    #[inline]
    pub const fn weight(self) -> u8 {
        match self {
            Severity::Debug => 1,
            Severity::Info => 2,
            Severity::Warning => 3,
            Severity::Error => 4,
            Severity::Critical => 5,
        }
    }

    /// Lowercase wire name.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Critical => "critical",
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Severity::ALL.into_iter().find(|severity| severity.as_str() == s).ok_or_else(|| {
            Error::invalid_argument(format!(
                "Invalid severity: \"{s}\". Must be one of: {}",
                join_names(Severity::ALL.iter().map(|s| s.as_str()))
            ))
        })
    }
}

/// Broad category of an error: blocking or advisory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorType {
    #[default]
    Error,
    Warning,
}

impl ErrorType {
    pub const ALL: [ErrorType; 2] = [ErrorType::Error, ErrorType::Warning];

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorType::Error => "error",
            ErrorType::Warning => "warning",
        }
    }

    /// Capitalized label used in log reports (`Error`, `Warning`).
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            ErrorType::Error => "Error",
            ErrorType::Warning => "Warning",
        }
    }
}

impl Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ErrorType::ALL.into_iter().find(|kind| kind.as_str() == s).ok_or_else(|| {
            Error::invalid_argument(format!(
                "Invalid error type: \"{s}\". Must be one of: {}",
                join_names(ErrorType::ALL.iter().map(|t| t.as_str()))
            ))
        })
    }
}

pub(crate) fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

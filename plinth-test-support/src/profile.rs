//! Property-test run profile read from the environment.
//!
//! Every property suite in the workspace sizes itself through
//! [`ProptestRunProfile`], so CI can raise case counts or enable forking with
//! one pair of variables.

use std::env;

use thiserror::Error;

/// Environment variable overriding the number of cases per property.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable enabling forked proptest execution.
pub const PLINTH_PBT_FORK_ENV_KEY: &str = "PLINTH_PBT_FORK";

/// Reason an environment override was ignored.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum OverrideError {
    /// The case count is not an unsigned integer.
    #[error("case count `{raw}` is not an unsigned integer")]
    MalformedCases {
        /// Raw value taken from the environment.
        raw: String,
    },
    /// A zero case count would skip the property entirely.
    #[error("case count must be greater than zero")]
    ZeroCases,
    /// The flag is not one of the recognised boolean spellings.
    #[error("flag `{raw}` is not one of true/false/1/0/yes/no/on/off")]
    MalformedFlag {
        /// Raw value taken from the environment.
        raw: String,
    },
}

/// Case count and fork setting for one property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads overrides from the environment, falling back to the given
    /// defaults. Malformed overrides are reported through a `warn` event and
    /// otherwise ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use plinth_test_support::profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: env_override(PROGTEST_CASES_ENV_KEY, default_cases, parse_cases),
            fork: env_override(PLINTH_PBT_FORK_ENV_KEY, default_fork, parse_flag),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    #[rustfmt::skip]
    pub const fn cases(&self) -> u32 { self.cases }

    /// Whether each case runs in a forked subprocess.
    #[must_use]
    #[rustfmt::skip]
    pub const fn fork(&self) -> bool { self.fork }
}

fn env_override<T>(key: &'static str, default: T, parse: fn(&str) -> Result<T, OverrideError>) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|error| {
        tracing::warn!(env = key, raw = %raw, %error, "ignoring property-test override");
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, OverrideError> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(OverrideError::ZeroCases),
        Ok(cases) => Ok(cases),
        Err(_) => Err(OverrideError::MalformedCases {
            raw: raw.to_owned(),
        }),
    }
}

fn parse_flag(raw: &str) -> Result<bool, OverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::MalformedFlag {
            raw: raw.to_owned(),
        }),
    }
}

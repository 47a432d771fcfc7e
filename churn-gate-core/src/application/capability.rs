// churn-gate-core/src/application/capability.rs
//
// One-time probe for the rich expectation engine. The probe result is a plain
// value handed to `DatasetValidator::new`; nothing reads it back from a global
// during validation.

use std::sync::OnceLock;
use tracing::{info, warn};

use crate::domain::quality::CheckerMode;
use crate::infrastructure::config::CheckerPreference;

/// Set to a truthy value to behave as if the expectation engine were not installed.
pub const ENV_DISABLE_EXPECTATIONS: &str = "CHURN_GATE_DISABLE_EXPECTATIONS";

static PROBE: OnceLock<Capability> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
    rich_available: bool,
}

impl Capability {
    /// Probes once per process; later calls return the first answer.
    pub fn detect() -> Self {
        *PROBE.get_or_init(|| Self::probe(|key| std::env::var(key).ok()))
    }

    pub fn probe<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let compiled = cfg!(feature = "expectations");
        let disabled = lookup(ENV_DISABLE_EXPECTATIONS).is_some_and(|v| is_truthy(&v));

        if compiled && disabled {
            info!("Expectation engine disabled via {}", ENV_DISABLE_EXPECTATIONS);
        }
        Self {
            rich_available: compiled && !disabled,
        }
    }

    pub fn with_rich(rich_available: bool) -> Self {
        Self { rich_available }
    }

    pub fn rich_available(&self) -> bool {
        self.rich_available
    }

    /// Maps a preference to a concrete mode. Asking for the rich engine when it is
    /// missing degrades to the fallback checks with a warning.
    pub fn resolve(&self, preference: CheckerPreference) -> CheckerMode {
        match preference {
            CheckerPreference::Fallback => CheckerMode::Fallback,
            CheckerPreference::Auto | CheckerPreference::Rich if self.rich_available => {
                CheckerMode::Rich
            }
            CheckerPreference::Auto | CheckerPreference::Rich => {
                warn!("⚠️ Expectation engine not available; running simplified fallback checks.");
                CheckerMode::Fallback
            }
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

use std::env;
use std::path::PathBuf;

pub const DEFAULT_CONTRACT: &str = ".crowdfunding";
pub const DEFAULT_LOG_LEVEL: &str = "warn";
pub const DEFAULT_MAX_ARGS: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallConfig {
    /// Contract used when `--contract` is not given.
    pub contract: String,
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Upper bound on positional call arguments.
    pub max_args: usize,
    /// Log file; stderr when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for CallConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl CallConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source. Empty or
    /// unparseable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            contract: non_empty("CONTRACT_CALL_CONTRACT")
                .unwrap_or_else(|| DEFAULT_CONTRACT.to_string()),
            log_level: non_empty("CONTRACT_CALL_LOG_LEVEL")
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            max_args: non_empty("CONTRACT_CALL_MAX_ARGS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_MAX_ARGS),
            log_file: non_empty("CONTRACT_CALL_LOG").map(PathBuf::from),
        }
    }

    pub fn with_contract(mut self, contract: impl Into<String>) -> Self {
        self.contract = contract.into();
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    pub fn with_max_args(mut self, max: usize) -> Self {
        self.max_args = max;
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }
}

use std::path::PathBuf;
use std::time::Duration;

/// Default armor database endpoint listing every armor set.
pub const DEFAULT_ARMOR_SETS_URL: &str = "https://wilds.mhdb.io/ja/armor/sets";

/// Default output document, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "public/dummy/layerSets.json";

/// Number of layer sets generated per run.
pub const DEFAULT_COUNT: usize = 100;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Generator configuration loaded from environment variables.
///
/// With nothing set, a run fetches from the public armor database and
/// writes 100 sets to `public/dummy/layerSets.json`.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Armor set listing endpoint.
    pub armor_sets_url: String,
    /// Where the generated document is written.
    pub output_path: PathBuf,
    /// Number of layer sets to generate.
    pub count: usize,
    /// Upper bound on the catalog request, connect to last byte.
    pub request_timeout: Duration,
}

impl GeneratorConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                          | Default                               |
    /// |----------------------------------|---------------------------------------|
    /// | `LAYERBOOK_ARMOR_SETS_URL`       | `https://wilds.mhdb.io/ja/armor/sets` |
    /// | `LAYERBOOK_OUTPUT_PATH`          | `public/dummy/layerSets.json`         |
    /// | `LAYERBOOK_COUNT`                | `100`                                 |
    /// | `LAYERBOOK_REQUEST_TIMEOUT_SECS` | `30`                                  |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads variables through
    /// `lookup`, so tests don't have to touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let armor_sets_url =
            lookup("LAYERBOOK_ARMOR_SETS_URL").unwrap_or_else(|| DEFAULT_ARMOR_SETS_URL.into());

        let output_path = lookup("LAYERBOOK_OUTPUT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH));

        let count = match lookup("LAYERBOOK_COUNT") {
            Some(value) => match value.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "LAYERBOOK_COUNT",
                        value,
                    })
                }
            },
            None => DEFAULT_COUNT,
        };

        let timeout_secs = match lookup("LAYERBOOK_REQUEST_TIMEOUT_SECS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::Invalid {
                    var: "LAYERBOOK_REQUEST_TIMEOUT_SECS",
                    value,
                })?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Self {
            armor_sets_url,
            output_path,
            count,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            armor_sets_url: DEFAULT_ARMOR_SETS_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            count: DEFAULT_COUNT,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

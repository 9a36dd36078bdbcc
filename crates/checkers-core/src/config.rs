use crate::error::CoreError;
use crate::wait::WaitConfig;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Top-level harness configuration, loadable from a TOML file with every
/// field defaulted so an empty (or absent) file is a valid configuration.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct HarnessConfig {
    #[serde(default)]
    pub global: GlobalConfig,
    #[serde(default)]
    pub wait: WaitSettings,
    #[serde(default)]
    pub browser: BrowserSettings,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct GlobalConfig {
    pub log_level: String,
    /// Where the checkers deployment lives.
    pub base_url: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            base_url: "https://www.gamesforthebrain.com/game/checkers/".to_string(),
        }
    }
}

/// Bounds for the two wait conditions the page object polls on.
#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(default)]
pub struct WaitSettings {
    /// Total budget for the game message to reach an awaiting-input prompt.
    pub ready_timeout_ms: u64,
    /// Total budget for board animation to settle. Covers the computer's
    /// reply animation as well, so it is the longer of the two.
    pub settle_timeout_ms: u64,
    /// Re-check interval shared by both polls.
    pub poll_interval_ms: u64,
}

impl Default for WaitSettings {
    fn default() -> Self {
        Self {
            ready_timeout_ms: 10_000,
            settle_timeout_ms: 15_000,
            poll_interval_ms: 100,
        }
    }
}

impl WaitSettings {
    pub fn ready(&self) -> WaitConfig {
        WaitConfig {
            timeout: Duration::from_millis(self.ready_timeout_ms),
            interval: Duration::from_millis(self.poll_interval_ms),
        }
    }

    pub fn settle(&self) -> WaitConfig {
        WaitConfig {
            timeout: Duration::from_millis(self.settle_timeout_ms),
            interval: Duration::from_millis(self.poll_interval_ms),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct BrowserSettings {
    pub headless: bool,
    pub executable_path: Option<String>,
    pub args: Vec<String>,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            headless: true,
            executable_path: None,
            args: vec![],
        }
    }
}

// --- Loading Logic ---

pub fn load_config(source_path: Option<PathBuf>) -> Result<HarnessConfig, CoreError> {
    let default_config_name = "checkers_e2e"; // Base name for config files

    let mut builder = config::Config::builder()
        .set_default("global.log_level", GlobalConfig::default().log_level)
        .map_err(CoreError::Config)?
        .set_default(
            "wait.poll_interval_ms",
            WaitSettings::default().poll_interval_ms,
        )
        .map_err(CoreError::Config)?;

    // Load from specified file path if provided
    if let Some(path) = source_path {
        if path.exists() {
            log::debug!("Loading configuration from: {:?}", path);
            builder = builder.add_source(config::File::from(path).required(true));
        } else {
            log::warn!("Specified configuration file not found: {:?}", path);
        }
    } else {
        // Load from the default location if no specific path is given
        log::debug!(
            "Attempting to load configuration from default location ({}.toml)",
            default_config_name
        );
        builder =
            builder.add_source(config::File::with_name(default_config_name).required(false));
    }

    let config = builder.build().map_err(CoreError::Config)?;
    config
        .try_deserialize::<HarnessConfig>()
        .map_err(CoreError::Config)
}

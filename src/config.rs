//! Runtime configuration read from environment variables.
//!
//! Every variable is optional; unset variables fall back to the upstream AzurAPI links and a
//! `data` directory relative to the working directory.

use std::path::PathBuf;

use reqwest::Url;

use crate::{error::config::ConfigError, model::dataset::DatasetKind};

/// Data directory used when `SARATOGA_DATA_DIR` is unset.
pub const DEFAULT_DATA_DIR: &str = "data";
/// Upstream version record.
pub const DEFAULT_VERSION_URL: &str =
    "https://raw.githubusercontent.com/AzurAPI/azurapi-js-setup/master/version-info.json";
/// Upstream ship dataset.
pub const DEFAULT_SHIP_DATA_URL: &str =
    "https://raw.githubusercontent.com/AzurAPI/azurapi-js-setup/master/ships.json";
/// Upstream equipment dataset.
pub const DEFAULT_EQUIPMENT_DATA_URL: &str =
    "https://raw.githubusercontent.com/AzurAPI/azurapi-js-setup/master/equipments.json";

/// Remote locations of the version metadata and of each dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteLinks {
    /// Version record link.
    pub version: String,
    /// Ship dataset link.
    pub ships: String,
    /// Equipment dataset link.
    pub equipments: String,
}

impl RemoteLinks {
    /// Link of the dataset for `kind`.
    pub fn data(&self, kind: DatasetKind) -> &str {
        match kind {
            DatasetKind::Ships => &self.ships,
            DatasetKind::Equipments => &self.equipments,
        }
    }
}

impl Default for RemoteLinks {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION_URL.to_string(),
            ships: DEFAULT_SHIP_DATA_URL.to_string(),
            equipments: DEFAULT_EQUIPMENT_DATA_URL.to_string(),
        }
    }
}

/// Settings for a single synchronization run.
pub struct Config {
    /// Directory holding the version record and both dataset files.
    pub data_dir: PathBuf,
    /// Remote locations of the version record and datasets.
    pub links: RemoteLinks,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Config {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` when it is unset
    ///
    /// # Returns
    /// - `Ok(Config)` - Every set variable was valid
    /// - `Err(ConfigError::InvalidEnvValue)` - An empty data directory or a link that is not
    ///   an absolute `http`/`https` URL
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_dir = lookup("SARATOGA_DATA_DIR").unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());
        if data_dir.trim().is_empty() {
            return Err(ConfigError::InvalidEnvValue {
                var: "SARATOGA_DATA_DIR".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        let links = RemoteLinks {
            version: link(&lookup, "SARATOGA_VERSION_URL", DEFAULT_VERSION_URL)?,
            ships: link(&lookup, "SARATOGA_SHIP_DATA_URL", DEFAULT_SHIP_DATA_URL)?,
            equipments: link(
                &lookup,
                "SARATOGA_EQUIPMENT_DATA_URL",
                DEFAULT_EQUIPMENT_DATA_URL,
            )?,
        };

        let user_agent = lookup("SARATOGA_USER_AGENT")
            .unwrap_or_else(|| format!("saratoga/{}", env!("CARGO_PKG_VERSION")));

        Ok(Self {
            data_dir: PathBuf::from(data_dir),
            links,
            user_agent,
        })
    }
}

fn link(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &str,
    default: &str,
) -> Result<String, ConfigError> {
    let Some(value) = lookup(var) else {
        return Ok(default.to_string());
    };

    let invalid = |reason: String| ConfigError::InvalidEnvValue {
        var: var.to_string(),
        reason,
    };

    let url = Url::parse(&value).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }

    Ok(value)
}

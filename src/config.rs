//! Configuration constants and profile loading for modelline
//!
//! Profiles live in an INI file, one section per profile:
//!
//! ```ini
//! [default]
//! endpoint = http://localhost:8000/api/model/process
//! mode = plain-text
//!
//! [staging]
//! endpoint = https://models.staging.example.com/api/model/process
//! mode = byte-array
//! timeout_ms = 30000
//! ```

use crate::interface::codec::TransportMode;
use crate::interface::services::DEFAULT_ENDPOINT;
use anyhow::{anyhow, Context, Result};
use ini::Ini;
use std::path::Path;
use std::time::Duration;

/// Default profile file path for modelline
pub const DEFAULT_PROFILE_PATH: &str = "~/.modelline/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "MODELLINE_PROFILE_PATH";

/// Name of the profile used when none is given
pub const DEFAULT_PROFILE_NAME: &str = "default";

const ENDPOINT_KEY: &str = "endpoint";
const MODE_KEY: &str = "mode";
const TIMEOUT_KEY: &str = "timeout_ms";

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

/// Connection settings for the processing service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelProfile {
    pub endpoint: String,
    pub mode: TransportMode,
    /// Optional; no timeout unless set
    pub timeout: Option<Duration>,
}

impl Default for ModelProfile {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            mode: TransportMode::default(),
            timeout: None,
        }
    }
}

impl ModelProfile {
    /// Apply command-line overrides on top of the profile
    pub fn with_overrides(
        mut self,
        endpoint: Option<&str>,
        mode: Option<TransportMode>,
        timeout_ms: Option<u64>,
    ) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint.to_string();
        }
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(ms) = timeout_ms {
            self.timeout = Some(Duration::from_millis(ms));
        }
        self
    }
}

/// Profile store backed by an INI file
pub struct IniProfileStore {
    path: String,
}

impl IniProfileStore {
    pub fn new<S: Into<String>>(path: S) -> Self {
        Self { path: path.into() }
    }

    /// Look up a profile by name
    ///
    /// A missing file or section is `Ok(None)`; a malformed value is an error.
    pub fn get_profile(&self, name: &str) -> Result<Option<ModelProfile>> {
        let expanded = shellexpand::tilde(&self.path).into_owned();
        if !Path::new(&expanded).exists() {
            tracing::debug!("Profile file '{}' does not exist", expanded);
            return Ok(None);
        }

        let ini = Ini::load_from_file(&expanded)
            .with_context(|| format!("Failed to read profile file '{expanded}'"))?;
        let Some(section) = ini.section(Some(name)) else {
            return Ok(None);
        };

        let mut profile = ModelProfile::default();
        if let Some(endpoint) = section.get(ENDPOINT_KEY) {
            profile.endpoint = endpoint.trim().to_string();
        }
        if let Some(mode) = section.get(MODE_KEY) {
            profile.mode = mode
                .parse()
                .map_err(|e: String| anyhow!("Profile '{name}': {e}"))?;
        }
        if let Some(timeout) = section.get(TIMEOUT_KEY) {
            let ms: u64 = timeout.trim().parse().with_context(|| {
                format!("Profile '{name}': invalid {TIMEOUT_KEY} '{timeout}'")
            })?;
            if ms == 0 {
                return Err(anyhow!("Profile '{name}': {TIMEOUT_KEY} must be positive"));
            }
            profile.timeout = Some(Duration::from_millis(ms));
        }

        Ok(Some(profile))
    }
}

/// Load a profile by name, falling back to the built-in defaults
pub fn load_profile(name: &str, path: &str) -> Result<ModelProfile> {
    tracing::debug!("Loading profile '{}' from '{}'", name, path);

    match IniProfileStore::new(path).get_profile(name)? {
        Some(profile) => {
            tracing::debug!("Profile loaded successfully, endpoint: {}", profile.endpoint);
            Ok(profile)
        }
        None => {
            tracing::debug!("Profile '{}' not found, using defaults", name);
            Ok(ModelProfile::default())
        }
    }
}

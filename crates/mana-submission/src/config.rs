//! Form destination configuration.
//!
//! The destination URL and the four field identifiers are deployment
//! configuration, not protocol: they can be overridden from a TOML file,
//! and default to the production form the bot has always filled.

use std::path::Path;

use mana_core::{ManaError, Result};
use serde::Deserialize;

const DEFAULT_FORM_URL: &str = "https://docs.google.com/forms/d/e/1FAIpQLSeX-er8kGUTT72qEDZjgJX_E6Gmj9qnyVTZ_jQNbgOCdLf91g/formResponse";
const DEFAULT_DEPARTMENT_FIELD: &str = "entry.947326788";
const DEFAULT_EMPLOYEE_FIELD: &str = "entry.2052209930";
const DEFAULT_PROJECT_FIELD: &str = "entry.1743944322";
const DEFAULT_SCORE_FIELD: &str = "entry.44696242";

/// Where submissions go and which form field receives which answer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub url: String,
    pub department_field: String,
    pub employee_field: String,
    pub project_field: String,
    pub score_field: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FORM_URL.to_string(),
            department_field: DEFAULT_DEPARTMENT_FIELD.to_string(),
            employee_field: DEFAULT_EMPLOYEE_FIELD.to_string(),
            project_field: DEFAULT_PROJECT_FIELD.to_string(),
            score_field: DEFAULT_SCORE_FIELD.to_string(),
        }
    }
}

impl FormConfig {
    /// Loads the configuration from a TOML file.
    ///
    /// A missing file is not an error: the built-in defaults apply. A file
    /// that exists but does not parse is a configuration error, because
    /// silently falling back would submit to the wrong destination.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw)
            .map_err(|err| ManaError::config(format!("invalid form config {path:?}: {err}")))
    }
}

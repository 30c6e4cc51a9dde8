use std::path::Path;

use serde::de::Error;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

use super::assets::Asset;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub listing: Listing,
    pub filters: Filters,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Listing {
    pub indent: String,
    pub show_titles: bool,
    pub show_classes: bool,
    pub show_styles: bool,
    pub max_depth: Option<usize>,
    pub lenient: bool,
}

impl Default for Listing {
    fn default() -> Self {
        Listing {
            indent: "  ".to_string(),
            show_titles: true,
            show_classes: true,
            show_styles: false,
            max_depth: None,
            lenient: false,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Filters {
    #[serde(deserialize_with = "to_opt_matcher")]
    pub classname: Option<String>,
    #[serde(deserialize_with = "to_opt_matcher")]
    pub title: Option<String>,
}

/// Rejects `/.../` queries that are not valid regexes.
fn to_opt_matcher<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v: Option<String> = Option::deserialize(deserializer)?;
    if let Some(re) = v.as_deref().and_then(|q| q.strip_prefix('/')).and_then(|q| q.strip_suffix('/')) {
        regex::Regex::new(re).map_err(|e| D::Error::custom(format!("invalid regex '{re}': {e}")))?;
    }
    Ok(v)
}

impl AppConfig {
    /// Reads `path`, writing the embedded default there first if the file does not exist.
    pub fn load(path: &Path) -> Result<AppConfig, String> {
        if let Some(dir) = path.parent().filter(|d| !d.exists()) {
            std::fs::create_dir_all(dir).map_err(|e| e.to_string())?;
        }

        if !path.exists() {
            let default_cfg = Asset::default_config().map_err(|e| e.to_string())?;
            std::fs::write(path, default_cfg).map_err(|e| e.to_string())?;
            log::info!("Default configuration written to {}", path.display());
        }

        let content = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
        AppConfig::parse(&content)
    }

    pub fn parse(content: &str) -> Result<AppConfig, String> {
        toml::from_str::<AppConfig>(content).map_err(|e| e.to_string())
    }
}

use std::io::{Error, ErrorKind};

use rust_embed::Embed;

pub const DEFAULT_CONFIG: &str = "configs/wintree.toml";

#[derive(Embed)]
#[folder = "assets/"]
#[include = "configs/*.toml"]
pub struct Asset;

impl Asset {
    pub fn read_text(path: &str) -> Result<String, Error> {
        let file = Asset::get(path).ok_or_else(|| Error::new(ErrorKind::NotFound, format!("{path} is not embedded")))?;
        String::from_utf8(file.data.into_owned()).map_err(|e| Error::new(ErrorKind::InvalidData, e))
    }

    pub fn default_config() -> Result<String, Error> {
        Asset::read_text(DEFAULT_CONFIG)
    }
}

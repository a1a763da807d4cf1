use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::capture::CaptureOptions;

pub const CONFIG_FILE: &str = "profile-editor.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub avatar: AvatarConfig,
    pub camera: CameraConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarConfig {
    pub width: u32,
    pub height: u32,
    pub cropping: bool,
}

/// External program that takes a photo, `{output}` is replaced
/// by the file to write into. Empty means no camera.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub command: Vec<String>,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        let o = CaptureOptions::default();
        AvatarConfig {
            width: o.width,
            height: o.height,
            cropping: o.cropping,
        }
    }
}

impl AvatarConfig {
    pub fn capture_options(&self) -> CaptureOptions {
        CaptureOptions {
            width: self.width,
            height: self.height,
            cropping: self.cropping,
        }
    }
}

/// Reads configuration from `file` (if it exists) overridden by
/// `PROFILE_EDITOR__*` environment variables.
pub fn load(file: &Path) -> Result<Config, config::ConfigError> {
    load_with(file, environment())
}

/// `PROFILE_EDITOR__AVATAR__WIDTH=256` sets `avatar.width`,
/// `camera.command` is split on spaces.
fn environment() -> config::Environment {
    config::Environment::with_prefix("PROFILE_EDITOR")
        .separator("__")
        .list_separator(" ")
        .with_list_parse_key("camera.command")
        .try_parsing(true)
}

fn load_with(file: &Path, env: config::Environment) -> Result<Config, config::ConfigError> {
    config::Config::builder()
        .add_source(config::File::from(file).required(false))
        .add_source(env)
        .build()?
        .try_deserialize()
}

/// Serializes default configuration, to be written on first run.
pub fn default_toml() -> Result<String, toml::ser::Error> {
    toml::to_string_pretty(&Config::default())
}

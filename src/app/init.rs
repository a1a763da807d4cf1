use directories::ProjectDirs;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::capture::ImageService;
use crate::config::{self, CONFIG_FILE};
use crate::session::Session;
use crate::store::Store;

/// GTK application id, also the D-Bus name.
pub const APP_ID: &str = "io.github.profileeditor.ProfileEditor";

/// `ProjectDirs` qualifier and organization; together with the
/// application name they mirror [`APP_ID`].
const QUALIFIER: &str = "io.github";
const ORGANIZATION: &str = "profileeditor";
const APPLICATION: &str = "ProfileEditor";

#[derive(Debug, Error)]
pub enum InitError {
    #[error("could not determine home directory")]
    NoHome,
    #[error("could not prepare {0}: {1}")]
    Directory(String, std::io::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] ::config::ConfigError),
    #[error("could not write default configuration: {0}")]
    DefaultConfig(#[from] toml::ser::Error),
}

/// Logging, tracing. `RUST_LOG` overrides the default filter.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,relm4=warn"));

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .compact()
        .with_file(true)
        .with_line_number(true)
        .with_ansi(true)
        .with_env_filter(filter)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Logging was already initialized");
    }
}

/// Reads configuration, prepares directories and returns it all
/// inside [`Session`].
pub fn make_session() -> Result<Session, InitError> {
    let dirs = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION).ok_or(InitError::NoHome)?;

    let config_dir = dirs.config_dir();
    std::fs::create_dir_all(config_dir)
        .map_err(|e| InitError::Directory(config_dir.display().to_string(), e))?;

    let config_file = config_dir.join(CONFIG_FILE);
    if !config_file.exists() {
        info!("Writing default configuration to {:?}", config_file);
        std::fs::write(&config_file, config::default_toml()?)
            .map_err(|e| InitError::Directory(config_file.display().to_string(), e))?;
    }

    let config = config::load(&config_file)?;
    info!("Loaded configuration {:?}", config);

    let images = ImageService::new(dirs.cache_dir().join("avatars"), config.camera.command);

    Ok(Session::new(
        Store::default(),
        images,
        config.avatar.capture_options(),
    ))
}

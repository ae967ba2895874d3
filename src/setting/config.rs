use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use crate::{error::Error, result::Result};

pub const CONFIG_FILE: &str = "config.json";

#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, PartialEq)]
pub struct Config {
    pub capture: CaptureConfig,
    pub locking: LockingConfig,
    pub export: ExportConfig,
    pub quit_key: char,
    pub log_level: String,
}

#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, PartialEq)]
pub struct CaptureConfig {
    pub name: String,
    /// Camera index, video file path or stream url.
    pub source: String,
    /// 0 keeps the source's native size.
    pub width: i32,
    pub height: i32,
    pub flip: bool,
    #[serde(default)]
    pub max_frames: Option<usize>,
}

#[derive(serde::Deserialize, serde::Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LockingConfig {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, PartialEq)]
pub struct ExportConfig {
    pub file: PathBuf,
    pub codec: String,
    pub frame_rate: f64,
    pub close_windows: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capture: CaptureConfig {
                name: "Cam_1".into(),
                source: "0".into(),
                width: 0,
                height: 0,
                flip: true,
                max_frames: None,
            },
            locking: LockingConfig {
                x: 150,
                y: 150,
                width: 50,
                height: 50,
            },
            export: ExportConfig {
                file: "video.mp4".into(),
                codec: "mp4v".into(),
                frame_rate: 15.,
                close_windows: true,
            },
            quit_key: 'q',
            log_level: "info".into(),
        }
    }
}

impl Config {
    pub fn get() -> Result<Config> {
        Self::load_from(&Self::get_config_dir()?)
    }

    /// Reads `config_dir` layered over the defaults, so missing keys keep
    /// their default value. The defaults are written there only when the file
    /// does not exist; a file that fails to parse is reported and left alone.
    pub fn load_from(config_dir: &Path) -> Result<Config> {
        let config_str = match fs::read_to_string(config_dir) {
            Ok(config) => config,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Self::upsert_new(config_dir);
            }
            Err(err) => return Err(Error::as_unknown_error(err)),
        };

        let defaults =
            serde_json::to_string(&Self::default()).map_err(Error::as_unknown_error)?;
        config::Config::builder()
            .add_source(config::File::from_str(&defaults, config::FileFormat::Json))
            .add_source(config::File::from_str(
                &config_str,
                config::FileFormat::Json,
            ))
            .build()
            .and_then(|cfg| cfg.try_deserialize::<Config>())
            .map_err(|err| {
                tracing::warn!(path = %config_dir.display(), "Invalid settings file: {}", err);
                Error::ConfigError(err)
            })
    }

    fn get_config_dir() -> Result<PathBuf> {
        Ok(std::env::current_dir()
            .map_err(Error::as_unknown_error)?
            .join(CONFIG_FILE))
    }

    fn upsert_new(config_dir: &Path) -> Result<Config> {
        let config = Self::default();
        Self::upsert_config_file(config_dir, &config)?;
        Ok(config)
    }

    fn upsert_config_file(config_dir: &Path, config: &Config) -> Result<()> {
        fs::File::create(config_dir)
            .map_err(Error::as_unknown_error)?
            .write_all(
                serde_json::to_string_pretty(config)
                    .map_err(Error::as_unknown_error)?
                    .as_bytes(),
            )
            .map_err(Error::as_unknown_error)
    }
}

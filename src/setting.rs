pub use self::config::{CaptureConfig, Config, ExportConfig, LockingConfig};

use crate::{cli::Args, error::Error, result::Result};

pub mod config;

#[derive(Debug, Default)]
pub struct Setting {
    pub config: Config,
}

impl Setting {
    /// Loads the settings file and lets command line flags override it.
    pub fn get(args: &Args) -> Result<Self> {
        let config = match &args.config {
            Some(path) => Config::load_from(path)?,
            None => Config::get()?,
        };
        let setting = Self::with_overrides(config, args);
        setting.validate()?;
        Ok(setting)
    }

    pub fn validate(&self) -> Result<()> {
        if self.config.capture.max_frames == Some(0) {
            return Err(Error::ConfigError(::config::ConfigError::Message(
                "capture.max_frames must be at least 1".into(),
            )));
        }
        Ok(())
    }

    /// Whether the driver may capture another frame after `captured` frames.
    pub fn wants_more_frames(&self, captured: usize) -> bool {
        self.config
            .capture
            .max_frames
            .map_or(true, |max| captured < max)
    }

    pub fn with_overrides(mut config: Config, args: &Args) -> Self {
        if let Some(source) = &args.source {
            config.capture.source = source.clone();
        }
        if let Some(width) = args.width {
            config.capture.width = width;
        }
        if let Some(height) = args.height {
            config.capture.height = height;
        }
        if args.no_flip {
            config.capture.flip = false;
        }
        if args.max_frames.is_some() {
            config.capture.max_frames = args.max_frames;
        }
        if let Some(output) = &args.output {
            config.export.file = output.clone();
        }
        if let Some(codec) = &args.codec {
            config.export.codec = codec.clone();
        }
        if let Some(fps) = args.fps {
            config.export.frame_rate = fps;
        }
        Self { config }
    }

    /// The quit key as compared against a key code masked to its low byte.
    pub fn quit_code(&self) -> i32 {
        self.config.quit_key as i32 & 0xFF
    }
}

#[cfg(test)]
mod test {
    use super::{Config, Setting};
    use crate::{cli::Args, error::Error};

    #[test]
    fn flags_override_file_values() {
        let args = Args {
            source: Some("clip.mp4".into()),
            width: Some(320),
            no_flip: true,
            fps: Some(30.),
            ..Default::default()
        };

        let setting = Setting::with_overrides(Config::default(), &args);

        assert_eq!(setting.config.capture.source, "clip.mp4");
        assert_eq!(setting.config.capture.width, 320);
        assert_eq!(setting.config.capture.height, 0);
        assert!(!setting.config.capture.flip);
        assert_eq!(setting.config.export.frame_rate, 30.);
        assert_eq!(setting.config.export.codec, "mp4v");
    }

    #[test]
    fn loads_explicit_config_path() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("camlock.json");
        let args = Args {
            config: Some(path.clone()),
            ..Default::default()
        };

        let setting = Setting::get(&args).expect("Failed to get setting");

        assert_eq!(setting.config, Config::default());
        assert!(path.exists());
        assert_eq!(setting.quit_code(), i32::from(b'q'));
    }

    #[test]
    fn rejects_zero_frame_limit() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let args = Args {
            config: Some(dir.path().join("camlock.json")),
            max_frames: Some(0),
            ..Default::default()
        };

        assert!(matches!(Setting::get(&args), Err(Error::ConfigError(_))));
    }

    #[test]
    fn frame_limit_stops_before_capturing_past_it() {
        let args = Args {
            max_frames: Some(2),
            ..Default::default()
        };
        let limited = Setting::with_overrides(Config::default(), &args);
        assert!(limited.wants_more_frames(0));
        assert!(limited.wants_more_frames(1));
        assert!(!limited.wants_more_frames(2));

        let unlimited = Setting::with_overrides(Config::default(), &Args::default());
        assert!(unlimited.wants_more_frames(usize::MAX));
    }
}

use std::path::PathBuf;

#[derive(clap::Parser, Debug, Default)]
#[command(version, about = "Capture, annotate and record frames from a camera or video", long_about = None)]
pub struct Args {
    /// Settings file, created with defaults when missing
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Camera index, video file path or stream url
    #[arg(long)]
    pub source: Option<String>,
    #[arg(long)]
    pub width: Option<i32>,
    #[arg(long)]
    pub height: Option<i32>,
    /// Exported video file
    #[arg(long, short)]
    pub output: Option<PathBuf>,
    /// Four character codec tag
    #[arg(long)]
    pub codec: Option<String>,
    #[arg(long)]
    pub fps: Option<f64>,
    #[arg(long)]
    pub no_flip: bool,
    /// Stop after this many frames
    #[arg(long)]
    pub max_frames: Option<usize>,
}

#[cfg(test)]
mod test {
    use clap::Parser;

    use super::Args;

    #[test]
    fn parses_overrides() {
        let args = Args::try_parse_from([
            "camlock",
            "--source",
            "rtsp://10.0.0.4/stream",
            "--width",
            "640",
            "--height",
            "480",
            "-o",
            "out.avi",
            "--codec",
            "MJPG",
            "--fps",
            "24",
            "--no-flip",
            "--max-frames",
            "10",
        ])
        .expect("Failed to parse args");

        assert_eq!(args.source.as_deref(), Some("rtsp://10.0.0.4/stream"));
        assert_eq!((args.width, args.height), (Some(640), Some(480)));
        assert_eq!(args.output, Some("out.avi".into()));
        assert_eq!(args.codec.as_deref(), Some("MJPG"));
        assert_eq!(args.fps, Some(24.));
        assert!(args.no_flip);
        assert_eq!(args.max_frames, Some(10));
    }

    #[test]
    fn defaults_to_no_overrides() {
        let args = Args::try_parse_from(["camlock"]).expect("Failed to parse args");
        assert!(args.config.is_none());
        assert!(args.source.is_none());
        assert!(!args.no_flip);
    }
}

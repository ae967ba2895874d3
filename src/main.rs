use camlock::{
    cli::Args,
    cv::Source,
    result::Result,
    setting::Setting,
    CaptureSession,
};
use clap::Parser;

fn main() -> Result<()> {
    let args = Args::parse();
    // Get Setting
    let setting = Setting::get(&args)?;
    camlock::tracing::init("camlock", &setting.config.log_level)?;

    let config = &setting.config;
    let source = config
        .capture
        .source
        .parse::<Source>()
        .unwrap_or_else(|never| match never {});
    let mut capture = CaptureSession::open(
        &config.capture.name,
        &source,
        config.capture.width,
        config.capture.height,
    )?;

    let quit = setting.quit_code();
    let locking = config.locking;
    while setting.wants_more_frames(capture.len()) {
        capture.parse_next_frame(config.capture.flip)?;
        if let Some(frame) = capture.get_frame_mut(-1) {
            frame.add_locking_rect(locking.x, locking.y, locking.width, locking.height)?;
        }

        // break the loop when the quit key is pressed
        if capture.show_frame(-1)? & 0xFF == quit {
            break;
        }
    }

    capture.export_video(
        &config.export.file,
        &config.export.codec,
        config.export.frame_rate,
        config.export.close_windows,
    )?;
    Ok(())
}

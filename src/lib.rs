pub mod capture;
pub mod cli;
pub mod cv;
pub mod display;
pub mod error;
pub mod export;
pub mod frame;
pub mod result;
pub mod setting;
pub mod tracing;

pub use capture::CaptureSession;
pub use error::Error;
pub use frame::Frame;
pub use result::Result;

//! Native capture device adapters

mod ffmpeg;

pub use ffmpeg::FfmpegCaptureDevice;

//! FFmpeg-based capture device adapter

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::Arc;

use async_trait::async_trait;
#[cfg(unix)]
use nix::sys::signal::{self, Signal};
#[cfg(unix)]
use nix::unistd::Pid;
use tokio::fs;
use tokio::io::AsyncReadExt;
use tokio::process::{Child, ChildStderr, Command};
use tokio::sync::Mutex;

use crate::application::ports::{CaptureDevice, CaptureEvent, CaptureObserver, DeviceError};
use crate::domain::capture::{ArtifactHandle, PropertyBag, RenderContext};
use crate::domain::config::AppConfig;

/// FFmpeg child and the file it writes
struct Running {
    child: Child,
    destination: PathBuf,
}

/// Records camera and microphone into an Ogg (Theora/Vorbis) file by
/// driving an `ffmpeg` child process.
pub struct FfmpegCaptureDevice {
    program: PathBuf,
    video_format: String,
    video_input: String,
    audio_format: String,
    audio_input: String,
    /// Running FFmpeg process
    process: Mutex<Option<Running>>,
}

impl FfmpegCaptureDevice {
    /// Create a device reading the default V4L2 camera and PulseAudio source
    pub fn new() -> Self {
        Self::with_inputs("/dev/video0", "default")
    }

    /// Create with custom video and audio inputs
    pub fn with_inputs(video_input: impl Into<String>, audio_input: impl Into<String>) -> Self {
        Self {
            program: PathBuf::from("ffmpeg"),
            video_format: "v4l2".to_string(),
            video_input: video_input.into(),
            audio_format: "pulse".to_string(),
            audio_input: audio_input.into(),
            process: Mutex::new(None),
        }
    }

    /// Run `program` instead of `ffmpeg` from PATH
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Create from the `[ffmpeg]` section of the config
    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_inputs(config.video_input_or_default(), config.audio_input_or_default())
            .with_program(config.ffmpeg_binary_or_default())
    }

    /// Build FFmpeg args for a capture
    fn build_ffmpeg_args(&self, properties: &PropertyBag, output_path: &Path) -> Vec<String> {
        let video = properties.get_bool("video").unwrap_or(true);
        let audio = properties.get_bool("audio").unwrap_or(true);

        // Keep stderr down to errors so the pipe never fills during long captures
        let mut args: Vec<String> = ["-hide_banner", "-nostats", "-loglevel", "error"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        if video {
            args.extend(["-f".to_string(), self.video_format.clone()]);
            if let (Some(w), Some(h)) = (properties.get_u32("width"), properties.get_u32("height")) {
                args.extend(["-video_size".to_string(), format!("{}x{}", w, h)]);
            }
            args.extend(["-i".to_string(), self.video_input.clone()]);
        }

        if audio {
            args.extend([
                "-f".to_string(),
                self.audio_format.clone(),
                "-i".to_string(),
                self.audio_input.clone(),
            ]);
        }

        if video {
            args.extend(["-c:v".to_string(), "libtheora".to_string()]);
            if let Some(q) = properties.get_f64("quality") {
                args.extend(["-q:v".to_string(), Self::theora_quality(q).to_string()]);
            }
        } else {
            args.push("-vn".to_string());
        }

        if audio {
            args.extend(["-c:a".to_string(), "libvorbis".to_string()]);
            if let Some(channels) = properties.get_u32("channels") {
                args.extend(["-ac".to_string(), channels.to_string()]);
            }
            if let Some(rate) = properties.get_u32("rate") {
                args.extend(["-ar".to_string(), rate.to_string()]);
            }
        } else {
            args.push("-an".to_string());
        }

        args.extend([
            "-y".to_string(), // Overwrite the allocated placeholder
            output_path.to_string_lossy().to_string(),
        ]);

        args
    }

    /// Map a 0.0..=1.0 quality onto Theora's 0..=10 scale
    fn theora_quality(quality: f64) -> u32 {
        (quality.clamp(0.0, 1.0) * 10.0).round() as u32
    }

    /// Spawn FFmpeg process
    fn spawn_ffmpeg(&self, args: &[String]) -> Result<Child, DeviceError> {
        Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    DeviceError::FfmpegNotFound
                } else {
                    DeviceError::StartFailed(e.to_string())
                }
            })
    }

    /// Last non-blank line FFmpeg wrote to stderr
    async fn stderr_tail(stderr: Option<ChildStderr>) -> String {
        let mut buf = Vec::new();
        if let Some(mut stderr) = stderr {
            if let Err(e) = stderr.read_to_end(&mut buf).await {
                tracing::debug!(error = %e, "Could not read ffmpeg stderr");
            }
        }
        String::from_utf8_lossy(&buf)
            .lines()
            .rev()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("unknown error")
            .to_string()
    }

    /// Reject a capture that left nothing in its destination
    async fn ensure_written(destination: &Path, stderr_tail: &str) -> Result<(), DeviceError> {
        let len = fs::metadata(destination)
            .await
            .map_err(|e| {
                DeviceError::StopFailed(format!("{}: {}", destination.display(), e))
            })?
            .len();

        if len == 0 {
            return Err(DeviceError::StopFailed(format!(
                "Capture file is empty: {}",
                stderr_tail
            )));
        }
        Ok(())
    }

    /// Ask FFmpeg to finish writing and exit
    #[cfg(unix)]
    fn interrupt(child: &mut Child) -> Result<(), DeviceError> {
        if let Some(id) = child.id() {
            signal::kill(Pid::from_raw(id as i32), Signal::SIGINT)
                .map_err(|e| DeviceError::StopFailed(format!("Signal failed: {}", e)))?;
        }
        Ok(())
    }

    #[cfg(not(unix))]
    fn interrupt(child: &mut Child) -> Result<(), DeviceError> {
        child
            .start_kill()
            .map_err(|e| DeviceError::StopFailed(e.to_string()))
    }
}

impl Default for FfmpegCaptureDevice {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CaptureDevice for FfmpegCaptureDevice {
    async fn record_to_file(
        &self,
        properties: &PropertyBag,
        context: &RenderContext,
        destination: &Path,
        events: Arc<dyn CaptureObserver>,
    ) -> Result<(), DeviceError> {
        let mut process = self.process.lock().await;
        if process.is_some() {
            return Err(DeviceError::StartFailed(
                "Capture already in progress".to_string(),
            ));
        }

        if properties.get_bool("video") == Some(false) && properties.get_bool("audio") == Some(false) {
            return Err(DeviceError::StartFailed(
                "Neither audio nor video requested".to_string(),
            ));
        }
        if properties.get_bool("source") == Some(true) {
            tracing::debug!(%context, "Element sources unsupported, capturing from devices");
        }

        let args = self.build_ffmpeg_args(properties, destination);
        tracing::debug!(program = %self.program.display(), ?args, "Spawning ffmpeg");
        let mut child = self.spawn_ffmpeg(&args)?;

        // A bad flag can make FFmpeg exit straight away
        if let Ok(Some(status)) = child.try_wait() {
            let tail = Self::stderr_tail(child.stderr.take()).await;
            return Err(DeviceError::StartFailed(format!(
                "FFmpeg exited immediately with {}: {}",
                status, tail
            )));
        }

        *process = Some(Running {
            child,
            destination: destination.to_path_buf(),
        });
        events.on_event(&CaptureEvent::Started(ArtifactHandle::new(destination)));
        Ok(())
    }

    async fn stop(&self) -> Result<(), DeviceError> {
        let mut process = self.process.lock().await;
        let mut running = process.take().ok_or(DeviceError::NotCapturing)?;

        // Died on its own, e.g. the camera vanished; nothing left to finalize
        if let Ok(Some(status)) = running.child.try_wait() {
            let tail = Self::stderr_tail(running.child.stderr.take()).await;
            return Err(DeviceError::StopFailed(format!(
                "FFmpeg exited early with {}: {}",
                status, tail
            )));
        }

        if let Err(e) = Self::interrupt(&mut running.child) {
            *process = Some(running);
            return Err(e);
        }

        // FFmpeg finalizes the container before exiting
        let stderr = running.child.stderr.take();
        let (status, tail) = tokio::join!(running.child.wait(), Self::stderr_tail(stderr));
        let status = match status {
            Ok(status) => status,
            Err(e) => {
                *process = Some(running);
                return Err(DeviceError::StopFailed(e.to_string()));
            }
        };
        tracing::debug!(%status, "ffmpeg exited");

        Self::ensure_written(&running.destination, &tail).await
    }
}

//! Accepted-screen picture
//!
//! Decoded once at startup so animated GIFs can be played frame by frame.
//! Still images become a single frame.

use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use iced::widget::image::Handle;
use image::{AnimationDecoder, ImageFormat};

/// Frames shorter than this are shown for `DEFAULT_FRAME_DELAY` instead
const MIN_FRAME_DELAY: Duration = Duration::from_millis(20);
const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug)]
struct Frame {
    handle: Handle,
    delay: Duration,
}

/// Decoded picture, cheap to clone
#[derive(Debug, Clone)]
pub struct Picture {
    frames: Arc<[Frame]>,
    cycle: Duration,
}

impl Picture {
    /// Read and decode a picture off the UI thread
    pub async fn load(path: PathBuf) -> Result<Picture, String> {
        tokio::task::spawn_blocking(move || {
            let bytes = std::fs::read(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Self::decode(&bytes).with_context(|| format!("Failed to decode {}", path.display()))
        })
        .await
        .map_err(|e| format!("Picture loader stopped: {}", e))?
        .map_err(|e| format!("{:#}", e))
    }

    pub fn decode(bytes: &[u8]) -> anyhow::Result<Picture> {
        let frames: Vec<Frame> = if image::guess_format(bytes)? == ImageFormat::Gif {
            let decoder = image::codecs::gif::GifDecoder::new(Cursor::new(bytes))?;
            decoder
                .into_frames()
                .collect_frames()?
                .into_iter()
                .map(|frame| {
                    let (numer, denom) = frame.delay().numer_denom_ms();
                    let delay = Duration::from_millis(u64::from(numer / denom.max(1)));
                    let buffer = frame.into_buffer();
                    Frame {
                        handle: Handle::from_rgba(buffer.width(), buffer.height(), buffer.into_raw()),
                        delay: if delay < MIN_FRAME_DELAY {
                            DEFAULT_FRAME_DELAY
                        } else {
                            delay
                        },
                    }
                })
                .collect()
        } else {
            let buffer = image::load_from_memory(bytes)?.to_rgba8();
            vec![Frame {
                handle: Handle::from_rgba(buffer.width(), buffer.height(), buffer.into_raw()),
                delay: Duration::ZERO,
            }]
        };

        anyhow::ensure!(!frames.is_empty(), "Picture has no frames");

        let cycle = if frames.len() > 1 {
            frames.iter().map(|f| f.delay).sum()
        } else {
            Duration::ZERO
        };

        Ok(Picture {
            frames: frames.into(),
            cycle,
        })
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn is_animated(&self) -> bool {
        !self.cycle.is_zero()
    }

    /// Frame to show `elapsed` after playback started; loops forever
    pub fn frame_at(&self, elapsed: Duration) -> Option<&Handle> {
        if !self.is_animated() {
            return self.frames.first().map(|f| &f.handle);
        }

        let mut offset = elapsed.as_nanos() % self.cycle.as_nanos();
        for frame in self.frames.iter() {
            let delay = frame.delay.as_nanos();
            if offset < delay {
                return Some(&frame.handle);
            }
            offset -= delay;
        }
        self.frames.last().map(|f| &f.handle)
    }
}

//! rodio output for sound effects
//!
//! The output stream is opened on the first handle creation rather than at
//! startup, so a machine without audio still boots straight to the prompt.

use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};

use super::sfx::{SfxBackend, SfxError, SoundHandle};

/// Default-device rodio backend
#[derive(Default)]
pub struct RodioBackend {
    stream: Option<OutputStream>,
}

impl RodioBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn stream(&mut self) -> Result<&OutputStream, SfxError> {
        if self.stream.is_none() {
            let mut stream = OutputStreamBuilder::open_default_stream()
                .map_err(|e| SfxError::Device(format!("Failed to create audio output: {}", e)))?;
            stream.log_on_drop(false);
            tracing::info!("Opened default audio output");
            self.stream = Some(stream);
        }
        self.stream
            .as_ref()
            .ok_or_else(|| SfxError::Device("Audio output unavailable".to_string()))
    }
}

impl SfxBackend for RodioBackend {
    fn create(&mut self, path: &Path, volume: f32) -> Result<Box<dyn SoundHandle>, SfxError> {
        let bytes: Arc<[u8]> = std::fs::read(path)
            .map_err(|e| SfxError::Io(format!("{}: {}", path.display(), e)))?
            .into();

        // Decode once up front so unsupported formats fail at creation
        Decoder::new(Cursor::new(bytes.clone()))
            .map_err(|e| SfxError::Decode(format!("{}: {}", path.display(), e)))?;

        let stream = self.stream()?;
        let sink = Sink::connect_new(stream.mixer());
        sink.set_volume(volume);
        sink.pause();

        Ok(Box::new(RodioSound { sink, bytes }))
    }
}

/// One effect's sink plus its encoded bytes
struct RodioSound {
    sink: Sink,
    bytes: Arc<[u8]>,
}

impl SoundHandle for RodioSound {
    fn restart(&mut self) -> Result<(), SfxError> {
        // Drop whatever is still playing so rapid triggers restart instead of queueing
        self.sink.clear();
        let source = Decoder::new(Cursor::new(self.bytes.clone()))
            .map_err(|e| SfxError::Playback(e.to_string()))?;
        self.sink.append(source);
        self.sink.play();
        Ok(())
    }
}

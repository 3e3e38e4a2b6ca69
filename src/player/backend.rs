//! The playback seam: a trait over the platform audio primitive and the
//! `rodio` implementation used by the binary.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, StreamError};

/// The platform playback primitive as the controller sees it: a media
/// reference, a volume in `[0.0, 1.0]` and play/pause commands.
///
/// All calls are fire-and-forget. Implementations surface their own
/// failures (or swallow them); the controller never observes them.
pub trait Playback {
    /// Load the media at `audio` as the current source, replacing any
    /// previous one. Loading never starts playback.
    fn load(&mut self, audio: &Path);
    /// Apply `volume` in `[0.0, 1.0]` to the current and future sources.
    fn set_volume(&mut self, volume: f32);
    fn play(&mut self);
    fn pause(&mut self);
}

/// Real playback on the default audio output.
///
/// Keeps at most one `Sink` alive; a failed load simply leaves no sink,
/// which turns the transport controls into no-ops until the next load.
pub struct RodioBackend {
    stream: OutputStream,
    sink: Option<Sink>,
    volume: f32,
}

impl RodioBackend {
    pub fn new() -> Result<Self, StreamError> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        // rodio logs to stderr when the stream is dropped; noisy for a TUI.
        stream.log_on_drop(false);

        Ok(Self {
            stream,
            sink: None,
            volume: 1.0,
        })
    }
}

impl Playback for RodioBackend {
    fn load(&mut self, audio: &Path) {
        if let Some(old) = self.sink.take() {
            old.stop();
        }

        // Best effort: an unopenable or undecodable file leaves no sink.
        let Ok(file) = File::open(audio) else {
            return;
        };
        let Ok(source) = Decoder::new(BufReader::new(file)) else {
            return;
        };

        let sink = Sink::connect_new(self.stream.mixer());
        sink.append(source);
        sink.set_volume(self.volume);
        sink.pause();
        self.sink = Some(sink);
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        if let Some(sink) = self.sink.as_ref() {
            sink.set_volume(volume);
        }
    }

    fn play(&mut self) {
        if let Some(sink) = self.sink.as_ref() {
            sink.play();
        }
    }

    fn pause(&mut self) {
        if let Some(sink) = self.sink.as_ref() {
            sink.pause();
        }
    }
}

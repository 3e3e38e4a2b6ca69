use crate::catalog::{Catalog, Track};

use super::backend::Playback;
use super::types::{Direction, PlayerState};

/// The player controller.
///
/// Owns the catalog, the player state and the playback backend, and is
/// the sole caller of the backend. All mutations happen synchronously
/// inside the operations below; backend calls are fire-and-forget.
pub struct Player<B: Playback> {
    catalog: Catalog,
    state: PlayerState,
    backend: B,
}

fn volume_ratio(level: u8) -> f32 {
    f32::from(level) / 100.0
}

impl<B: Playback> Player<B> {
    /// Create a player over `catalog` with `backend` and an initial
    /// `volume` in `0..=100`.
    ///
    /// Selects track 0, so the player always has a loaded track. Playback
    /// starts paused.
    pub fn new(catalog: Catalog, backend: B, volume: u8) -> Self {
        let mut player = Self {
            catalog,
            state: PlayerState {
                current: 0,
                playing: false,
                volume,
            },
            backend,
        };
        player.select_track(0);
        player
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// The currently loaded track.
    pub fn current_track(&self) -> &Track {
        &self.catalog.tracks()[self.state.current]
    }

    /// Make `index` the current track: load its audio into the backend
    /// and re-apply the current volume.
    ///
    /// `index` must be a valid catalog index; anything else is a caller
    /// contract violation. Deliberately leaves the playing flag alone and
    /// does not resume playback; only `advance` resumes (this asymmetry
    /// matches the observed widget behavior).
    pub fn select_track(&mut self, index: usize) {
        debug_assert!(index < self.catalog.len());

        self.state.current = index;
        let track = &self.catalog.tracks()[index];
        self.backend.load(&track.audio);
        self.backend.set_volume(volume_ratio(self.state.volume));
    }

    /// Pause if playing, start if paused, and flip the flag to match.
    ///
    /// No debounce: invoking twice in quick succession simply issues two
    /// backend calls.
    pub fn toggle_playback(&mut self) {
        if self.state.playing {
            self.backend.pause();
        } else {
            self.backend.play();
        }
        self.state.playing = !self.state.playing;
    }

    /// Move to the neighboring track with wraparound, resuming playback
    /// on the new track when it was active before the switch.
    pub fn advance(&mut self, direction: Direction) {
        let n = self.catalog.len();
        let next = match direction {
            Direction::Next => (self.state.current + 1) % n,
            Direction::Previous => (self.state.current + n - 1) % n,
        };

        self.select_track(next);
        if self.state.playing {
            self.backend.play();
        }
    }

    /// Set the volume level and apply `level / 100` to the backend.
    ///
    /// Levels above 100 are a caller contract violation; the input layer
    /// clamps before calling.
    pub fn set_volume(&mut self, level: u8) {
        self.state.volume = level;
        self.backend.set_volume(volume_ratio(level));
    }
}

//! The display snapshot.
//!
//! All display output is produced from one immutable `ViewState` built
//! here, so tests assert on the snapshot instead of on rendering side
//! effects.

use crate::catalog::Track;

use super::backend::Playback;
use super::controller::Player;

/// Everything the display surface shows, captured at one instant.
pub struct ViewState<'a> {
    /// Catalog entries in playlist order.
    pub entries: &'a [Track],
    /// Index of the loaded track (the one the player bar describes).
    pub current: usize,
    /// Index of the playlist cursor, owned by the input layer.
    pub cursor: usize,
    pub playing: bool,
    /// Transport control label: "Pause" while playing, "Play" otherwise.
    pub transport_label: &'static str,
    /// Volume level in `0..=100`.
    pub volume: u8,
    /// The loaded track, for the player bar.
    pub now_playing: &'a Track,
}

impl<'a> ViewState<'a> {
    /// Capture a snapshot of `player` plus the input layer's `cursor`.
    pub fn capture<B: Playback>(player: &'a Player<B>, cursor: usize) -> Self {
        let state = player.state();
        Self {
            entries: player.catalog().tracks(),
            current: state.current,
            cursor,
            playing: state.playing,
            transport_label: if state.playing { "Pause" } else { "Play" },
            volume: state.volume,
            now_playing: player.current_track(),
        }
    }
}

//! Player controller: current track, play/pause flag, volume and the
//! playback backend behind it.
//!
//! The controller is the only writer of player state. It is constructed
//! from an injected catalog and backend so tests can substitute a
//! recording fake for the real audio output.

mod backend;
mod controller;
mod types;
mod view;

pub use backend::{Playback, RodioBackend};
pub use controller::Player;
pub use types::*;
pub use view::ViewState;

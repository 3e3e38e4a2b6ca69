//! Small player-state types shared by the controller, runtime and UI.

/// Direction for the previous/next transport controls.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// The controller's mutable state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PlayerState {
    /// Index of the current track. Always within the catalog range.
    pub current: usize,
    /// Whether the transport is in the "playing" position.
    pub playing: bool,
    /// Volume level in `0..=100`. Clamped at the input boundary, not here.
    pub volume: u8,
}

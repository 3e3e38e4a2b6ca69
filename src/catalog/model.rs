use std::path::PathBuf;

/// One playable item: metadata plus media and cover references.
#[derive(Debug, Clone)]
pub struct Track {
    /// Stable identifier, unique within a catalog.
    pub id: u32,
    pub title: String,
    pub artist: String,
    /// Image reference for the track art. Rendered as text in the TUI.
    pub cover: String,
    /// Playable media reference.
    pub audio: PathBuf,
}

/// An immutable, non-empty ordered sequence of tracks.
///
/// Fixed at startup: there is no API to add or remove tracks once a
/// `Catalog` exists.
#[derive(Debug, Clone)]
pub struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    /// Validate `tracks` and build a catalog from them.
    ///
    /// Rejects an empty list (the player always has a current track) and
    /// duplicate track ids.
    pub fn new(tracks: Vec<Track>) -> Result<Self, String> {
        if tracks.is_empty() {
            return Err("catalog must contain at least one track".to_string());
        }

        let mut seen: Vec<u32> = Vec::with_capacity(tracks.len());
        for track in &tracks {
            if seen.contains(&track.id) {
                return Err(format!("duplicate track id {} in catalog", track.id));
            }
            seen.push(track.id);
        }

        Ok(Self { tracks })
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    // A catalog is never empty, but clippy expects the pair.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// All tracks in catalog order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}

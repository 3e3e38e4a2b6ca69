//! Catalog file loading.
//!
//! A catalog file is a TOML document of `[[track]]` tables:
//!
//! ```toml
//! [[track]]
//! id = 1
//! title = "Summer Vibes"
//! artist = "Beach Wave"
//! cover = "https://example.com/cover1.jpg"
//! audio = "music/song1.mp3"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::model::{Catalog, Track};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(rename = "track", default)]
    tracks: Vec<TrackEntry>,
}

#[derive(Debug, Deserialize)]
struct TrackEntry {
    id: u32,
    title: String,
    artist: String,
    #[serde(default)]
    cover: String,
    audio: PathBuf,
}

impl From<TrackEntry> for Track {
    fn from(entry: TrackEntry) -> Self {
        Self {
            id: entry.id,
            title: entry.title,
            artist: entry.artist,
            cover: entry.cover,
            audio: entry.audio,
        }
    }
}

/// Read and validate a catalog from the TOML file at `path`.
pub fn from_path(path: &Path) -> Result<Catalog, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)?;
    let file: CatalogFile = toml::from_str(&raw)?;

    let tracks: Vec<Track> = file.tracks.into_iter().map(Track::from).collect();
    Catalog::new(tracks).map_err(Into::into)
}

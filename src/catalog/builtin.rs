use std::path::PathBuf;

use super::model::{Catalog, Track};

/// The built-in five-track playlist used when no catalog file is
/// configured.
pub fn builtin() -> Catalog {
    let tracks = vec![
        Track {
            id: 1,
            title: "Summer Vibes".to_string(),
            artist: "Beach Wave".to_string(),
            cover: "https://images.unsplash.com/photo-1459749411175-04bf5292ceea?w=500&h=500&fit=crop"
                .to_string(),
            audio: PathBuf::from("music/song1.mp3"),
        },
        Track {
            id: 2,
            title: "Mountain Echo".to_string(),
            artist: "Nature Sound".to_string(),
            cover: "https://images.unsplash.com/photo-1519681393784-d120267933ba?w=500&h=500&fit=crop"
                .to_string(),
            audio: PathBuf::from("music/song2.mp3"),
        },
        Track {
            id: 3,
            title: "Urban Night".to_string(),
            artist: "City Lights".to_string(),
            cover: "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=500&h=500&fit=crop"
                .to_string(),
            audio: PathBuf::from("music/song3.mp3"),
        },
        Track {
            id: 4,
            title: "Sunset Dreams".to_string(),
            artist: "Ocean Waves".to_string(),
            cover: "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?w=500&h=500&fit=crop"
                .to_string(),
            audio: PathBuf::from("music/song4.mp3"),
        },
        Track {
            id: 5,
            title: "Forest Rain".to_string(),
            artist: "Green Nature".to_string(),
            cover: "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=500&h=500&fit=crop"
                .to_string(),
            audio: PathBuf::from("music/song5.mp3"),
        },
    ];

    Catalog::new(tracks).expect("built-in catalog is valid")
}

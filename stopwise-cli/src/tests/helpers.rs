//! Test helpers for writing place fixtures to temporary directories.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Navy Yard places as a provider might return them. The second record uses
/// the provider's `type_of_activity` key and the fourth has no name.
pub(super) const NAVY_YARD_PLACES: &str = r#"[
  { "name": "Bluejacket", "activity_type": "brewery", "walking_distance": 0.3, "rating": 4.1 },
  { "name": "Diamond Teague Park", "type_of_activity": "park", "walking_distance": 0.4, "rating": 4.6 },
  { "name": "Nationals Park", "activity_type": "sports", "walking_distance": 0.1, "rating": 4.7 },
  { "activity_type": "park", "walking_distance": 0.2 },
  { "name": "Anacostia Park", "activity_type": "park", "walking_distance": 2.4, "rating": 4.5 }
]"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture file");
}

/// Temporary workspace holding a `places.json` file.
pub(super) struct PlacesFixture {
    _dir: TempDir,
    root: Utf8PathBuf,
    places: Utf8PathBuf,
}

impl PlacesFixture {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let places = root.join("places.json");
        Self {
            _dir: dir,
            root,
            places,
        }
    }

    pub(super) fn with_navy_yard() -> Self {
        let fixture = Self::new();
        fixture.write(NAVY_YARD_PLACES.as_bytes());
        fixture
    }

    pub(super) fn write(&self, contents: &[u8]) {
        write_utf8(&self.places, contents);
    }

    pub(super) fn places(&self) -> &Utf8Path {
        &self.places
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }
}

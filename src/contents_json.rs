//! Contents.json for the app icon set.
//!
//! Mirrors the subset of Apple's asset catalog schema an `AppIcon.appiconset`
//! needs: one entry per icon file plus the catalog `info` block.

use crate::icon_set::IconSpec;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

pub const CONTENTS_FILENAME: &str = "Contents.json";
const AUTHOR: &str = "trophy-icon-gen";

/// Root structure of a Contents.json file
#[derive(Serialize, Debug, Clone)]
pub struct ContentsFile {
    pub images: Vec<ImageEntry>,
    pub info: Info,
}

/// Individual icon file within the icon set
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    /// The image filename, relative to the icon set directory
    pub filename: String,

    /// The device type (e.g., "iphone", "ipad", "ios-marketing")
    pub idiom: String,

    /// The scale factor (e.g., "1x", "2x", "3x")
    pub scale: String,

    /// The size in points (e.g., "29x29", "83.5x83.5")
    pub size: String,
}

/// Versioning and authorship information for the asset catalog
#[derive(Serialize, Debug, Clone)]
pub struct Info {
    /// The format version of the asset catalog (always 1)
    pub version: u8,

    /// The tool that authored the catalog
    pub author: String,
}

impl Default for Info {
    fn default() -> Self {
        Self {
            version: 1,
            author: AUTHOR.to_string(),
        }
    }
}

impl ContentsFile {
    fn new() -> Self {
        Self {
            images: Vec::new(),
            info: Info::default(),
        }
    }

    /// Build the catalog listing every icon in `specs`, in order.
    pub fn for_icons(specs: &[IconSpec]) -> Self {
        let mut contents = Self::new();
        for spec in specs {
            contents.add_image(ImageEntry::from(spec));
        }
        contents
    }

    pub fn add_image(&mut self, image: ImageEntry) {
        self.images.push(image);
    }
}

impl From<&IconSpec> for ImageEntry {
    fn from(spec: &IconSpec) -> Self {
        let points = spec.point_size();
        Self {
            filename: spec.filename.to_string(),
            idiom: spec.idiom().to_string(),
            scale: spec.scale().to_string(),
            size: format!("{points}x{points}"),
        }
    }
}

/// Writes `Contents.json` into `dir`, overwriting any existing file.
pub fn write_contents_json(dir: &Path, contents: &ContentsFile) -> Result<()> {
    let json =
        serde_json::to_string_pretty(contents).context("Failed to serialize Contents.json")?;
    let path = dir.join(CONTENTS_FILENAME);
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon_set::ICON_SPECS;

    #[test]
    fn test_entry_from_icon_spec() {
        let entry = ImageEntry::from(&ICON_SPECS[13]);
        assert_eq!(entry.filename, "icon-83.5@2x.png");
        assert_eq!(entry.idiom, "ipad");
        assert_eq!(entry.size, "83.5x83.5");
        assert_eq!(entry.scale, "2x");
    }

    #[test]
    fn test_catalog_covers_every_icon() {
        let contents = ContentsFile::for_icons(&ICON_SPECS);
        assert_eq!(contents.images.len(), 15);
        assert_eq!(contents.info.version, 1);
        assert_eq!(contents.info.author, "trophy-icon-gen");
    }

    #[test]
    fn test_serialization() {
        let contents = ContentsFile::for_icons(&ICON_SPECS[..2]);
        let json = serde_json::to_string_pretty(&contents).unwrap();

        let expected_fields = [
            "\"images\":",
            "\"filename\": \"icon-20@2x.png\"",
            "\"idiom\": \"iphone\"",
            "\"size\": \"20x20\"",
            "\"scale\": \"2x\"",
            "\"version\": 1",
            "\"author\": \"trophy-icon-gen\"",
        ];
        for field in expected_fields {
            assert!(
                json.contains(field),
                "JSON missing expected field: {}\nActual JSON:\n{}",
                field,
                json
            );
        }
    }

    #[test]
    fn test_write_contents_json() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let contents = ContentsFile::for_icons(&ICON_SPECS);

        write_contents_json(temp_dir.path(), &contents).unwrap();

        let written = std::fs::read_to_string(temp_dir.path().join(CONTENTS_FILENAME)).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed["images"].as_array().unwrap().len(), 15);
        assert_eq!(parsed["images"][14]["idiom"], "ios-marketing");
        assert_eq!(parsed["images"][14]["size"], "1024x1024");
        assert_eq!(parsed["info"]["version"], 1);
    }
}

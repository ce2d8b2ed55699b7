//! The fixed set of icons that make up the app icon catalog.

/// A single icon to generate: its pixel dimension and destination filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub size: u32,
    pub filename: &'static str,
}

/// Every icon written by a generator run, in generation order.
pub const ICON_SPECS: [IconSpec; 15] = [
    IconSpec { size: 20, filename: "icon-20@1x.png" },
    IconSpec { size: 40, filename: "icon-20@2x.png" },
    IconSpec { size: 60, filename: "icon-20@3x.png" },
    IconSpec { size: 29, filename: "icon-29@1x.png" },
    IconSpec { size: 58, filename: "icon-29@2x.png" },
    IconSpec { size: 87, filename: "icon-29@3x.png" },
    IconSpec { size: 40, filename: "icon-40@1x.png" },
    IconSpec { size: 80, filename: "icon-40@2x.png" },
    IconSpec { size: 120, filename: "icon-40@3x.png" },
    IconSpec { size: 120, filename: "icon-60@2x.png" },
    IconSpec { size: 180, filename: "icon-60@3x.png" },
    IconSpec { size: 76, filename: "icon-76@1x.png" },
    IconSpec { size: 152, filename: "icon-76@2x.png" },
    IconSpec { size: 167, filename: "icon-83.5@2x.png" },
    IconSpec { size: 1024, filename: "icon-1024@1x.png" },
];

impl IconSpec {
    /// Point size encoded in the filename, e.g. "83.5" for `icon-83.5@2x.png`.
    pub fn point_size(&self) -> &'static str {
        let stem = self.filename.trim_start_matches("icon-");
        stem.split('@').next().unwrap_or(stem)
    }

    /// Scale factor encoded in the filename, e.g. "2x".
    pub fn scale(&self) -> &'static str {
        self.filename
            .split('@')
            .nth(1)
            .and_then(|rest| rest.strip_suffix(".png"))
            .unwrap_or("1x")
    }

    /// Asset catalog idiom for this entry.
    pub fn idiom(&self) -> &'static str {
        match self.point_size() {
            "1024" => "ios-marketing",
            "76" | "83.5" => "ipad",
            _ => "iphone",
        }
    }
}

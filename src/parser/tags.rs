//! Release-tag vocabulary stripped from episode titles.

/// A named group of junk tokens removed from the text after the episode marker.
#[derive(Debug, Clone, Copy)]
pub struct JunkTag {
    pub name: &'static str,
    pub regex: &'static str,
}

/// Removal order matters: the trailing group pattern runs last so that
/// hyphenated tags like WEB-DL are gone before it looks for "-GROUP".
pub const JUNK_TAGS: &[JunkTag] = &[
    JunkTag {
        name: "resolution",
        regex: r"(?i)\b(?:720p|1080p|2160p|4K)\b",
    },
    JunkTag {
        name: "source",
        regex: r"(?i)\b(?:BluRay|WEB-DL|HDRip|BRRip|WEBRip|HDTV)\b",
    },
    JunkTag {
        name: "codec",
        regex: r"(?i)\b(?:x264|x265|HEVC|H264|H265|AVC)\b",
    },
    JunkTag {
        name: "bracketed group",
        regex: r"\[[^\]]*\]",
    },
    JunkTag {
        name: "trailing group",
        regex: r"-[A-Za-z][A-Za-z0-9]*$",
    },
];

/// Container extensions the TV parser strips before matching.
pub const MEDIA_EXTENSIONS: &[&str] = &[
    "mkv", "mp4", "avi", "mov", "wmv", "m4v", "flv", "webm", "ts", "mpg", "mpeg",
];

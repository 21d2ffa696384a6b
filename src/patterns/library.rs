/// A named regex in the detection library.
#[derive(Debug, Clone, Copy)]
pub struct PatternDef {
    pub name: &'static str,
    pub regex: &'static str,
}

/// Patterns searched for by `detect_patterns`, reported in this order.
pub const PATTERN_LIBRARY: &[PatternDef] = &[
    PatternDef {
        name: "ISO date (YYYY-MM-DD)",
        regex: r"\d{4}-\d{2}-\d{2}",
    },
    PatternDef {
        name: "US date (MM-DD-YYYY)",
        regex: r"\d{2}-\d{2}-\d{4}",
    },
    PatternDef {
        name: "Compact date (YYYYMMDD)",
        regex: r"\d{8}",
    },
    PatternDef {
        name: "Sequence code (IMG_001, DSC00234)",
        regex: r"[A-Z]{2,5}[_-]?\d{3,6}",
    },
    PatternDef {
        name: "Parenthetical (copy), (1)",
        regex: r"\([^)]+\)",
    },
    PatternDef {
        name: "Bracketed [draft], [v2]",
        regex: r"\[[^\]]+\]",
    },
    PatternDef {
        name: "Trailing numbers (_01, -3)",
        regex: r"[-_ ]\d{1,4}$",
    },
    PatternDef {
        name: "Resolution (720p, 1080p, 4K)",
        regex: r"(?i)\b(?:480p|576p|720p|1080p|2160p|4K)\b",
    },
    PatternDef {
        name: "Source (BluRay, WEB-DL, HDTV)",
        regex: r"(?i)\b(?:BluRay|WEB-DL|WEBRip|HDRip|BRRip|HDTV)\b",
    },
    PatternDef {
        name: "Codec (x264, x265, HEVC)",
        regex: r"(?i)\b(?:x264|x265|HEVC|H\.?264|H\.?265|AVC)\b",
    },
    PatternDef {
        name: "Release group (-GROUP)",
        regex: r"-[A-Za-z][A-Za-z0-9]+$",
    },
];

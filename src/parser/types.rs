use serde::{Deserialize, Serialize};

/// Fields extracted from a TV episode filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TvInfo {
    pub show: String,
    pub season: u32,
    pub episode: u32,
    /// Episode title, empty when the filename carries none
    #[serde(default)]
    pub title: String,
}

/// Fields extracted from a movie filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieInfo {
    pub title: String,
    pub year: u16,
}

/// Result of trying both media parsers on one filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaInfo {
    Tv(TvInfo),
    Movie(MovieInfo),
}

impl MediaInfo {
    pub fn kind(&self) -> &'static str {
        match self {
            MediaInfo::Tv(_) => "TV",
            MediaInfo::Movie(_) => "Movie",
        }
    }
}

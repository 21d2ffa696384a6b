mod tags;
mod types;

pub use tags::{JunkTag, JUNK_TAGS, MEDIA_EXTENSIONS};
pub use types::*;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use crate::naming::{normalize_title, split_extension};

// Only known containers are stripped: show names are full of dots, so a
// generic last-dot split would eat "S01E01" out of "Show.S01E01".
static MEDIA_EXTENSION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\.(?:{})$", MEDIA_EXTENSIONS.join("|"))).unwrap()
});

// <show><sep>S<season>E<episode>[<sep><rest>]
static TV_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(.+?)[.\s_-]+S(\d{1,2})E(\d{1,2})([.\s_-].*)?").unwrap()
});

// <title><sep>[(]<19xx|20xx>
static MOVIE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)[.\s_-]+\(?((?:19|20)\d{2})\b").unwrap());

static JUNK_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| {
    JUNK_TAGS
        .iter()
        .map(|tag| Regex::new(tag.regex).unwrap())
        .collect()
});

const TITLE_TRIM_CHARS: &[char] = &['.', ' ', '_', '-'];

/// Parse a release-style TV episode filename.
///
/// Returns `None` when no `<show> SxxEyy` structure is found.
pub fn parse_tv_filename(filename: &str) -> Option<TvInfo> {
    let name = MEDIA_EXTENSION_REGEX.replace(filename, "");
    let captures = TV_REGEX.captures(&name)?;

    let show = normalize_title(captures.get(1)?.as_str());
    let season: u32 = captures.get(2)?.as_str().parse().ok()?;
    let episode: u32 = captures.get(3)?.as_str().parse().ok()?;
    let title = captures
        .get(4)
        .map(|m| episode_title(m.as_str()))
        .unwrap_or_default();

    debug!(filename, show = %show, season, episode, title = %title, "Parsed TV filename");

    Some(TvInfo {
        show,
        season,
        episode,
        title,
    })
}

/// Parse a movie filename carrying a release year.
///
/// Returns `None` when no 19xx/20xx year follows the title.
pub fn parse_movie_filename(filename: &str) -> Option<MovieInfo> {
    let (stem, _) = split_extension(filename);
    let captures = MOVIE_REGEX.captures(stem)?;

    let title = normalize_title(captures.get(1)?.as_str());
    let year: u16 = captures.get(2)?.as_str().parse().ok()?;

    if title.is_empty() {
        return None;
    }

    debug!(filename, title = %title, year, "Parsed movie filename");

    Some(MovieInfo { title, year })
}

/// Try the TV parser first, then the movie parser.
pub fn parse_media_filename(filename: &str) -> Option<MediaInfo> {
    parse_tv_filename(filename)
        .map(MediaInfo::Tv)
        .or_else(|| parse_movie_filename(filename).map(MediaInfo::Movie))
}

fn episode_title(rest: &str) -> String {
    let mut cleaned = rest.to_string();
    for (tag, regex) in JUNK_TAGS.iter().zip(JUNK_REGEXES.iter()) {
        let stripped = regex.replace_all(&cleaned, "");
        if stripped != cleaned {
            trace!(tag = tag.name, before = %cleaned, after = %stripped, "Stripped release tag");
            cleaned = stripped.into_owned();
        }
    }

    normalize_title(cleaned.trim_matches(TITLE_TRIM_CHARS))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tv(show: &str, season: u32, episode: u32, title: &str) -> TvInfo {
        TvInfo {
            show: show.to_string(),
            season,
            episode,
            title: title.to_string(),
        }
    }

    // ============ TV Parser Tests ============

    #[test]
    fn test_tv_standard_format() {
        assert_eq!(
            parse_tv_filename("Breaking.Bad.S01E01.720p.BluRay.mkv"),
            Some(tv("Breaking Bad", 1, 1, ""))
        );
    }

    #[test]
    fn test_tv_with_episode_title() {
        assert_eq!(
            parse_tv_filename("Breaking.Bad.S01E01.Pilot.720p.BluRay.mkv"),
            Some(tv("Breaking Bad", 1, 1, "Pilot"))
        );
    }

    #[test]
    fn test_tv_separator_styles() {
        let underscores = parse_tv_filename("the_office_s02e03.mp4").unwrap();
        assert_eq!(underscores.show, "The Office");
        assert_eq!((underscores.season, underscores.episode), (2, 3));

        let hyphens = parse_tv_filename("Game-of-Thrones-S03E09.mkv").unwrap();
        assert_eq!(hyphens.show, "Game Of Thrones");
        assert_eq!((hyphens.season, hyphens.episode), (3, 9));

        let spaces = parse_tv_filename("Breaking Bad S01E01.mkv").unwrap();
        assert_eq!(spaces.show, "Breaking Bad");
    }

    #[test]
    fn test_tv_marker_case_insensitive() {
        let lower = parse_tv_filename("show.s01e01.mkv").unwrap();
        let upper = parse_tv_filename("show.S01E01.mkv").unwrap();
        assert_eq!(lower, upper);
        assert_eq!((lower.season, lower.episode), (1, 1));
    }

    #[test]
    fn test_tv_double_digit_numbers() {
        let info = parse_tv_filename("Show.S12E24.mkv").unwrap();
        assert_eq!((info.season, info.episode), (12, 24));
    }

    #[test]
    fn test_tv_strips_source_and_codec() {
        assert_eq!(
            parse_tv_filename("Show.S01E01.WEB-DL.x265.mkv"),
            Some(tv("Show", 1, 1, ""))
        );
        assert_eq!(
            parse_tv_filename("Show.S01E01.1080p.HEVC.mkv"),
            Some(tv("Show", 1, 1, ""))
        );
    }

    #[test]
    fn test_tv_strips_release_groups() {
        assert_eq!(
            parse_tv_filename("The.Wire.S02E05.Undertow.720p.HDTV.x264-GRP.mkv"),
            Some(tv("The Wire", 2, 5, "Undertow"))
        );
        assert_eq!(
            parse_tv_filename("Show.S01E02.[rartv].mkv"),
            Some(tv("Show", 1, 2, ""))
        );
    }

    #[test]
    fn test_tv_numeric_suffix_stays_in_title() {
        assert_eq!(
            parse_tv_filename("Show.S01E01.Part-2.mkv"),
            Some(tv("Show", 1, 1, "Part 2"))
        );
    }

    #[test]
    fn test_tv_multi_word_title() {
        let info = parse_tv_filename("Lost.S03E22.through_the-looking.glass.mkv").unwrap();
        assert_eq!(info.title, "Through The Looking Glass");
    }

    #[test]
    fn test_tv_without_extension() {
        assert_eq!(parse_tv_filename("Show.S01E01"), Some(tv("Show", 1, 1, "")));
    }

    #[test]
    fn test_tv_unknown_extension_is_kept() {
        // Outside the container allow-list the extension stays in the remainder
        let info = parse_tv_filename("Show.S01E01.txt").unwrap();
        assert_eq!(info.title, "Txt");
    }

    #[test]
    fn test_tv_rejects_non_tv() {
        assert!(parse_tv_filename("random_file.txt").is_none());
        assert!(parse_tv_filename("The.Matrix.1999.1080p.mkv").is_none());
    }

    // ============ Movie Parser Tests ============

    #[test]
    fn test_movie_standard_format() {
        assert_eq!(
            parse_movie_filename("The.Matrix.1999.1080p.mkv"),
            Some(MovieInfo {
                title: "The Matrix".to_string(),
                year: 1999
            })
        );
    }

    #[test]
    fn test_movie_parenthesized_year() {
        let info = parse_movie_filename("Inception (2010).mp4").unwrap();
        assert_eq!(info.title, "Inception");
        assert_eq!(info.year, 2010);
    }

    #[test]
    fn test_movie_separator_styles() {
        let underscores = parse_movie_filename("The_Dark_Knight_2008.mkv").unwrap();
        assert_eq!(underscores.title, "The Dark Knight");
        assert_eq!(underscores.year, 2008);

        let hyphens = parse_movie_filename("Blade-Runner-2049.mkv").unwrap();
        assert_eq!(hyphens.title, "Blade Runner");
        assert_eq!(hyphens.year, 2049);
    }

    #[test]
    fn test_movie_with_quality_tags() {
        let info = parse_movie_filename("Interstellar.2014.2160p.BluRay.x265.mkv").unwrap();
        assert_eq!(info.title, "Interstellar");
        assert_eq!(info.year, 2014);
    }

    #[test]
    fn test_movie_year_ranges() {
        assert_eq!(parse_movie_filename("Casablanca.1942.mkv").unwrap().year, 1942);
        assert_eq!(parse_movie_filename("Avatar.2009.mkv").unwrap().year, 2009);
        assert!(parse_movie_filename("Metropolis.1827.mkv").is_none());
    }

    #[test]
    fn test_movie_title_starting_with_number() {
        let info = parse_movie_filename("2001.A.Space.Odyssey.1968.mkv").unwrap();
        assert_eq!(info.title, "2001 A Space Odyssey");
        assert_eq!(info.year, 1968);
    }

    #[test]
    fn test_movie_rejects_plain_names() {
        assert!(parse_movie_filename("random_file.txt").is_none());
        assert!(parse_movie_filename("mydocument.pdf").is_none());
    }

    // ============ Combined ============

    #[test]
    fn test_parse_media_prefers_tv() {
        let info = parse_media_filename("Show.2019.S01E01.mkv").unwrap();
        assert_eq!(info.kind(), "TV");

        let info = parse_media_filename("Avatar.2009.mkv").unwrap();
        assert_eq!(info.kind(), "Movie");

        assert!(parse_media_filename("notes.txt").is_none());
    }
}

mod types;

pub use types::*;

use crate::sanitize::sanitize_title;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

/// A flag check: when `pattern` matches the raw file name, `apply` runs
struct FlagRule {
    pattern: Regex,
    apply: fn(&mut MediaFile),
}

impl FlagRule {
    fn new(pattern: &str, apply: fn(&mut MediaFile)) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            apply,
        }
    }
}

// Applied in order. Later quality rules overwrite earlier ones, so a name
// carrying both "2160p" and "720p" ends up as 720p.
static FLAG_RULES: Lazy<Vec<FlagRule>> = Lazy::new(|| {
    vec![
        FlagRule::new(r"(?i)multi", |f| f.multi = true),
        FlagRule::new(r"VO", |f| {
            if !f.multi {
                f.vo = true;
            }
        }),
        FlagRule::new(r"(?i)2160p|4k", |f| f.quality = Some(Quality::Uhd2160)),
        FlagRule::new(r"(?i)1080p", |f| f.quality = Some(Quality::FullHd1080)),
        FlagRule::new(r"(?i)720p", |f| f.quality = Some(Quality::Hd720)),
        FlagRule::new(r"(?i)dts", |f| f.dts = true),
        FlagRule::new(r"(?i)bluray", |f| f.bluray_edition = true),
        FlagRule::new(r"(?i)atmos", |f| f.atmos = true),
        FlagRule::new(r"(?i)10bit", |f| f.hdr = true),
        FlagRule::new(r"(?i)x265", |f| f.h265 = true),
    ]
});

// Title followed by a parenthesized year: "Some Movie (1999)"
static PAREN_YEAR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*?\(([0-9]{4})\))").unwrap());

// Title followed by a bare year token: "Some Movie 1999 ..."
static BARE_YEAR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.*? )([0-9]{4}) ").unwrap());

// Release noise; each one cuts the title at its first occurrence
static TRAILING_MARKERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r" \([0-9]*\).*",
        r"(?i)2160p.*",
        r"(?i)1080p.*",
        r"(?i)720p.*",
        r"(?i) multi .*",
        r"(?i)bluray.*",
        r"(?i)x264.*",
        r"(?i)x265.*",
        r"(?i)hevc.*",
        r"(?i)ac3.*",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Parse a media file name into its title guess and release flags.
///
/// Never fails: a name that matches nothing yields its cleaned stem as the
/// title and no flags.
pub fn parse_file_name(filename: &str) -> MediaFile {
    let mut file = MediaFile::new(filename);

    for rule in FLAG_RULES.iter() {
        if rule.pattern.is_match(filename) {
            (rule.apply)(&mut file);
        }
    }

    let stem = filename.strip_suffix(MEDIA_EXTENSION).unwrap_or(filename);
    let cleaned = normalize_separators(stem);

    let (title, year) = split_title_year(&cleaned);
    file.year = year;

    let title = strip_trailing_markers(title);
    file.name = sanitize_title(&title);

    debug!(
        original = %file.original,
        name = %file.name,
        year = ?file.year,
        quality = ?file.quality,
        "Parsed file name"
    );

    file
}

fn normalize_separators(stem: &str) -> String {
    stem.chars()
        .filter(|c| *c != '[' && *c != ']')
        .map(|c| if c == '.' || c == '_' { ' ' } else { c })
        .collect()
}

fn split_title_year(name: &str) -> (String, Option<String>) {
    if let Some(captures) = PAREN_YEAR_REGEX.captures(name) {
        trace!(name, "Matched parenthesized year");
        return (captures[1].to_string(), Some(captures[2].to_string()));
    }

    if let Some(captures) = BARE_YEAR_REGEX.captures(name) {
        trace!(name, "Matched bare year");
        return (captures[1].to_string(), Some(captures[2].to_string()));
    }

    (name.to_string(), None)
}

fn strip_trailing_markers(title: String) -> String {
    TRAILING_MARKERS
        .iter()
        .fold(title, |name, marker| marker.replace(&name, "").into_owned())
}

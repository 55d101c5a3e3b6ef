use std::fmt;

/// Extension of the files handled by the tool (case-sensitive)
pub const MEDIA_EXTENSION: &str = ".mkv";

/// Video resolution tier, ordered from lowest to highest fidelity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Quality {
    Hd720,
    FullHd1080,
    Uhd2160,
}

impl Quality {
    /// Vertical resolution in pixels
    pub fn height(&self) -> u16 {
        match self {
            Quality::Hd720 => 720,
            Quality::FullHd1080 => 1080,
            Quality::Uhd2160 => 2160,
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}p", self.height())
    }
}

/// Everything inferred about one media file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaFile {
    /// Source file name, never modified
    pub original: String,
    /// Title guess used as the search query
    pub name: String,
    pub year: Option<String>,
    pub multi: bool,
    /// Original-language audio, only considered when `multi` is false
    pub vo: bool,
    pub dts: bool,
    pub atmos: bool,
    pub bluray_edition: bool,
    pub hdr: bool,
    pub h265: bool,
    pub quality: Option<Quality>,
    /// Sanitized search candidates in source order
    pub results: Vec<String>,
    /// Final file name, `None` means the file is left alone
    pub chosen_name: Option<String>,
}

impl MediaFile {
    pub fn new(original: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            ..Default::default()
        }
    }
}

use core::fmt;

/// Formats involved in a conversion.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Format {
    Mp3,
    Ogg,
}

impl Format {
    /// The format files are converted from.
    pub(crate) const SOURCE: Format = Format::Ogg;
    /// The format files are converted to.
    pub(crate) const TARGET: Format = Format::Mp3;

    /// The ffmpeg encoder used to produce the target format.
    pub(crate) const TARGET_CODEC: &'static str = "libmp3lame";
    /// Bitrate of the target format in kbps.
    pub(crate) const TARGET_BITRATE: u32 = 192;

    pub(crate) fn ext(&self) -> &'static str {
        match self {
            Format::Mp3 => "mp3",
            Format::Ogg => "ogg",
        }
    }

    /// Test if the given extension belongs to this format.
    ///
    /// Matching is case sensitive.
    pub(crate) fn matches_ext(&self, ext: &str) -> bool {
        self.ext() == ext
    }
}

impl fmt::Display for Format {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ext().fmt(f)
    }
}

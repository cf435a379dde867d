//! Recitation audio locations.

pub const DEFAULT_HOST: &str = "everyayah.com";
pub const DEFAULT_RECITER: &str = "Nasser_Alqatami_128kbps";

/// Where recitation audio files are served from.
///
/// Files are laid out as `https://<host>/data/<reciter>/<chapter:03><verse:03>.mp3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecitationSource {
    host: String,
    reciter: String,
}

impl RecitationSource {
    pub fn new(host: &str, reciter: &str) -> Self {
        Self {
            host: host.to_string(),
            reciter: reciter.to_string(),
        }
    }

    /// Audio URL of verse `verse` of chapter `chapter`.
    pub fn media_url(&self, verse: u32, chapter: u32) -> String {
        format!(
            "https://{}/data/{}/{:03}{:03}.mp3",
            self.host, self.reciter, chapter, verse
        )
    }
}

impl Default for RecitationSource {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_RECITER)
    }
}

/// Audio URL of a verse using the default [RecitationSource].
pub fn derive_media_url(verse: u32, chapter: u32) -> String {
    RecitationSource::default().media_url(verse, chapter)
}

const ENGLISH_MARKER: &str = "confirmed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Swahili,
}

impl Language {
    /// English messages carry the word "confirmed" in any casing; everything else is
    /// treated as Swahili
    pub fn detect(message: &str) -> Self {
        if message.to_lowercase().contains(ENGLISH_MARKER) {
            return Language::English;
        }

        Language::Swahili
    }
}

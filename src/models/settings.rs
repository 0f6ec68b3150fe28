//! User-facing settings
//!
//! The page exposes two controls: the "double vowels" checkbox and the
//! macrons/circumflexes radio group. Both are plain configuration handed in
//! from JavaScript; missing fields fall back to the page defaults.

use serde::{Deserialize, Serialize};

/// How long vowels are written when converting syllabics back to SRO
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LongAccents {
    /// ā ē ī ō
    Macrons,
    /// â ê î ô
    #[default]
    Circumflexes,
}

impl LongAccents {
    /// Option string understood by the conversion library
    pub fn as_str(self) -> &'static str {
        match self {
            LongAccents::Macrons => "macrons",
            LongAccents::Circumflexes => "circumflexes",
        }
    }

    /// Parse the value of the checked `macrons` radio button ("true"/"false")
    pub fn from_radio_value(value: &str) -> LongAccents {
        if value == "true" {
            LongAccents::Macrons
        } else {
            LongAccents::Circumflexes
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Rewrite a doubled short vowel into its long form while typing
    pub double_vowels: bool,
    pub long_accents: LongAccents,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            double_vowels: true,
            long_accents: LongAccents::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.double_vowels);
        assert_eq!(settings.long_accents, LongAccents::Circumflexes);
    }

    #[test]
    fn test_partial_settings_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"longAccents":"macrons"}"#).unwrap();
        assert!(settings.double_vowels);
        assert_eq!(settings.long_accents, LongAccents::Macrons);

        let settings: Settings = serde_json::from_str(r#"{"doubleVowels":false}"#).unwrap();
        assert!(!settings.double_vowels);
        assert_eq!(settings.long_accents, LongAccents::Circumflexes);
    }

    #[test]
    fn test_radio_value() {
        assert_eq!(LongAccents::from_radio_value("true"), LongAccents::Macrons);
        assert_eq!(LongAccents::from_radio_value("false"), LongAccents::Circumflexes);
        assert_eq!(LongAccents::Macrons.as_str(), "macrons");
    }
}

//! Output languages.

use std::str::FromStr;

use crate::error::FeError;

/// Language a fleet expression is described in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Language {
    /// Simplified Chinese (`zh_Hans`).
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "zh_Hans"))]
    SimplifiedChinese,
    /// Traditional Chinese (`zh_Hant`).
    #[cfg_attr(feature = "serde", serde(rename = "zh_Hant"))]
    TraditionalChinese,
    /// Japanese (`ja`).
    #[cfg_attr(feature = "serde", serde(rename = "ja"))]
    Japanese,
    /// English (`en`).
    #[cfg_attr(feature = "serde", serde(rename = "en"))]
    English,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Language; 4] = [
        Language::SimplifiedChinese,
        Language::TraditionalChinese,
        Language::Japanese,
        Language::English,
    ];

    /// Canonical tag of the language.
    pub fn tag(&self) -> &'static str {
        match self {
            Language::SimplifiedChinese => "zh_Hans",
            Language::TraditionalChinese => "zh_Hant",
            Language::Japanese => "ja",
            Language::English => "en",
        }
    }
}

impl FromStr for Language {
    type Err = FeError;

    /// Parses a language tag.
    ///
    /// `_` and `-` are interchangeable and case is ignored, so `zh-hans`
    /// and `ZH_Hans` both select Simplified Chinese.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_").to_ascii_lowercase();
        match normalized.as_str() {
            "zh_hans" | "zh_cn" | "zh_sg" => Ok(Language::SimplifiedChinese),
            "zh_hant" | "zh_tw" | "zh_hk" => Ok(Language::TraditionalChinese),
            "ja" | "ja_jp" => Ok(Language::Japanese),
            "en" | "en_us" | "en_gb" => Ok(Language::English),
            _ => Err(FeError::UnsupportedLanguage(s.to_string())),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

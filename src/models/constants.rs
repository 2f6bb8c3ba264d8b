//! Enumerated constants shared across document types.

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown constant value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {constant} value: {value}")]
pub struct UnknownConstantError {
    /// The constant being parsed.
    pub constant: &'static str,
    /// The rejected input.
    pub value: String,
}

/// How a media file should be rendered by a consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Crop the media to fill its frame.
    Crop,
    /// Letterbox the media inside its frame.
    Margin,
}

impl DisplayMode {
    /// All display modes.
    pub const VALUES: [Self; 2] = [Self::Crop, Self::Margin];

    /// The wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Crop => "crop",
            Self::Margin => "margin",
        }
    }
}

impl std::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DisplayMode {
    type Err = UnknownConstantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "crop" => Ok(Self::Crop),
            "margin" => Ok(Self::Margin),
            other => Err(UnknownConstantError {
                constant: "display mode",
                value: other.to_string(),
            }),
        }
    }
}

/// Content languages supported by the API.
///
/// The two-letter code doubles as the `Accept-Language` header value and the
/// `language` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "zh")]
    Chinese,
}

impl Language {
    /// All supported languages.
    pub const VALUES: [Self; 5] = [
        Self::English,
        Self::Spanish,
        Self::French,
        Self::Italian,
        Self::Chinese,
    ];

    /// The ISO 639-1 code used on the wire.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "es",
            Self::French => "fr",
            Self::Italian => "it",
            Self::Chinese => "zh",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::English
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = UnknownConstantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::English),
            "es" => Ok(Self::Spanish),
            "fr" => Ok(Self::French),
            "it" => Ok(Self::Italian),
            "zh" => Ok(Self::Chinese),
            other => Err(UnknownConstantError {
                constant: "language",
                value: other.to_string(),
            }),
        }
    }
}

/// Publication status of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Enabled,
    Disabled,
}

impl Status {
    /// All statuses.
    pub const VALUES: [Self; 2] = [Self::Enabled, Self::Disabled];

    /// The wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = UnknownConstantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "enabled" => Ok(Self::Enabled),
            "disabled" => Ok(Self::Disabled),
            other => Err(UnknownConstantError {
                constant: "status",
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code_round_trips() {
        for language in Language::VALUES {
            assert_eq!(language.code().parse::<Language>(), Ok(language));
        }
    }

    #[test]
    fn test_language_serde_uses_code() {
        assert_eq!(
            serde_json::to_value(Language::Chinese).unwrap(),
            serde_json::json!("zh")
        );
        let parsed: Language = serde_json::from_value(serde_json::json!("fr")).unwrap();
        assert_eq!(parsed, Language::French);
    }

    #[test]
    fn test_language_rejects_unknown_code() {
        let err = "xx".parse::<Language>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown language value: xx");
    }

    #[test]
    fn test_display_mode_round_trips() {
        for mode in DisplayMode::VALUES {
            assert_eq!(mode.as_str().parse::<DisplayMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_status_serde() {
        assert_eq!(
            serde_json::to_value(Status::Enabled).unwrap(),
            serde_json::json!("enabled")
        );
        assert_eq!("disabled".parse::<Status>(), Ok(Status::Disabled));
    }
}

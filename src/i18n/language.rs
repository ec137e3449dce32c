//! Language type: the page locale.
//!
//! The form ships in exactly two languages, so a `Language` is a plain
//! two-variant enum and each variant owns its string table.

use crate::i18n::strings::{LanguageStrings, ENGLISH_STRINGS, SPANISH_STRINGS};
use anyhow::{bail, Result};
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// The language a freshly loaded page starts in.
    #[default]
    English,
    Spanish,
}

impl Language {
    /// Create a Language from an ISO 639-1 code ("en" or "es").
    pub fn from_code(code: &str) -> Result<Language> {
        match code {
            "en" => Ok(Language::English),
            "es" => Ok(Language::Spanish),
            _ => bail!("Unknown language code: '{}'", code),
        }
    }

    /// The other language; this is what the toggle switches to.
    pub fn toggled(&self) -> Language {
        match self {
            Language::English => Language::Spanish,
            Language::Spanish => Language::English,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
        }
    }

    pub fn strings(&self) -> &'static LanguageStrings {
        match self {
            Language::English => &ENGLISH_STRINGS,
            Language::Spanish => &SPANISH_STRINGS,
        }
    }

    /// English name of the language (e.g., "Spanish").
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Serializes as the bare code, which is what `language_preference` carries.
impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

// src/models.rs
use serde::Serialize;

use crate::generators::charset::CharacterClass;

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_digits: bool,
    pub include_special: bool,
    pub include_emojis: bool,
    pub max_uppercase: Option<usize>,
    pub max_lowercase: Option<usize>,
    pub max_digits: Option<usize>,
    pub max_special: Option<usize>,
    pub max_emojis: Option<usize>,
    pub unicode_emojis: bool,
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: 12,
            include_uppercase: true,
            include_lowercase: true,
            include_digits: true,
            include_special: true,
            include_emojis: true,
            max_uppercase: None,
            max_lowercase: None,
            max_digits: None,
            max_special: None,
            max_emojis: None,
            unicode_emojis: false,
        }
    }
}

impl PasswordGenerationOptions {
    /// Options with every class disabled.
    #[cfg(test)]
    pub fn with_length(length: usize) -> Self {
        Self {
            length,
            include_uppercase: false,
            include_lowercase: false,
            include_digits: false,
            include_special: false,
            include_emojis: false,
            ..Self::default()
        }
    }

    pub fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.include_uppercase,
            CharacterClass::Lowercase => self.include_lowercase,
            CharacterClass::Digits => self.include_digits,
            CharacterClass::Special => self.include_special,
            CharacterClass::Emoji => self.include_emojis,
        }
    }

    pub fn max_for(&self, class: CharacterClass) -> Option<usize> {
        match class {
            CharacterClass::Uppercase => self.max_uppercase,
            CharacterClass::Lowercase => self.max_lowercase,
            CharacterClass::Digits => self.max_digits,
            CharacterClass::Special => self.max_special,
            CharacterClass::Emoji => self.max_emojis,
        }
    }

    /// Number of draws for a capped class. A cap of zero counts as unset
    /// and falls back to `length`.
    pub fn draw_count(&self, class: CharacterClass) -> usize {
        match self.max_for(class) {
            Some(0) | None => self.length,
            Some(max) => max,
        }
    }

    pub fn enabled_classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.includes(*class))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `Your Password: <password>`
    #[default]
    Text,
    /// The bare password
    Plain,
    /// A JSON object with the password and the options used
    Json,
}

// JSON output payload
#[derive(Debug, Serialize)]
pub struct GeneratedPassword<'a> {
    pub password: &'a str,
    pub length: usize,
    pub classes: Vec<CharacterClass>,
    pub unicode_emojis: bool,
}

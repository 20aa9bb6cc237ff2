// src/generators/charset.rs
use std::fmt;

use serde::Serialize;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SPECIAL: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Emoji glyphs available to the emoji class.
///
/// Glyphs whose default presentation is text keep their U+FE0F selector, so
/// an entry can be two code points. Base code points are all distinct.
pub static EMOJI_GLYPHS: [&str; 144] = [
    "😂", "❤️", "🤣", "👍", "😭", "🙏", "😘", "🥰", "😍", "😊",
    "🎉", "😁", "💕", "🥺", "😅", "🔥", "🤦", "♥️", "🤷", "🙄",
    "😆", "🤗", "😉", "🎂", "🤔", "👏", "🙂", "😳", "🥳", "😎",
    "👌", "💜", "😔", "💪", "✨", "💖", "👀", "😋", "😏", "😢",
    "👉", "💗", "😩", "💯", "🌹", "💞", "🎈", "💙", "😃", "😡",
    "💐", "😜", "🙈", "🤞", "😄", "🤤", "🙌", "🤪", "❣️", "😀",
    "💀", "👇", "💔", "😌", "💓", "🤩", "🙃", "😬", "😱", "😴",
    "🤭", "😐", "🌞", "😒", "😇", "🌸", "😈", "✌️", "🎊", "🥵",
    "😞", "💚", "☀️", "💰", "😚", "👑", "🎁", "💥", "🙋", "☹️",
    "😑", "🥴", "👈", "💩", "✅", "👋", "🤮", "😤", "🤢", "🌟",
    "😥", "🌈", "💛", "😝", "😫", "😲", "‼️", "🔴", "🌻", "🤯",
    "💃", "👊", "🤬", "🏃", "😕", "👁️", "⚡", "☕", "🍀", "💦",
    "⭐", "🦋", "🤨", "🌺", "😹", "🤘", "🌷", "💝", "💤", "🤝",
    "🐰", "😓", "💘", "🍻", "😟", "😣", "🧐", "😠", "🤠", "😻",
    "🌙", "😛", "🤙", "🙊",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digits,
    Special,
    Emoji,
}

impl CharacterClass {
    /// Pool assembly order.
    pub const ALL: [CharacterClass; 5] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digits,
        CharacterClass::Special,
        CharacterClass::Emoji,
    ];

    /// The fixed base set of this class, one entry per symbol.
    pub fn base_set(self) -> Vec<&'static str> {
        match self {
            CharacterClass::Uppercase => split_symbols(UPPERCASE),
            CharacterClass::Lowercase => split_symbols(LOWERCASE),
            CharacterClass::Digits => split_symbols(DIGITS),
            CharacterClass::Special => split_symbols(SPECIAL),
            CharacterClass::Emoji => EMOJI_GLYPHS.to_vec(),
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterClass::Uppercase => write!(f, "uppercase"),
            CharacterClass::Lowercase => write!(f, "lowercase"),
            CharacterClass::Digits => write!(f, "digits"),
            CharacterClass::Special => write!(f, "special"),
            CharacterClass::Emoji => write!(f, "emoji"),
        }
    }
}

fn split_symbols(set: &'static str) -> Vec<&'static str> {
    set.char_indices()
        .map(|(i, c)| &set[i..i + c.len_utf8()])
        .collect()
}

/// Format a glyph as its code-point identifier, e.g. `U+1F602`.
///
/// Only the base code point is used; a trailing presentation selector is
/// dropped.
pub fn code_point_identifier(glyph: &str) -> String {
    match glyph.chars().next() {
        Some(c) => format!("U+{:X}", c as u32),
        None => String::new(),
    }
}

/// Look up the glyph a code-point identifier refers to.
#[cfg(test)]
pub fn glyph_for_identifier(identifier: &str) -> Option<&'static str> {
    let hex = identifier.strip_prefix("U+")?;
    if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()) {
        return None;
    }
    let code_point = u32::from_str_radix(hex, 16).ok()?;
    let c = char::from_u32(code_point)?;

    EMOJI_GLYPHS
        .iter()
        .copied()
        .find(|glyph| glyph.chars().next() == Some(c))
}

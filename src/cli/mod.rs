// src/cli/mod.rs
use clap::builder::RangedU64ValueParser;
use clap::Parser;

use crate::models::{OutputFormat, PasswordGenerationOptions};

pub mod flags;
pub mod handlers;

pub use flags::normalize_args;

/// Upper bound for the length and every cap; each counts pool draws.
pub const MAX_DRAWS: u64 = 1_000_000;

fn draws() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::new().range(0..=MAX_DRAWS)
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Password generator with optional emoji Unicode output",
    long_about = None
)]
pub struct Args {
    /// Length of password
    #[arg(value_parser = draws())]
    pub length: usize,

    /// Include uppercase letters
    #[arg(short, long)]
    pub uppercase: bool,

    /// Include lowercase letters
    #[arg(short, long)]
    pub lowercase: bool,

    /// Include digits
    #[arg(short, long)]
    pub digits: bool,

    /// Include special characters
    #[arg(short, long)]
    pub special: bool,

    /// Include emojis
    #[arg(short, long)]
    pub emojis: bool,

    /// Maximum number of uppercase characters (also -mu)
    #[arg(long, alias = "max_uppercase", value_name = "N", value_parser = draws())]
    pub max_uppercase: Option<usize>,

    /// Maximum number of lowercase characters (also -ml)
    #[arg(long, alias = "max_lowercase", value_name = "N", value_parser = draws())]
    pub max_lowercase: Option<usize>,

    /// Maximum number of digits (also -md)
    #[arg(long, alias = "max_digits", value_name = "N", value_parser = draws())]
    pub max_digits: Option<usize>,

    /// Maximum number of special characters (also -ms)
    #[arg(long, alias = "max_special", value_name = "N", value_parser = draws())]
    pub max_special: Option<usize>,

    /// Maximum number of emojis (also -me)
    #[arg(long, alias = "max_emojis", value_name = "N", value_parser = draws())]
    pub max_emojis: Option<usize>,

    /// Output Unicode values for emojis
    #[arg(long)]
    pub unicode_emojis: bool,

    /// Seed for a reproducible password
    #[arg(long, env = "PASSGEN_SEED")]
    pub seed: Option<u64>,

    /// Output format, overrides OUTPUT_FORMAT
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl Args {
    pub fn generation_options(&self) -> PasswordGenerationOptions {
        PasswordGenerationOptions {
            length: self.length,
            include_uppercase: self.uppercase,
            include_lowercase: self.lowercase,
            include_digits: self.digits,
            include_special: self.special,
            include_emojis: self.emojis,
            max_uppercase: self.max_uppercase,
            max_lowercase: self.max_lowercase,
            max_digits: self.max_digits,
            max_special: self.max_special,
            max_emojis: self.max_emojis,
            unicode_emojis: self.unicode_emojis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        let argv = std::iter::once("emoji-passgen").chain(argv.iter().copied());
        Args::try_parse_from(normalize_args(argv.map(Into::into)))
    }

    #[test]
    fn class_flags_default_to_off() {
        let args = parse(&["16"]).unwrap();
        let options = args.generation_options();

        assert_eq!(options, PasswordGenerationOptions::with_length(16));
        assert_eq!(args.seed, None);
        assert_eq!(args.format, None);
    }

    #[test]
    fn short_and_long_class_flags() {
        let args = parse(&["10", "-ul", "--digits", "-s", "--emojis"]).unwrap();
        let options = args.generation_options();

        assert!(options.include_uppercase);
        assert!(options.include_lowercase);
        assert!(options.include_digits);
        assert!(options.include_special);
        assert!(options.include_emojis);
    }

    #[test]
    fn two_letter_caps_are_accepted() {
        let args = parse(&[
            "8", "-u", "-mu", "3", "-ml=4", "-md", "0", "--max-special", "2", "--max_emojis", "1",
        ])
        .unwrap();
        let options = args.generation_options();

        assert_eq!(options.max_uppercase, Some(3));
        assert_eq!(options.max_lowercase, Some(4));
        assert_eq!(options.max_digits, Some(0));
        assert_eq!(options.max_special, Some(2));
        assert_eq!(options.max_emojis, Some(1));
    }

    #[test]
    fn joined_two_letter_caps_are_accepted() {
        let options = parse(&["8", "-u", "-mu5", "-ms0"]).unwrap().generation_options();

        assert_eq!(options.max_uppercase, Some(5));
        assert_eq!(options.max_special, Some(0));
    }

    #[test]
    fn unicode_seed_and_format() {
        let args = parse(&[
            "4", "-e", "--unicode-emojis", "-me", "4", "--seed", "42", "--format", "json",
        ])
        .unwrap();

        assert!(args.generation_options().unicode_emojis);
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.format, Some(OutputFormat::Json));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["twelve"]).is_err());
        assert!(parse(&["-5"]).is_err());
        assert!(parse(&["8", "-mu", "-1"]).is_err());
        assert!(parse(&["8", "--format", "xml"]).is_err());
    }

    #[test]
    fn draw_counts_are_bounded() {
        let max = MAX_DRAWS.to_string();
        let over = (MAX_DRAWS + 1).to_string();

        let args = parse(&[max.as_str(), "-u", "-mu", max.as_str()]).unwrap();
        assert_eq!(args.length, MAX_DRAWS as usize);
        assert_eq!(args.max_uppercase, Some(MAX_DRAWS as usize));

        assert!(parse(&[over.as_str()]).is_err());
        assert!(parse(&["8", "-u", "-mu", "18446744073709551615"]).is_err());
        assert!(parse(&["8", "-e", "--max-emojis", over.as_str()]).is_err());
        let joined = format!("-md{over}");
        assert!(parse(&["8", "-d", joined.as_str()]).is_err());
    }
}

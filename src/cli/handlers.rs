// src/cli/handlers.rs
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cli::Args;
use crate::core::Config;
use crate::generators::{self, PasswordGenerator};
use crate::models::{GeneratedPassword, OutputFormat, PasswordGenerationOptions};

// Handlers for the generate command
pub fn handle_generate(args: &Args, config: &Config) -> anyhow::Result<String> {
    let options = args.generation_options();

    let password = match args.seed {
        Some(seed) => {
            log::debug!("Using seeded ChaCha20 source");
            generate_with(ChaCha20Rng::seed_from_u64(seed), &options)?
        }
        None => generators::generate_password(&options)?,
    };

    let format = args.format.unwrap_or(config.output_format);
    let rendered = render(format, &password, &options)?;
    Ok(rendered)
}

pub fn generate_with<R: Rng>(
    rng: R,
    options: &PasswordGenerationOptions,
) -> generators::Result<String> {
    PasswordGenerator::new(rng).generate_password(options)
}

/// Format a generated password for stdout.
pub fn render(
    format: OutputFormat,
    password: &str,
    options: &PasswordGenerationOptions,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("Your Password: {}", password)),
        OutputFormat::Plain => Ok(password.to_string()),
        OutputFormat::Json => serde_json::to_string(&GeneratedPassword {
            password,
            length: options.length,
            classes: options.enabled_classes(),
            unicode_emojis: options.unicode_emojis,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::GeneratorError;
    use clap::Parser;
    use serde_json::{json, Value};

    fn args(argv: &[&str]) -> Args {
        let argv = std::iter::once("emoji-passgen").chain(argv.iter().copied());
        Args::parse_from(crate::cli::normalize_args(argv.map(Into::into)))
    }

    #[test]
    fn renders_each_format() {
        let options = PasswordGenerationOptions {
            include_digits: true,
            include_emojis: true,
            ..PasswordGenerationOptions::with_length(3)
        };

        assert_eq!(
            render(OutputFormat::Text, "4😂2", &options).unwrap(),
            "Your Password: 4😂2"
        );
        assert_eq!(render(OutputFormat::Plain, "4😂2", &options).unwrap(), "4😂2");

        let json_output = render(OutputFormat::Json, "4😂2", &options).unwrap();
        let value: Value = serde_json::from_str(&json_output).unwrap();
        assert_eq!(
            value,
            json!({
                "password": "4😂2",
                "length": 3,
                "classes": ["digits", "emoji"],
                "unicode_emojis": false
            })
        );
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let args = args(&["24", "-ulds", "--seed", "99", "--format", "plain"]);
        let config = Config::default();

        let first = handle_generate(&args, &config).unwrap();
        let second = handle_generate(&args, &config).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.chars().count(), 24);
    }

    #[test]
    fn config_format_applies_without_flag() {
        let args = args(&["6", "-d", "--seed", "1"]);
        let config = Config {
            output_format: OutputFormat::Text,
            ..Config::default()
        };

        let output = handle_generate(&args, &config).unwrap();
        let password = output.strip_prefix("Your Password: ").unwrap();
        assert_eq!(password.len(), 6);
        assert!(password.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn empty_pool_surfaces_as_error() {
        let args = args(&["5"]);

        let err = handle_generate(&args, &Config::default()).unwrap_err();
        assert_eq!(err.downcast_ref::<GeneratorError>(), Some(&GeneratorError::EmptyPool));
        assert_eq!(err.to_string(), "At least one character set must be selected");
    }
}

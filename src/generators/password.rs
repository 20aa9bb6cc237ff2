// src/generators/password.rs
use std::borrow::Cow;

use rand::seq::SliceRandom;
use rand::Rng;

use super::charset::{code_point_identifier, CharacterClass, EMOJI_GLYPHS};
use super::{GeneratorError, Result};
use crate::models::PasswordGenerationOptions;

pub type Pool = Vec<Cow<'static, str>>;

/// Builds passwords from a pool of character-class entries, drawing from an
/// injected random source.
pub struct PasswordGenerator<R> {
    rng: R,
}

impl<R: Rng> PasswordGenerator<R> {
    pub fn new(rng: R) -> Self {
        PasswordGenerator { rng }
    }

    pub fn generate_password(&mut self, options: &PasswordGenerationOptions) -> Result<String> {
        let pool = self.build_pool(options)?;

        let mut password = String::new();
        for _ in 0..options.length {
            let idx = self.rng.gen_range(0..pool.len());
            password.push_str(&pool[idx]);
        }

        log::info!(
            "Generated password of {} elements from a pool of {} entries",
            options.length,
            pool.len()
        );

        Ok(password)
    }

    /// Assemble the sampling pool from every enabled class.
    ///
    /// Fails with [`GeneratorError::EmptyPool`] when no class contributed an
    /// entry, whatever the reason.
    pub fn build_pool(&mut self, options: &PasswordGenerationOptions) -> Result<Pool> {
        let mut pool = Pool::new();

        for class in CharacterClass::ALL {
            let entries = self.contribution(class, options);
            if options.includes(class) {
                log::debug!("{} contributed {} pool entries", class, entries.len());
            }
            pool.extend(entries);
        }

        if pool.is_empty() {
            log::debug!("No enabled character class contributed to the pool");
            return Err(GeneratorError::EmptyPool);
        }

        Ok(pool)
    }

    /// Entries a single class adds to the pool. Disabled classes add nothing.
    pub fn contribution(
        &mut self,
        class: CharacterClass,
        options: &PasswordGenerationOptions,
    ) -> Pool {
        if !options.includes(class) {
            return Pool::new();
        }

        if class == CharacterClass::Emoji && options.unicode_emojis {
            return self.unicode_emojis(options.draw_count(class));
        }

        let base = class.base_set();
        match options.max_for(class) {
            Some(_) => (0..options.draw_count(class))
                .map(|_| Cow::Borrowed(base[self.rng.gen_range(0..base.len())]))
                .collect(),
            None => base.into_iter().map(Cow::Borrowed).collect(),
        }
    }

    // Distinct glyphs, rendered as code-point identifiers
    fn unicode_emojis(&mut self, requested: usize) -> Pool {
        if requested > EMOJI_GLYPHS.len() {
            log::warn!(
                "Requested {} unicode emojis but only {} distinct glyphs exist",
                requested,
                EMOJI_GLYPHS.len()
            );
        }

        EMOJI_GLYPHS
            .choose_multiple(&mut self.rng, requested.min(EMOJI_GLYPHS.len()))
            .map(|glyph| Cow::Owned(code_point_identifier(glyph)))
            .collect()
    }
}

// Generate a password using the thread-local random source
pub fn generate_password(options: &PasswordGenerationOptions) -> Result<String> {
    PasswordGenerator::new(rand::thread_rng()).generate_password(options)
}

// src/generators/mod.rs
use thiserror::Error;

pub mod charset;
pub mod password;

pub use password::{generate_password, PasswordGenerator};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("At least one character set must be selected")]
    EmptyPool,
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

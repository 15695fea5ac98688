//! Password generation.

use std::fmt;

use rand::Rng;
use thiserror::Error;
use zeroize::Zeroizing;

use super::charset::CharClasses;

pub const MIN_LENGTH: usize = 6;
pub const MAX_LENGTH: usize = 100;
pub const DEFAULT_LENGTH: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("no character class selected")]
    NoClassSelected,
    #[error("password length {length} is outside {}..={}", MIN_LENGTH, MAX_LENGTH)]
    LengthOutOfRange { length: usize },
}

/// Enabled classes plus the requested length. Owned by the caller for one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    pub classes: CharClasses,
    pub length: usize,
}

impl GenerationConfig {
    pub fn new(classes: CharClasses, length: usize) -> Self {
        Self { classes, length }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            classes: CharClasses::all(),
            length: DEFAULT_LENGTH,
        }
    }
}

/// A generated password. The buffer is wiped on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Keep passwords out of debug logs.
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password({} chars)", self.len())
    }
}

/// Build the combined alphabet and check the config, without sampling.
pub fn validate(config: &GenerationConfig) -> Result<Vec<char>, ConfigError> {
    let alphabet = config.classes.alphabet();
    if alphabet.is_empty() {
        return Err(ConfigError::NoClassSelected);
    }
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&config.length) {
        return Err(ConfigError::LengthOutOfRange {
            length: config.length,
        });
    }
    Ok(alphabet)
}

/// Generate a password using the thread-local RNG.
pub fn generate(config: &GenerationConfig) -> Result<Password, ConfigError> {
    generate_with(config, &mut rand::rng())
}

/// Generate a password drawing from `rng`.
pub fn generate_with<R: Rng + ?Sized>(
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<Password, ConfigError> {
    let alphabet = validate(config)?;
    log::debug!(
        "generating password: length={} alphabet={}",
        config.length,
        alphabet.len()
    );

    let mut out = Zeroizing::new(String::with_capacity(config.length));
    for _ in 0..config.length {
        out.push(sample(&alphabet, rng));
    }
    Ok(Password(out))
}

/// Generate `count` passwords with the same config.
pub fn generate_batch(config: &GenerationConfig, count: usize) -> Result<Vec<Password>, ConfigError> {
    let alphabet = validate(config)?;
    let mut rng = rand::rng();
    log::debug!(
        "generating {} password(s): length={} alphabet={}",
        count,
        config.length,
        alphabet.len()
    );

    Ok((0..count)
        .map(|_| {
            let mut out = Zeroizing::new(String::with_capacity(config.length));
            out.extend((0..config.length).map(|_| sample(&alphabet, &mut rng)));
            Password(out)
        })
        .collect())
}

/// index = floor(u * len) with u uniform in [0, 1).
/// Caller guarantees a non-empty alphabet.
#[inline]
pub(crate) fn sample<R: Rng + ?Sized>(alphabet: &[char], rng: &mut R) -> char {
    let u: f64 = rng.random();
    let idx = ((u * alphabet.len() as f64) as usize).min(alphabet.len() - 1);
    alphabet[idx]
}

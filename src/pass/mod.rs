//! Password generation core.

pub mod charset;
mod generate;
pub mod stats;
pub mod strength;

pub use charset::{CharClasses, CharacterClass};
pub use generate::{
    ConfigError, DEFAULT_LENGTH, GenerationConfig, MAX_LENGTH, MIN_LENGTH, Password, generate,
    generate_batch, generate_with, validate,
};
pub use strength::{BarWidth, StrengthColor, StrengthHint, entropy_bits, length_to_strength_hint};

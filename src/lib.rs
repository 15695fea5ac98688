//! Random password generator: generation core, strength hint, UI strings,
//! and the terminal front ends built on them.

pub mod cli;
pub mod clipboard;
pub mod exits;
pub mod faq;
pub mod i18n;
pub mod pass;
pub mod settings;
pub mod terminal;
pub mod tui;

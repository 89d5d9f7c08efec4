//! Interactive client for the `roster` binary: flag parsing, the menu session,
//! line prompting and text rendering. Not part of the library API.

mod commands;
mod prompt;
mod render;
mod setup;

pub use commands::run;

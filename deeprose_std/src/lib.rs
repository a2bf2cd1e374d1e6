//! Turns the deeprose stdlib source into a C header,
//! so the interpreter can compile the stdlib into its binary instead of loading it at runtime.
//!
//! The main entry points are [embed::embed] and [embed::check].
//! This crate does not look at the deeprose source itself, it only transcribes bytes.

// Diagnostics are the job of the command line tool.
#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod embed;
pub mod error;
pub mod escape;
pub mod header;
pub mod manifest;
pub mod settings;

#[cfg(test)]
mod tests;

//! CLI Commands
//!
//! Request resolution and output handling for the datagen CLI.

mod generate;
mod output;

pub use generate::{generate, Request};

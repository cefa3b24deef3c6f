//! Library crate root re-exporting the prompt, Claude and server modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod claude;
pub mod cli;
pub mod prompts;
pub mod server;

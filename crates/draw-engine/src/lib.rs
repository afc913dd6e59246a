//! Draw Engine
//!
//! Reproducible integer draws from a bounded range, with or without
//! repetition, with exclusions and optional ascending order.
//! This crate is compiled to:
//! - Native (for the command-line program)
//! - WASM (for a browser front end)

mod error;
mod exclude;
mod history;
mod random;
mod request;
mod sampler;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::DrawError;
pub use exclude::parse_exclusions;
pub use history::{clipboard_text, share_text, DrawHistory, HistoryEntry, MAX_HISTORY};
pub use random::{Mulberry32, RandomSource, SeedHasher};
pub use request::{DrawRequest, MAX_POOL_SPAN};
pub use sampler::{draw, validate};

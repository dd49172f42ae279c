//! Configuration module for the sniper radar.

// Can all be private now because we have a public re-export.
mod data;
mod debug;
mod persistence;
mod sniper;
mod symbols;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use data::{DATA, DataConfig, YahooConfig};
pub use debug::{DF, LOG_PERFORMANCE};
pub use persistence::PERSISTENCE;
pub use plot::PLOT_CONFIG;
pub use sniper::{SNIPER, SniperConfig};
pub use symbols::SYMBOLS;

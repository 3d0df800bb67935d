//! Price surfaces over strike and volatility
//!
//! Evaluates the pricing kernel across a rectangular (strike, volatility) grid,
//! holding spot, time to expiry and rate fixed, for heatmap-style rendering.

pub mod grid;
pub mod types;

pub use grid::*;
pub use types::*;

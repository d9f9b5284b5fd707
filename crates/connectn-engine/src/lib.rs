//! Board model and rules for Connect-N.
//!
//! - [`core`] - Cells, the gravity board, windows and win detection
//! - [`engine`] - Game configuration and turn sequencing
//!
//! All board dimensions and the run length needed to win are runtime
//! parameters; the classic game is a 6×7 board with a win length of 4.

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

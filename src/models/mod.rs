//! Data models

pub mod accident;
pub mod prediction;
pub mod health;

pub use accident::*;
pub use prediction::*;
pub use health::*;

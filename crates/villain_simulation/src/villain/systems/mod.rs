//! Villain systems (per-tick логика юнита)

pub mod attack;
pub mod control;
pub mod lifecycle;
pub mod speed;

// Re-export all systems
pub use attack::*;
pub use control::*;
pub use lifecycle::*;
pub use speed::*;

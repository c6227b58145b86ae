//! AI systems (strategic layer logic)

pub mod capture;
pub mod fsm;
pub mod setup;

// Re-export all systems
pub use capture::*;
pub use fsm::*;
pub use setup::*;

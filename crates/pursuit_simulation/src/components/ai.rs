//! AI компоненты: state machine, config, roam state

// PursuerState/PursuerConfig/RoamState живут в crate::ai::components,
// здесь только re-export для единообразия импорта через crate::components.
pub use crate::ai::{CaptureLatch, PursuerConfig, PursuerFault, PursuerState, RoamState};

// Domain layer: core models and ports (interfaces). No knowledge of reqwest
// beyond the error type surfaced through utils::error.

pub mod model;
pub mod ports;

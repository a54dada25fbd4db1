//! Error taxonomy for the layout simulator.
//!
//! Everything here is recoverable by the hosting process: configuration
//! problems are rejected before a simulation exists, scenario problems
//! before the first tick. Runtime anomalies (unknown ids, non-finite
//! state) are contained locally and logged, never raised.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    /// Invalid parameter or viewport value at construction or resize.
    #[error("config error: {0}")]
    Config(String),

    /// An edge references a node id that does not exist.
    #[error("unknown node id: {0}")]
    UnknownNode(String),

    /// Malformed scenario data (duplicate id, out-of-range stress).
    #[error("scenario error: {0}")]
    Scenario(String),
}

pub type LayoutResult<T> = Result<T, LayoutError>;

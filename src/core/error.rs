//! Engine errors.
//!
//! Game operations never fail: bad indices and malformed candidates yield
//! `false`, blank cards, or no-ops. Only construction from an untrusted
//! configuration and state save/restore are fallible.

use thiserror::Error;

/// Errors from configuration validation and state persistence.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("universe of {num_attr_vals}^{num_attrs} cards is too large")]
    UniverseTooLarge { num_attrs: u32, num_attr_vals: u32 },

    #[error("failed to encode engine state: {0}")]
    Encode(#[source] bincode::Error),

    #[error("failed to decode engine state: {0}")]
    Decode(#[source] bincode::Error),

    #[error("corrupt engine state: {reason}")]
    CorruptState { reason: &'static str },
}

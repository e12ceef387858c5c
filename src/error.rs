/*
 * Error Module
 *
 * Errors surfaced by the flock core. The per-frame update never fails;
 * only the boundaries that accept outside input (spawning and parameter
 * validation) can reject it.
 */

use thiserror::Error;

/// Errors emitted when the flock is configured or spawned.
#[derive(Debug, Error, PartialEq)]
pub enum FlockError {
    /// A flock must contain at least `min` agents.
    #[error("flock size {count} is invalid, at least {min} agent is required")]
    InvalidCount { count: usize, min: usize },
    /// A tunable parameter is out of range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParams {
        name: &'static str,
        reason: &'static str,
    },
}

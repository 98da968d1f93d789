//! Host-side error types.
//!
//! `crash-capture` itself has no fallible operations in its public surface
//! (capture never returns an error on target); everything that can go
//! wrong here happens on the host, decoding a record dump that may be
//! truncated, corrupted, or simply absent. A dedicated error enum rather
//! than stringly-typed failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("record buffer is {actual} bytes, expected exactly {expected}")]
    WrongSize { actual: usize, expected: usize },

    #[error("record does not carry a valid capture (key/anti-key mismatch)")]
    NotValid,
}

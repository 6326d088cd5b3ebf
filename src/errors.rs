//! Unified application error type.
//! A missing field or an odd encoding is never an error here: the engine
//! resolves those with unset fields and tolerant fallbacks. Only payloads
//! that cannot be read at all (no text/html part, unreadable file) fail.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Payload-level failures
    // ---------------------------
    #[error("Unreadable payload: {0}")]
    Payload(String),

    // ---------------------------
    // Output serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;

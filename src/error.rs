// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Boundary errors.
//!
//! The calculator itself cannot fail; these only come from decoding
//! requests, strict table lookups and cache snapshots.

#[derive(Debug, thiserror::Error)]
pub enum CpmError {
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] serde_json::Error),

    #[error("unknown jurisdiction code: {0}")]
    UnknownJurisdiction(String),

    #[error("invalid cache snapshot: {0}")]
    InvalidSnapshot(String),
}

pub type Result<T> = std::result::Result<T, CpmError>;

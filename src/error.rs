// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use reqwest::StatusCode;
use thiserror::Error;

/// Ways the one-off observation fetch can fail.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to send request: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to parse observations: {0}")]
    Malformed(#[from] serde_json::Error),
}

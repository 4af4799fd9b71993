// SPDX-License-Identifier: MIT

//! Response status capture
//!
//! Handlers may set a status explicitly or implicitly (by writing body bytes
//! without ever setting one). Only the first commit is honored, matching
//! standard HTTP semantics where only the first status line reaches the wire.

use axum::http::StatusCode;

/// Captures the final status code of one in-flight request.
///
/// One observer per request, owned by the metrics middleware and discarded
/// when the request completes. Until something commits a status, the observer
/// reports [`StatusCode::OK`].
#[derive(Debug)]
pub struct ResponseObserver {
    status: StatusCode,
    committed: bool,
}

impl ResponseObserver {
    pub fn new() -> Self {
        Self {
            status: StatusCode::OK,
            committed: false,
        }
    }

    /// Commit `code` as the final status. First commit wins; later calls are
    /// no-ops.
    pub fn set_status(&mut self, code: StatusCode) {
        if !self.committed {
            self.status = code;
            self.committed = true;
        }
    }

    /// Account for a body write. A handler that writes a body without ever
    /// setting a status is assumed successful, so the first write commits
    /// [`StatusCode::OK`] if nothing has been committed yet.
    ///
    /// Returns the number of bytes accepted; the bytes themselves flow to the
    /// client untouched.
    pub fn write(&mut self, buf: &[u8]) -> usize {
        if !self.committed {
            self.set_status(StatusCode::OK);
        }
        buf.len()
    }

    /// The committed status, or [`StatusCode::OK`] if nothing was committed.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Whether a status has been committed for this request.
    pub fn committed(&self) -> bool {
        self.committed
    }
}

impl Default for ResponseObserver {
    fn default() -> Self {
        Self::new()
    }
}

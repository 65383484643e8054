// DUCO-S1 Miner - Free and Open Source Software Statement
//
// This project, ducos1-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/error.rs
// Version: 1.0.0
//
// Error taxonomy for the pool connection, the discovery call and the worker
// cycle.

use std::io;
use std::time::Duration;
use thiserror::Error;

/// Failures raised by a single pool socket.
#[derive(Debug, Error)]
pub enum PoolError {
    #[error("no address found for {0}")]
    Resolve(String),

    #[error("failed to connect to {address}: {source}")]
    Connect {
        address: String,
        #[source]
        source: io::Error,
    },

    #[error("timed out after {timeout:?} while {step}")]
    Timeout { step: &'static str, timeout: Duration },

    #[error("i/o error while {step}: {source}")]
    Io {
        step: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("connection closed by pool while {0}")]
    Closed(&'static str),

    #[error("malformed job line {line:?}: expected at least 3 fields, got {fields}")]
    MalformedJob { line: String, fields: usize },

    #[error("invalid job difficulty {0:?}")]
    InvalidDifficulty(String),
}

impl PoolError {
    /// True when the failure happened before a stream existed.
    pub fn is_connect_failure(&self) -> bool {
        matches!(
            self,
            PoolError::Resolve(_)
                | PoolError::Connect { .. }
                | PoolError::Timeout { step: "connecting", .. }
        )
    }
}

/// One failed discovery attempt. Every variant is retried the same way.
#[derive(Debug, Error)]
pub enum LocatorError {
    #[error("discovery request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("discovery endpoint returned status {0}")]
    Status(u16),

    #[error("discovery response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("discovery endpoint reported no usable pool")]
    Unsuccessful,
}

/// Everything that can end one worker session.
#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("connect failure: {0}")]
    Connect(#[source] PoolError),

    #[error("protocol failure: {0}")]
    Protocol(#[source] PoolError),

    #[error("no nonce in 0..={max_nonce} matches job {seed}")]
    SearchExhausted { seed: String, max_nonce: u64 },

    #[error("solver task failed: {0}")]
    Solver(String),

    #[error("worker cancelled")]
    Cancelled,
}

impl From<PoolError> for WorkerError {
    fn from(err: PoolError) -> Self {
        if err.is_connect_failure() {
            WorkerError::Connect(err)
        } else {
            WorkerError::Protocol(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_errors_are_classified() {
        let refused = PoolError::Connect {
            address: "127.0.0.1:1".to_string(),
            source: io::Error::from(io::ErrorKind::ConnectionRefused),
        };
        assert!(matches!(WorkerError::from(refused), WorkerError::Connect(_)));

        let timeout = PoolError::Timeout { step: "connecting", timeout: Duration::from_secs(1) };
        assert!(timeout.is_connect_failure());
    }

    #[test]
    fn test_mid_cycle_errors_are_protocol_failures() {
        let closed = PoolError::Closed("reading job");
        assert!(matches!(WorkerError::from(closed), WorkerError::Protocol(_)));

        let timeout = PoolError::Timeout { step: "reading verdict", timeout: Duration::from_secs(1) };
        assert!(!timeout.is_connect_failure());
    }
}

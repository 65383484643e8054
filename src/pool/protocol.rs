// DUCO-S1 Miner - Free and Open Source Software Statement
//
// This project, ducos1-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/pool/protocol.rs
// Version: 1.0.0
//
// This file builds the outgoing lines of the DUCO-S1 pool protocol, located in
// the pool subdirectory. Lines are comma separated ASCII and are sent without
// a trailing newline.
//
// Tree Location:
// - src/pool/protocol.rs (request line construction)
// - Depends on: crate::core::types

use crate::core::types::DifficultyLevel;
use log::debug;

const LOG_TARGET: &str = "ducos1::pool::protocol";

/// Constructs request lines for the pool protocol
pub struct Ducos1Protocol;

impl Ducos1Protocol {
    /// `JOB,<username>,<LOW|MEDIUM>,<mining key>`
    pub fn create_job_request(username: &str, difficulty: DifficultyLevel, mining_key: &str) -> String {
        let message = format!("JOB,{},{},{}", username, difficulty.as_wire(), mining_key);
        debug!(target: LOG_TARGET, "Job request for {} at {}", username, difficulty);
        message
    }

    /// `<nonce>,<hashrate>,<client tag>`
    pub fn create_result_submission(nonce: u64, hashrate: f64, client_tag: &str) -> String {
        format!("{},{},{}", nonce, hashrate, client_tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_request_line() {
        assert_eq!(
            Ducos1Protocol::create_job_request("alice", DifficultyLevel::Low, "key1"),
            "JOB,alice,LOW,key1"
        );
        assert_eq!(
            Ducos1Protocol::create_job_request("bob", DifficultyLevel::Medium, ""),
            "JOB,bob,MEDIUM,"
        );
    }

    #[test]
    fn test_result_line_has_no_newline() {
        let line = Ducos1Protocol::create_result_submission(42, 1500.5, "ducos1-miner_v1.0.0");
        assert_eq!(line, "42,1500.5,ducos1-miner_v1.0.0");
        assert!(!line.ends_with('\n'));
    }
}

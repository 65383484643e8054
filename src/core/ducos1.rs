// DUCO-S1 Miner - Free and Open Source Software Statement
//
// This project, ducos1-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/ducos1.rs
// Version: 1.0.0
//
// This file implements the DUCO-S1 preimage search: find the smallest nonce
// in 0..=100*difficulty such that SHA-1(seed || decimal(nonce)) equals the
// job's target digest.

use crate::core::types::SolveResult;
use log::debug;
use sha1::{Digest, Sha1};
use std::fmt::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

const LOG_TARGET: &str = "ducos1::core::solver";

/// Candidates checked between two looks at the stop flag.
const STOP_CHECK_INTERVAL: u64 = 4096;

/// Largest nonce searched for a given difficulty.
pub fn max_nonce(difficulty: u64) -> u64 {
    difficulty.saturating_mul(100)
}

/// Lowercase hex SHA-1 of `seed` followed by the decimal nonce.
pub fn ducos1_hash(seed: &str, nonce: u64) -> String {
    let mut hasher = Sha1::new();
    hasher.update(seed.as_bytes());
    hasher.update(nonce.to_string().as_bytes());
    hex::encode(hasher.finalize())
}

/// Search the full range for the job's nonce.
pub fn solve(seed: &str, target_digest: &str, difficulty: u64) -> Option<SolveResult> {
    solve_until(seed, target_digest, difficulty, &AtomicBool::new(false))
}

/// Same as [`solve`], giving up early once `should_stop` is set.
pub fn solve_until(
    seed: &str,
    target_digest: &str,
    difficulty: u64,
    should_stop: &AtomicBool,
) -> Option<SolveResult> {
    let start = Instant::now();
    let upper = max_nonce(difficulty);
    let target = target_digest.as_bytes();

    // The digest of any candidate is 40 lowercase hex chars, so nothing else can match.
    if target.len() != 40 {
        debug!(target: LOG_TARGET, "Target digest has {} chars, job cannot be solved", target.len());
        return None;
    }

    let mut base = Sha1::new();
    base.update(seed.as_bytes());

    let mut hex_buf = [0u8; 40];
    let mut nonce_buf = String::with_capacity(20);

    for nonce in 0..=upper {
        if nonce % STOP_CHECK_INTERVAL == 0 && should_stop.load(Ordering::Relaxed) {
            debug!(target: LOG_TARGET, "Search stopped at nonce {} of {}", nonce, upper);
            return None;
        }

        nonce_buf.clear();
        let _ = write!(nonce_buf, "{}", nonce);

        let mut hasher = base.clone();
        hasher.update(nonce_buf.as_bytes());
        let digest = hasher.finalize();

        // encode_to_slice only fails on a length mismatch, which cannot happen here.
        if hex::encode_to_slice(digest, &mut hex_buf).is_ok() && hex_buf[..] == *target {
            return Some(SolveResult {
                nonce,
                elapsed: start.elapsed(),
            });
        }
    }

    debug!(target: LOG_TARGET, "Exhausted 0..={} without a match", upper);
    None
}


// Changelog:
// - v1.0.0 (2026-10-17): Initial DUCO-S1 solver.
//   - Seed-only SHA-1 state is cloned per candidate.
//   - Candidates compared as lowercase hex without allocating per nonce.

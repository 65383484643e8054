// DUCO-S1 Miner - Free and Open Source Software Statement
//
// This project, ducos1-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/stats/share_tally.rs
// Version: 1.0.0
//
// Process-wide accepted/rejected counters. Both counters sit behind one
// mutex so a snapshot never mixes two different moments.
//
// Tree Location:
// - src/miner/stats/share_tally.rs (shared share counters)
// - Depends on: std

use crate::core::types::ShareOutcome;
use std::fmt;
use std::sync::{Mutex, MutexGuard};

/// Consistent read of both counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TallySnapshot {
    pub accepted: u64,
    pub rejected: u64,
}

impl TallySnapshot {
    pub fn total(&self) -> u64 {
        self.accepted + self.rejected
    }
}

impl fmt::Display for TallySnapshot {
    /// `accepted/total`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.accepted, self.total())
    }
}

#[derive(Debug, Default)]
pub struct ShareTally {
    counts: Mutex<TallySnapshot>,
}

impl ShareTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_accepted(&self) -> TallySnapshot {
        let mut counts = self.lock();
        counts.accepted += 1;
        *counts
    }

    pub fn record_rejected(&self) -> TallySnapshot {
        let mut counts = self.lock();
        counts.rejected += 1;
        *counts
    }

    /// Record a verdict and return the tally right after it.
    pub fn record(&self, outcome: ShareOutcome) -> TallySnapshot {
        match outcome {
            ShareOutcome::Accepted => self.record_accepted(),
            ShareOutcome::Rejected => self.record_rejected(),
        }
    }

    pub fn snapshot(&self) -> TallySnapshot {
        *self.lock()
    }

    // Counters are plain integers, a poisoned lock still holds valid data.
    fn lock(&self) -> MutexGuard<'_, TallySnapshot> {
        self.counts.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_returns_post_update_snapshot() {
        let tally = ShareTally::new();
        assert_eq!(tally.record(ShareOutcome::Accepted), TallySnapshot { accepted: 1, rejected: 0 });
        assert_eq!(tally.record(ShareOutcome::Rejected), TallySnapshot { accepted: 1, rejected: 1 });
        assert_eq!(tally.snapshot().to_string(), "1/2");
    }

    #[test]
    fn test_empty_tally() {
        let snapshot = ShareTally::new().snapshot();
        assert_eq!(snapshot.total(), 0);
        assert_eq!(snapshot.to_string(), "0/0");
    }
}

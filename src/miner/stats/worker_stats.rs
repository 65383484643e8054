// DUCO-S1 Miner - Free and Open Source Software Statement
//
// This project, ducos1-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/stats/worker_stats.rs
// Version: 1.0.0
//
// This file implements per-worker statistics tracking for the DUCO-S1 miner,
// located in the stats subdirectory of the miner module. It monitors the
// worker's state, jobs, last hashrate and reconnects.
//
// Tree Location:
// - src/miner/stats/worker_stats.rs (per-worker statistics logic)
// - Depends on: std

use std::fmt;
use std::sync::atomic::{AtomicU8, AtomicU64, Ordering};

/// Position of a worker in its job cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum WorkerState {
    Disconnected = 0,
    Connected = 1,
    AwaitingJob = 2,
    Solving = 3,
    Reporting = 4,
}

impl WorkerState {
    fn from_u8(value: u8) -> Self {
        match value {
            1 => WorkerState::Connected,
            2 => WorkerState::AwaitingJob,
            3 => WorkerState::Solving,
            4 => WorkerState::Reporting,
            _ => WorkerState::Disconnected,
        }
    }
}

impl fmt::Display for WorkerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WorkerState::Disconnected => "disconnected",
            WorkerState::Connected => "connected",
            WorkerState::AwaitingJob => "awaiting job",
            WorkerState::Solving => "solving",
            WorkerState::Reporting => "reporting",
        };
        f.write_str(name)
    }
}

pub struct WorkerStats {
    worker_id: usize,
    state: AtomicU8,
    pub jobs_received: AtomicU64,
    pub shares_accepted: AtomicU64,
    pub shares_rejected: AtomicU64,
    pub reconnects: AtomicU64,
    // f64 bits
    last_hashrate: AtomicU64,
}

impl WorkerStats {
    /// Create a new WorkerStats instance for a specific worker
    pub fn new(worker_id: usize) -> Self {
        Self {
            worker_id,
            state: AtomicU8::new(WorkerState::Disconnected as u8),
            jobs_received: AtomicU64::new(0),
            shares_accepted: AtomicU64::new(0),
            shares_rejected: AtomicU64::new(0),
            reconnects: AtomicU64::new(0),
            last_hashrate: AtomicU64::new(0f64.to_bits()),
        }
    }

    pub fn worker_id(&self) -> usize {
        self.worker_id
    }

    pub fn set_state(&self, state: WorkerState) {
        self.state.store(state as u8, Ordering::Relaxed);
    }

    pub fn state(&self) -> WorkerState {
        WorkerState::from_u8(self.state.load(Ordering::Relaxed))
    }

    pub fn record_job(&self) {
        self.jobs_received.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a share (accepted or rejected)
    pub fn record_share(&self, accepted: bool, hashrate: f64) {
        if accepted {
            self.shares_accepted.fetch_add(1, Ordering::Relaxed);
        } else {
            self.shares_rejected.fetch_add(1, Ordering::Relaxed);
        }
        self.last_hashrate.store(hashrate.to_bits(), Ordering::Relaxed);
    }

    pub fn record_reconnect(&self) {
        self.reconnects.fetch_add(1, Ordering::Relaxed);
    }

    /// Hashrate of the most recently solved job
    pub fn get_hashrate(&self) -> f64 {
        f64::from_bits(self.last_hashrate.load(Ordering::Relaxed))
    }

    /// Get a string of share indicators (dots)
    pub fn get_share_dots(&self) -> String {
        let accepted = self.shares_accepted.load(Ordering::Relaxed);
        let rejected = self.shares_rejected.load(Ordering::Relaxed);

        let mut dots = String::new();
        for _ in 0..accepted.min(5) {
            dots.push('●');
        }
        for _ in 0..rejected.min(5) {
            dots.push('○');
        }
        dots
    }
}


// Changelog:
// - v1.0.0 (2026-10-17): Per-worker DUCO-S1 statistics.
//   - Tracks the worker state machine position alongside share counts.
//   - Hashrate is the last job's nonce/elapsed, stored as f64 bits.

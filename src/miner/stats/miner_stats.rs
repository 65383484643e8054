// DUCO-S1 Miner - Free and Open Source Software Statement
//
// This project, ducos1-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/stats/miner_stats.rs
// Version: 1.0.0
//
// This file implements miner-wide statistics for the DUCO-S1 miner, located in
// the stats subdirectory of the miner module. It owns the shared share tally
// and the per-worker stats, and renders the periodic dashboard.
//
// Tree Location:
// - src/miner/stats/miner_stats.rs (miner-wide statistics logic)
// - Depends on: std, share_tally, worker_stats

use super::share_tally::ShareTally;
use super::worker_stats::WorkerStats;
use crate::utils::format::FormatUtils;
use log::info;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Instant;

const LOG_TARGET: &str = "ducos1::miner::stats";

pub struct MinerStats {
    pub tally: Arc<ShareTally>,
    pub worker_stats: Vec<Arc<WorkerStats>>,
    start_time: Instant,
}

impl MinerStats {
    pub fn new(num_workers: usize) -> Self {
        let worker_stats = (0..num_workers).map(|i| Arc::new(WorkerStats::new(i))).collect();

        Self {
            tally: Arc::new(ShareTally::new()),
            worker_stats,
            start_time: Instant::now(),
        }
    }

    /// Sum of each worker's last reported hashrate
    pub fn get_total_hashrate(&self) -> f64 {
        self.worker_stats.iter().map(|w| w.get_hashrate()).sum()
    }

    pub fn get_total_reconnects(&self) -> u64 {
        self.worker_stats
            .iter()
            .map(|w| w.reconnects.load(Ordering::Relaxed))
            .sum()
    }

    /// Display a text-based dashboard with miner statistics
    pub fn display_dashboard(&self) {
        let snapshot = self.tally.snapshot();

        info!(target: LOG_TARGET, "📊 MINER DASHBOARD");
        info!(target: LOG_TARGET, "├─ Hashrate: {}", FormatUtils::format_hashrate(self.get_total_hashrate()));
        info!(target: LOG_TARGET,
            "├─ Shares: {} ({} accepted)",
            snapshot,
            FormatUtils::format_acceptance(snapshot.accepted, snapshot.total())
        );
        info!(target: LOG_TARGET, "├─ Rejected Shares: {}", snapshot.rejected);
        info!(target: LOG_TARGET, "├─ Reconnects: {}", self.get_total_reconnects());
        info!(target: LOG_TARGET, "├─ Session Time: {}", FormatUtils::format_duration(self.start_time.elapsed()));
        for worker in &self.worker_stats {
            info!(target: LOG_TARGET,
                "├─ Worker {}: {} | {} | jobs {} {}",
                worker.worker_id(),
                worker.state(),
                FormatUtils::format_hashrate(worker.get_hashrate()),
                worker.jobs_received.load(Ordering::Relaxed),
                worker.get_share_dots()
            );
        }
        info!(target: LOG_TARGET, "└─ Workers: {}", self.worker_stats.len());
    }
}

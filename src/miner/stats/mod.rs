// DUCO-S1 Miner - Free and Open Source Software Statement
//
// This project, ducos1-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/stats/mod.rs
// Version: 1.0.0
//
// This file is the module declaration for the statistics tracking functionality
// of the DUCO-S1 miner, located in the stats subdirectory of the miner module.
//
// Tree Location:
// - src/miner/stats/mod.rs (stats module entry point)
// - Submodules: miner_stats, share_tally, worker_stats

pub mod miner_stats;
pub mod share_tally;
pub mod worker_stats;

// Re-export key types for convenience
pub use miner_stats::MinerStats;
pub use share_tally::{ShareTally, TallySnapshot};
pub use worker_stats::{WorkerState, WorkerStats};

// DUCO-S1 Miner - Free and Open Source Software Statement
//
// This project, ducos1-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/mod.rs
// Version: 2.0.0
//
// This file is the module declaration for the miner functionality of the DUCO-S1
// miner, located in the miner subdirectory. It declares submodules and re-exports
// key types for use throughout the project.
//
// Tree Location:
// - src/miner/mod.rs (miner module entry point)
// - Submodules: restart, shutdown, stats, supervisor, worker

pub mod restart;
pub mod shutdown;
pub mod stats;
pub mod supervisor;
pub mod worker;

// Re-export key types for convenience
pub use shutdown::Shutdown;
pub use stats::{MinerStats, ShareTally, TallySnapshot, WorkerState, WorkerStats};
pub use supervisor::{MinerConfig, MinerSupervisor};
pub use worker::{RestartMode, Worker, WorkerSettings};

// Changelog:
// - v2.0.0 (2026-10-17): DUCO-S1 worker pool.
//   - cpu and gpu submodules replaced by worker and supervisor.
//   - Added shutdown token and process restart helper.

// DUCO-S1 Miner - Free and Open Source Software Statement
//
// This project, ducos1-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/lib.rs
// Version: 1.0.0
//
// This file serves as the main library entry point for the DUCO-S1 miner,
// located at the root of the source tree. It exports all public modules
// and types that other crates or binaries can use.
//
// Tree Location:
// - src/lib.rs (root library file)
// - Exports modules: core, error, miner, pool, utils

pub mod core;
pub mod error;
pub mod miner;
pub mod pool;
pub mod utils;

// Re-export commonly used types at the crate root for convenience
pub use crate::core::{ducos1, Args, Job, ShareOutcome, SolveResult};
pub use crate::error::{LocatorError, PoolError, WorkerError};
pub use crate::miner::{MinerConfig, MinerSupervisor, ShareTally, Shutdown};
pub use crate::pool::{PoolConnection, PoolLocator};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

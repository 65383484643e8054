// DUCO-S1 Miner - Free and Open Source Software Statement
//
// This project, ducos1-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/mod.rs
// Version: 1.0.0
//
// This file is the module declaration for the core functionality of the DUCO-S1
// miner, located in the core subdirectory. It declares submodules and re-exports
// key types for use throughout the project.

pub mod ducos1;
pub mod types;

// Re-export the most commonly used items
pub use ducos1::{ducos1_hash, max_nonce, solve, solve_until};
pub use types::{Args, DifficultyLevel, Job, ShareOutcome, SolveResult, WorkerIdentity};

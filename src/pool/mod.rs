// DUCO-S1 Miner - Free and Open Source Software Statement
//
// This project, ducos1-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/pool/mod.rs
// Version: 1.0.0
//
// This file is the module declaration for the pool communication functionality
// of the DUCO-S1 miner, located in the pool subdirectory. It declares submodules
// and re-exports key types for use throughout the project.
//
// Tree Location:
// - src/pool/mod.rs (pool module entry point)
// - Submodules: client, locator, messages, protocol

pub mod client;
pub mod locator;
pub mod messages;
pub mod protocol;

// Re-export key types for convenience
pub use client::{ConnectionTimeouts, PoolConnection};
pub use locator::{LocatorConfig, PoolEndpoint, PoolLocator};

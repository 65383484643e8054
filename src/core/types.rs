// DUCO-S1 Miner - Free and Open Source Software Statement
//
// This project, ducos1-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/types.rs
// Version: 1.0.0
//
// This file defines core data structures for the DUCO-S1 miner, located in the
// core subdirectory. It includes the command-line arguments, pool jobs, solve
// results, share outcomes and worker identities.
//
// Tree Location:
// - src/core/types.rs (core data structures)
// - Depends on: clap, crate::pool, crate::miner

use crate::error::PoolError;
use crate::miner::supervisor::{MinerConfig, RestartMode};
use crate::miner::worker::WorkerSettings;
use crate::pool::client::ConnectionTimeouts;
use crate::pool::locator::{parse_pool_address, LocatorConfig, PoolEndpoint, PoolLocator};
use crate::utils::user_agent::client_tag;
use clap::{Parser, ValueEnum};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Difficulty tier requested from the pool with every job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DifficultyLevel {
    #[default]
    Low,
    Medium,
}

impl DifficultyLevel {
    /// Token sent in the `JOB` request.
    pub fn as_wire(self) -> &'static str {
        match self {
            DifficultyLevel::Low => "LOW",
            DifficultyLevel::Medium => "MEDIUM",
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// One unit of work as received from the pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub seed: String,
    pub target_digest: String,
    pub difficulty_raw: String,
}

impl Job {
    pub fn new(
        seed: impl Into<String>,
        target_digest: impl Into<String>,
        difficulty_raw: impl Into<String>,
    ) -> Self {
        Self {
            seed: seed.into(),
            target_digest: target_digest.into(),
            difficulty_raw: difficulty_raw.into(),
        }
    }

    /// Server-assigned difficulty as an integer.
    pub fn difficulty(&self) -> Result<u64, PoolError> {
        self.difficulty_raw
            .trim()
            .parse::<u64>()
            .map_err(|_| PoolError::InvalidDifficulty(self.difficulty_raw.clone()))
    }
}

/// Winning nonce and the time it took to reach it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveResult {
    pub nonce: u64,
    pub elapsed: Duration,
}

impl SolveResult {
    /// Hashes per second, `0.0` when no measurable time elapsed.
    pub fn hashrate(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.nonce as f64 / secs
        } else {
            0.0
        }
    }
}

/// Pool verdict for one submitted share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Accepted,
    Rejected,
}

impl ShareOutcome {
    /// Only the literal `GOOD` is an acceptance.
    pub fn from_verdict(verdict: &str) -> Self {
        if verdict == "GOOD" {
            ShareOutcome::Accepted
        } else {
            ShareOutcome::Rejected
        }
    }

    pub fn is_accepted(self) -> bool {
        self == ShareOutcome::Accepted
    }
}

/// Fixed per-worker credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerIdentity {
    pub index: usize,
    pub username: String,
    pub mining_key: String,
    pub difficulty: DifficultyLevel,
}

/// Command-line arguments for the DUCO-S1 miner
#[derive(Parser, Debug, Clone)]
#[command(
    name = "ducos1-miner",
    version,
    about = "DUCO-S1 pool miner with single-worker and multi-worker modes",
    long_about = "Connects to a DUCO-S1 mining pool, requests jobs over the line-based\n\
                  pool protocol, solves them with a SHA-1 preimage search and reports\n\
                  the results back.\n\n\
                  Examples:\n\
                    Discovery:   ducos1-miner -u alice -k secret\n\
                    Static pool: ducos1-miner -u alice -o 51.15.127.80:2811 --workers 4\n\
                    All CPUs:    ducos1-miner -u alice --workers 0 --difficulty medium"
)]
pub struct Args {
    /// Account name the shares are credited to
    #[arg(short = 'u', long, env = "DUCO_USERNAME", value_name = "NAME")]
    pub username: String,

    /// Mining key configured for the account (empty if none)
    #[arg(short = 'k', long, env = "DUCO_MINING_KEY", default_value = "", hide_env_values = true)]
    pub mining_key: String,

    /// Difficulty tier requested with each job
    #[arg(short = 'd', long, env = "DUCO_DIFFICULTY", value_enum, default_value_t = DifficultyLevel::Low)]
    pub difficulty: DifficultyLevel,

    /// Static pool address; when absent the pool is discovered over HTTP
    #[arg(short = 'o', long, env = "DUCO_POOL", value_name = "HOST:PORT")]
    pub pool: Option<String>,

    /// Discovery endpoint queried when no static pool is given
    #[arg(long, default_value = "https://server.duinocoin.com/getPool", value_name = "URL")]
    pub discovery_url: String,

    /// Pool used once discovery has exhausted its retries
    #[arg(long, default_value = "server.duinocoin.com:2813", value_name = "HOST:PORT")]
    pub fallback_pool: String,

    /// Discovery attempts before falling back
    #[arg(long, default_value = "5", value_name = "COUNT")]
    pub discovery_retries: u32,

    /// Pause between discovery attempts
    #[arg(long, default_value = "15", value_name = "SECS")]
    pub discovery_delay_secs: u64,

    /// Number of parallel workers (0 = one per logical CPU)
    #[arg(short = 't', long, default_value = "1", value_name = "COUNT")]
    pub workers: usize,

    /// Client identification sent with every result
    #[arg(long, default_value_t = client_tag(), value_name = "TAG")]
    pub client_tag: String,

    /// Backoff before a failed worker reconnects
    #[arg(long, default_value = "5", value_name = "SECS")]
    pub retry_delay_secs: u64,

    /// TCP connect timeout
    #[arg(long, default_value = "10", value_name = "SECS")]
    pub connect_timeout_secs: u64,

    /// Read/write timeout for every protocol step
    #[arg(long, default_value = "60", value_name = "SECS")]
    pub io_timeout_secs: u64,

    /// Dashboard interval (0 disables the dashboard)
    #[arg(long, default_value = "60", value_name = "SECS")]
    pub stats_interval_secs: u64,

    /// Re-exec the whole process instead of restarting the worker (single worker, unix)
    #[arg(long, default_value = "false")]
    pub restart_process: bool,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "info", value_name = "LEVEL")]
    pub log_level: log::LevelFilter,

    /// Also write the log to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Worker count with `0` expanded to the logical CPU count
    pub fn worker_count(&self) -> usize {
        if self.workers == 0 {
            num_cpus::get()
        } else {
            self.workers
        }
    }

    /// Validate command-line arguments
    pub fn validate(&self) -> Result<(), String> {
        if self.username.trim().is_empty() {
            return Err("Username must not be empty".to_string());
        }
        if let Some(pool) = &self.pool {
            if parse_pool_address(pool).is_none() {
                return Err(format!("Invalid pool address '{}', expected HOST:PORT", pool));
            }
        }
        if parse_pool_address(&self.fallback_pool).is_none() {
            return Err(format!(
                "Invalid fallback pool '{}', expected HOST:PORT",
                self.fallback_pool
            ));
        }
        if self.retry_delay_secs == 0 {
            return Err("Retry delay must be at least 1 second".to_string());
        }
        if self.connect_timeout_secs == 0 || self.io_timeout_secs == 0 {
            return Err("Timeouts must be at least 1 second".to_string());
        }
        if self.restart_process && self.worker_count() > 1 {
            return Err("--restart-process is only supported with a single worker".to_string());
        }
        if self.client_tag.contains(',') {
            return Err("Client tag must not contain commas".to_string());
        }
        Ok(())
    }

    /// Build the runtime configuration. Call [`Args::validate`] first.
    pub fn into_config(self) -> crate::Result<MinerConfig> {
        let endpoint = match &self.pool {
            Some(pool) => {
                let (host, port) = parse_pool_address(pool)
                    .ok_or_else(|| format!("Invalid pool address '{}'", pool))?;
                PoolEndpoint::Static { host, port }
            }
            None => {
                let (fallback_host, fallback_port) = parse_pool_address(&self.fallback_pool)
                    .ok_or_else(|| format!("Invalid fallback pool '{}'", self.fallback_pool))?;
                PoolEndpoint::Discovery(PoolLocator::new(LocatorConfig {
                    url: self.discovery_url.clone(),
                    retries: self.discovery_retries,
                    retry_delay: Duration::from_secs(self.discovery_delay_secs),
                    fallback_host,
                    fallback_port,
                })?)
            }
        };

        let restart_mode = if self.restart_process {
            RestartMode::Process
        } else {
            RestartMode::Worker
        };

        Ok(MinerConfig {
            username: self.username.clone(),
            mining_key: self.mining_key.clone(),
            difficulty: self.difficulty,
            workers: self.worker_count(),
            endpoint,
            settings: WorkerSettings {
                client_tag: self.client_tag,
                retry_delay: Duration::from_secs(self.retry_delay_secs),
                timeouts: ConnectionTimeouts {
                    connect: Duration::from_secs(self.connect_timeout_secs),
                    io: Duration::from_secs(self.io_timeout_secs),
                },
                restart_mode,
            },
            stats_interval: Duration::from_secs(self.stats_interval_secs),
        })
    }
}


// Changelog:
// - v1.0.0 (2026-10-17): Initial DUCO-S1 types.
//   - Job, SolveResult, ShareOutcome, DifficultyLevel, WorkerIdentity.
//   - Args with env fallbacks for credentials and into_config() for the supervisor.

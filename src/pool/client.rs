// DUCO-S1 Miner - Free and Open Source Software Statement
//
// This project, ducos1-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/pool/client.rs
// Version: 1.0.0
//
// This file implements the TCP client for communicating with the mining pool,
// located in the pool subdirectory. One PoolConnection owns one socket and
// runs the strictly synchronous request/response exchange of the protocol.
// Failures are returned to the caller and never retried here.
//
// Tree Location:
// - src/pool/client.rs (pool TCP client logic)
// - Depends on: tokio, crate::pool::{protocol, messages}

use crate::core::types::{DifficultyLevel, Job, ShareOutcome};
use crate::error::PoolError;
use crate::pool::messages::{parse_job_line, parse_verdict, strip_line_ending};
use crate::pool::protocol::Ducos1Protocol;
use log::debug;
use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{lookup_host, TcpStream};
use tokio::time::timeout;

const LOG_TARGET: &str = "ducos1::pool::client";

/// Maximum banner size read after connecting.
pub const BANNER_READ_LIMIT: usize = 100;
/// Maximum size of a job or verdict line.
pub const LINE_READ_LIMIT: usize = 1024;

/// Per-step socket timeouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionTimeouts {
    pub connect: Duration,
    pub io: Duration,
}

impl Default for ConnectionTimeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(10),
            io: Duration::from_secs(60),
        }
    }
}

/// A live connection to one pool endpoint
#[derive(Debug)]
pub struct PoolConnection {
    stream: TcpStream,
    peer: SocketAddr,
    server_version: String,
    timeouts: ConnectionTimeouts,
}

impl PoolConnection {
    /// Resolve `host`, connect, and read the version banner.
    pub async fn connect(host: &str, port: u16, timeouts: ConnectionTimeouts) -> Result<Self, PoolError> {
        let address = format!("{}:{}", host, port);
        let peer = Self::resolve_pool_address(&address).await?;

        let stream = with_timeout("connecting", timeouts.connect, TcpStream::connect(peer))
            .await?
            .map_err(|source| PoolError::Connect {
                address: address.clone(),
                source,
            })?;
        // Disable Nagle's algorithm, every message is a single small write
        stream
            .set_nodelay(true)
            .map_err(|source| PoolError::Io { step: "configuring socket", source })?;

        let mut connection = Self {
            stream,
            peer,
            server_version: String::new(),
            timeouts,
        };

        let banner = connection.recv("reading server version", BANNER_READ_LIMIT).await?;
        connection.server_version = strip_line_ending(&banner).to_string();
        debug!(target: LOG_TARGET, "Connected to {} (server version {})", peer, connection.server_version);

        Ok(connection)
    }

    /// Resolve pool address from either IP:port or domain:port format
    async fn resolve_pool_address(pool_str: &str) -> Result<SocketAddr, PoolError> {
        if let Ok(addr) = pool_str.parse::<SocketAddr>() {
            return Ok(addr);
        }

        let mut addrs = lookup_host(pool_str)
            .await
            .map_err(|_| PoolError::Resolve(pool_str.to_string()))?;
        addrs.next().ok_or_else(|| PoolError::Resolve(pool_str.to_string()))
    }

    pub fn server_version(&self) -> &str {
        &self.server_version
    }

    pub fn peer(&self) -> SocketAddr {
        self.peer
    }

    /// Ask for a job and parse the reply.
    pub async fn request_job(
        &mut self,
        username: &str,
        difficulty: DifficultyLevel,
        mining_key: &str,
    ) -> Result<Job, PoolError> {
        let request = Ducos1Protocol::create_job_request(username, difficulty, mining_key);
        self.send("requesting job", &request).await?;

        let line = self.recv("reading job", LINE_READ_LIMIT).await?;
        parse_job_line(&line)
    }

    /// Submit a result and read the verdict.
    pub async fn submit_result(
        &mut self,
        nonce: u64,
        hashrate: f64,
        client_tag: &str,
    ) -> Result<ShareOutcome, PoolError> {
        let submission = Ducos1Protocol::create_result_submission(nonce, hashrate, client_tag);
        self.send("submitting result", &submission).await?;

        let line = self.recv("reading verdict", LINE_READ_LIMIT).await?;
        debug!(target: LOG_TARGET, "Verdict from {}: {:?}", self.peer, strip_line_ending(&line));
        Ok(parse_verdict(&line))
    }

    async fn send(&mut self, step: &'static str, message: &str) -> Result<(), PoolError> {
        with_timeout(step, self.timeouts.io, self.stream.write_all(message.as_bytes()))
            .await?
            .map_err(|source| PoolError::Io { step, source })
    }

    /// One bounded read. An empty read means the pool closed the socket.
    async fn recv(&mut self, step: &'static str, limit: usize) -> Result<String, PoolError> {
        let mut buf = vec![0u8; limit];
        let read = with_timeout(step, self.timeouts.io, self.stream.read(&mut buf))
            .await?
            .map_err(|source| PoolError::Io { step, source })?;

        if read == 0 {
            return Err(PoolError::Closed(step));
        }
        Ok(String::from_utf8_lossy(&buf[..read]).into_owned())
    }
}

async fn with_timeout<F: Future>(step: &'static str, limit: Duration, fut: F) -> Result<F::Output, PoolError> {
    timeout(limit, fut)
        .await
        .map_err(|_| PoolError::Timeout { step, timeout: limit })
}

// Changelog:
// - v1.0.0 (2026-10-17): Initial DUCO-S1 pool connection.
//   - Kept the IP-or-hostname resolution and TCP_NODELAY setup.
//   - Added banner read, job request, result submission and per-step timeouts.

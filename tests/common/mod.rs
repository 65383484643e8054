// DUCO-S1 Miner - Free and Open Source Software Statement
//
// This project, ducos1-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/common/mod.rs
// Version: 1.0.0
//
// Scripted in-process pool server shared by the integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

pub const EOF_MARKER: &str = "<eof>";

/// One job exchange. `verdict: None` means the pool expects the client to hang up.
#[derive(Debug, Clone)]
pub struct Round {
    pub job: String,
    pub verdict: Option<String>,
}

impl Round {
    pub fn answered(job: &str, verdict: &str) -> Self {
        Self {
            job: job.to_string(),
            verdict: Some(verdict.to_string()),
        }
    }

    pub fn abandoned(job: &str) -> Self {
        Self {
            job: job.to_string(),
            verdict: None,
        }
    }
}

/// Script for one accepted connection.
#[derive(Debug, Clone)]
pub struct Session {
    pub banner: String,
    pub rounds: Vec<Round>,
}

impl Session {
    pub fn new(rounds: Vec<Round>) -> Self {
        Self {
            banner: "3.0\n".to_string(),
            rounds,
        }
    }
}

pub async fn read_message(stream: &mut TcpStream) -> String {
    let mut buf = vec![0u8; 1024];
    match stream.read(&mut buf).await {
        Ok(0) | Err(_) => EOF_MARKER.to_string(),
        Ok(n) => String::from_utf8_lossy(&buf[..n]).into_owned(),
    }
}

/// Serve one scripted session and return every message the client sent.
pub async fn serve_session(stream: &mut TcpStream, session: &Session) -> Vec<String> {
    let mut transcript = Vec::new();
    stream.write_all(session.banner.as_bytes()).await.unwrap();

    for round in &session.rounds {
        let request = read_message(stream).await;
        let closed = request == EOF_MARKER;
        transcript.push(request);
        if closed {
            return transcript;
        }
        stream.write_all(round.job.as_bytes()).await.unwrap();

        let submission = read_message(stream).await;
        let closed = submission == EOF_MARKER;
        transcript.push(submission);
        if closed {
            return transcript;
        }
        if let Some(verdict) = &round.verdict {
            stream.write_all(verdict.as_bytes()).await.unwrap();
        }
    }
    transcript
}

/// Accept one connection per session in order. The last connection is held
/// open until the client hangs up.
pub fn spawn_pool(listener: TcpListener, sessions: Vec<Session>) -> JoinHandle<Vec<Vec<String>>> {
    tokio::spawn(async move {
        let mut transcripts = Vec::new();
        let count = sessions.len();
        for (i, session) in sessions.iter().enumerate() {
            let (mut stream, _) = listener.accept().await.unwrap();
            let transcript = serve_session(&mut stream, session).await;
            transcripts.push(transcript);
            if i + 1 == count {
                while read_message(&mut stream).await != EOF_MARKER {}
            }
        }
        transcripts
    })
}

pub async fn local_listener() -> (TcpListener, SocketAddr) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    (listener, addr)
}

/// Poll `condition` every 10ms until it holds or `limit` passes.
pub async fn wait_until<F: Fn() -> bool>(limit: Duration, condition: F) -> bool {
    let deadline = tokio::time::Instant::now() + limit;
    while tokio::time::Instant::now() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}

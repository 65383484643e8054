// DUCO-S1 Miner - Free and Open Source Software Statement
//
// This project, ducos1-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/pool_test.rs
// Version: 1.0.0
//
// PoolConnection against an in-process pool: banner, job and verdict
// exchange, and the failure cases a worker has to recover from.

mod common;

#[cfg(test)]
mod tests {
    use super::common::{local_listener, read_message, serve_session, spawn_pool, Round, Session};
    use ducos1_miner::core::types::{DifficultyLevel, Job, ShareOutcome};
    use ducos1_miner::error::PoolError;
    use ducos1_miner::pool::{ConnectionTimeouts, PoolConnection};
    use std::time::Duration;
    use tokio::io::AsyncWriteExt;

    fn timeouts() -> ConnectionTimeouts {
        ConnectionTimeouts {
            connect: Duration::from_secs(2),
            io: Duration::from_secs(2),
        }
    }

    #[tokio::test]
    async fn test_full_exchange() {
        let (listener, addr) = local_listener().await;
        let pool = spawn_pool(
            listener,
            vec![Session::new(vec![
                Round::answered("seedval,digestval,5\n", "GOOD\n"),
                Round::answered("seed2,digest2,7,extra\n", "BAD\n"),
            ])],
        );

        let mut connection = PoolConnection::connect("127.0.0.1", addr.port(), timeouts()).await.unwrap();
        assert_eq!(connection.server_version(), "3.0");

        let job = connection.request_job("alice", DifficultyLevel::Low, "key1").await.unwrap();
        assert_eq!(job, Job::new("seedval", "digestval", "5"));
        let verdict = connection.submit_result(42, 1234.5, "tag_v1").await.unwrap();
        assert_eq!(verdict, ShareOutcome::Accepted);

        let job = connection.request_job("alice", DifficultyLevel::Medium, "key1").await.unwrap();
        assert_eq!(job, Job::new("seed2", "digest2", "7"));
        let verdict = connection.submit_result(7, 0.0, "tag_v1").await.unwrap();
        assert_eq!(verdict, ShareOutcome::Rejected);

        drop(connection);
        let transcripts = pool.await.unwrap();
        assert_eq!(
            transcripts[0],
            vec![
                "JOB,alice,LOW,key1".to_string(),
                "42,1234.5,tag_v1".to_string(),
                "JOB,alice,MEDIUM,key1".to_string(),
                "7,0,tag_v1".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_short_job_line_is_protocol_failure() {
        let (listener, addr) = local_listener().await;
        let _pool = spawn_pool(listener, vec![Session::new(vec![Round::answered("seedval,digestval\n", "GOOD\n")])]);

        let mut connection = PoolConnection::connect("127.0.0.1", addr.port(), timeouts()).await.unwrap();
        let err = connection.request_job("alice", DifficultyLevel::Low, "").await.unwrap_err();
        assert!(matches!(err, PoolError::MalformedJob { fields: 2, .. }), "got {:?}", err);
        assert!(!err.is_connect_failure());
    }

    #[tokio::test]
    async fn test_pool_hangup_is_reported() {
        let (listener, addr) = local_listener().await;
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            stream.write_all(b"3.0\n").await.unwrap();
            let _ = read_message(&mut stream).await;
            // Drop without answering the job request.
        });

        let mut connection = PoolConnection::connect("127.0.0.1", addr.port(), timeouts()).await.unwrap();
        let err = connection.request_job("alice", DifficultyLevel::Low, "").await.unwrap_err();
        assert!(matches!(err, PoolError::Closed("reading job")), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_silent_pool_times_out() {
        let (listener, addr) = local_listener().await;
        let _holder = tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
            drop(stream);
        });

        let short = ConnectionTimeouts {
            connect: Duration::from_secs(2),
            io: Duration::from_millis(100),
        };
        let err = PoolConnection::connect("127.0.0.1", addr.port(), short).await.unwrap_err();
        assert!(
            matches!(err, PoolError::Timeout { step: "reading server version", .. }),
            "got {:?}",
            err
        );
    }

    #[tokio::test]
    async fn test_refused_connection_is_connect_failure() {
        let (listener, addr) = local_listener().await;
        drop(listener);

        let err = PoolConnection::connect("127.0.0.1", addr.port(), timeouts()).await.unwrap_err();
        assert!(err.is_connect_failure(), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_serve_session_records_banner_exchange() {
        let (listener, addr) = local_listener().await;
        let server = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            serve_session(&mut stream, &Session::new(vec![Round::answered("a,b,1\n", "GOOD")])).await
        });

        let mut connection = PoolConnection::connect("127.0.0.1", addr.port(), timeouts()).await.unwrap();
        connection.request_job("bob", DifficultyLevel::Low, "k").await.unwrap();
        assert_eq!(connection.submit_result(1, 10.0, "t").await.unwrap(), ShareOutcome::Accepted);

        let transcript = server.await.unwrap();
        assert_eq!(transcript, vec!["JOB,bob,LOW,k".to_string(), "1,10,t".to_string()]);
    }
}

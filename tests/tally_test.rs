// DUCO-S1 Miner - Free and Open Source Software Statement
//
// This project, ducos1-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/tally_test.rs
// Version: 1.0.0
//
// Concurrent stress tests for the shared share tally.

#[cfg(test)]
mod tests {
    use ducos1_miner::miner::{ShareTally, TallySnapshot};
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_concurrent_increments_are_not_lost() {
        let tally = Arc::new(ShareTally::new());
        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let tally = Arc::clone(&tally);
                thread::spawn(move || {
                    for i in 0..1000 {
                        if (worker + i) % 3 == 0 {
                            tally.record_rejected();
                        } else {
                            tally.record_accepted();
                        }
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let expected_rejected = (0..8)
            .flat_map(|w| (0..1000).map(move |i| (w + i) % 3 == 0))
            .filter(|rejected| *rejected)
            .count() as u64;
        let snapshot = tally.snapshot();
        assert_eq!(snapshot.total(), 8000);
        assert_eq!(snapshot.rejected, expected_rejected);
        assert_eq!(snapshot.accepted, 8000 - expected_rejected);
    }

    #[test]
    fn test_snapshots_never_go_backwards() {
        let tally = Arc::new(ShareTally::new());
        let writer = {
            let tally = Arc::clone(&tally);
            thread::spawn(move || {
                for _ in 0..5000 {
                    tally.record_accepted();
                    tally.record_rejected();
                }
            })
        };

        let mut previous = TallySnapshot::default();
        while !writer.is_finished() {
            let current = tally.snapshot();
            assert!(current.accepted >= previous.accepted);
            assert!(current.rejected >= previous.rejected);
            // Each rejected follows its accepted within one writer.
            assert!(current.accepted - current.rejected <= 1);
            previous = current;
        }
        writer.join().unwrap();

        assert_eq!(tally.snapshot(), TallySnapshot { accepted: 5000, rejected: 5000 });
    }
}

// DUCO-S1 Miner - Free and Open Source Software Statement
//
// This project, ducos1-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/pool/messages.rs
// Version: 1.0.0
//
// This file parses lines received from the pool: job lines and share
// verdicts.
//
// Tree Location:
// - src/pool/messages.rs (incoming line parsing)
// - Depends on: crate::core::types, crate::error

use crate::core::types::{Job, ShareOutcome};
use crate::error::PoolError;
use log::warn;

const LOG_TARGET: &str = "ducos1::pool::messages";

/// Strip one trailing line terminator (`\n` or `\r\n`).
pub fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Parse `<seed>,<target digest>,<difficulty>[,...]`. Extra fields are ignored.
pub fn parse_job_line(raw: &str) -> Result<Job, PoolError> {
    let line = strip_line_ending(raw);
    let fields: Vec<&str> = line.split(',').collect();

    if fields.len() < 3 {
        warn!(target: LOG_TARGET, "Job line with {} fields: {:?}", fields.len(), line);
        return Err(PoolError::MalformedJob {
            line: line.to_string(),
            fields: fields.len(),
        });
    }

    Ok(Job::new(fields[0], fields[1], fields[2]))
}

/// Parse the pool's answer to a submitted result.
pub fn parse_verdict(raw: &str) -> ShareOutcome {
    ShareOutcome::from_verdict(strip_line_ending(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_job_line() {
        let job = parse_job_line("seedval,digestval,5\n").unwrap();
        assert_eq!(job, Job::new("seedval", "digestval", "5"));
    }

    #[test]
    fn test_parse_job_line_ignores_extra_fields() {
        let job = parse_job_line("a,b,7,extra,more\r\n").unwrap();
        assert_eq!(job, Job::new("a", "b", "7"));
    }

    #[test]
    fn test_short_job_line_is_protocol_error() {
        assert!(matches!(
            parse_job_line("seedval,digestval\n"),
            Err(PoolError::MalformedJob { fields: 2, .. })
        ));
        assert!(matches!(
            parse_job_line(""),
            Err(PoolError::MalformedJob { fields: 1, .. })
        ));
    }

    #[test]
    fn test_parse_verdict() {
        assert_eq!(parse_verdict("GOOD\n"), ShareOutcome::Accepted);
        assert_eq!(parse_verdict("GOOD"), ShareOutcome::Accepted);
        assert_eq!(parse_verdict("BAD\n"), ShareOutcome::Rejected);
        assert_eq!(parse_verdict("BAD,Incorrect result\n"), ShareOutcome::Rejected);
        assert_eq!(parse_verdict(""), ShareOutcome::Rejected);
    }
}

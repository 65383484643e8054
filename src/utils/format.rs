// DUCO-S1 Miner - Free and Open Source Software Statement
//
// This project, ducos1-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/format.rs
// Version: 1.1.0
//
// This file provides utility functions for formatting statistics in the DUCO-S1
// miner, located in the utils subdirectory. It formats hashrate, duration and
// share ratios for consistent output in logs and the dashboard.
//
// Tree Location:
// - src/utils/format.rs (formatting utilities)
// - Depends on: std

use std::time::Duration;

/// Utility functions for formatting miner statistics
pub struct FormatUtils;

impl FormatUtils {
    /// Format hashrate in appropriate units (H/s, kH/s, MH/s)
    pub fn format_hashrate(hashrate: f64) -> String {
        if hashrate >= 1_000_000.0 {
            format!("{:.2} MH/s", hashrate / 1_000_000.0)
        } else if hashrate >= 1_000.0 {
            format!("{:.2} kH/s", hashrate / 1_000.0)
        } else {
            format!("{:.2} H/s", hashrate)
        }
    }

    /// Whole kH/s, as shown on share lines
    pub fn format_khs(hashrate: f64) -> String {
        format!("{} kH/s", (hashrate / 1_000.0) as u64)
    }

    /// Format duration for human-readable output (seconds, minutes, hours)
    pub fn format_duration(duration: Duration) -> String {
        let secs = duration.as_secs();
        if secs < 60 {
            format!("{}s", secs)
        } else if secs < 3600 {
            format!("{}m {}s", secs / 60, secs % 60)
        } else {
            format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
        }
    }

    /// Acceptance percentage, 0 when nothing was submitted
    pub fn format_acceptance(accepted: u64, total: u64) -> String {
        if total == 0 {
            "0.0%".to_string()
        } else {
            format!("{:.1}%", accepted as f64 / total as f64 * 100.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hashrate_units() {
        assert_eq!(FormatUtils::format_hashrate(950.0), "950.00 H/s");
        assert_eq!(FormatUtils::format_hashrate(12_500.0), "12.50 kH/s");
        assert_eq!(FormatUtils::format_hashrate(3_000_000.0), "3.00 MH/s");
    }

    #[test]
    fn test_format_khs_truncates() {
        assert_eq!(FormatUtils::format_khs(1_999.0), "1 kH/s");
        assert_eq!(FormatUtils::format_khs(0.0), "0 kH/s");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(FormatUtils::format_duration(Duration::from_secs(42)), "42s");
        assert_eq!(FormatUtils::format_duration(Duration::from_secs(125)), "2m 5s");
        assert_eq!(FormatUtils::format_duration(Duration::from_secs(7260)), "2h 1m");
    }

    #[test]
    fn test_format_acceptance() {
        assert_eq!(FormatUtils::format_acceptance(0, 0), "0.0%");
        assert_eq!(FormatUtils::format_acceptance(1, 2), "50.0%");
    }
}

// Changelog:
// - v1.1.0 (2026-10-17): DUCO-S1 formatting.
//   - Added whole-kH/s share formatting and acceptance percentage.
//   - Dropped GH/s range and number suffixes.

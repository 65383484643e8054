// DUCO-S1 Miner - Free and Open Source Software Statement
//
// This project, ducos1-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/restart.rs
// Version: 1.0.0
//
// Whole-process restart: replace the running image with the same executable
// and arguments. Only returns if the exec itself failed.

use log::warn;
use std::io;
use std::process::Command;

const LOG_TARGET: &str = "ducos1::miner::restart";

/// The command that starts this executable again with the same arguments.
pub fn restart_command() -> io::Result<Command> {
    let exe = std::env::current_exe()?;
    let mut command = Command::new(exe);
    command.args(std::env::args_os().skip(1));
    Ok(command)
}

#[cfg(unix)]
pub fn reexec_current_process() -> io::Error {
    use std::os::unix::process::CommandExt;

    let mut command = match restart_command() {
        Ok(command) => command,
        Err(e) => return e,
    };
    warn!(target: LOG_TARGET, "Restarting process {}", command.get_program().to_string_lossy());
    command.exec()
}

#[cfg(not(unix))]
pub fn reexec_current_process() -> io::Error {
    warn!(target: LOG_TARGET, "Process restart requested on a platform without exec");
    io::Error::new(io::ErrorKind::Unsupported, "process re-exec is only available on unix")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restart_command_repeats_invocation() {
        let command = restart_command().unwrap();
        assert_eq!(command.get_program(), std::env::current_exe().unwrap().as_os_str());

        let expected: Vec<_> = std::env::args_os().skip(1).collect();
        let actual: Vec<_> = command.get_args().map(|arg| arg.to_os_string()).collect();
        assert_eq!(actual, expected);
    }
}

//! Process runner capability.
//! The subsystem only ever needs an exit status and the captured standard
//! error of a child, so that is all the trait exposes. Tests substitute a fake.

use std::ffi::{OsStr, OsString};
use std::io;
use std::process::{Command, Stdio};

/// Exit status plus captured stderr of a finished child.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutput {
    /// `None` when the child was killed by a signal.
    pub code: Option<i32>,
    pub stderr: String,
}

impl RunOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

pub trait ProcessRunner: Send + Sync {
    /// Spawn `program` with `args`, wait for it, and return its status.
    /// Stdout is discarded. An `Err` means the process could not be spawned.
    fn run(&self, program: &OsStr, args: &[OsString]) -> io::Result<RunOutput>;
}

impl<T: ProcessRunner + ?Sized> ProcessRunner for &T {
    fn run(&self, program: &OsStr, args: &[OsString]) -> io::Result<RunOutput> {
        (**self).run(program, args)
    }
}

/// Runner backed by `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &OsStr, args: &[OsString]) -> io::Result<RunOutput> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()?;
        Ok(RunOutput {
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn captures_stderr_and_code() {
        let out = SystemRunner
            .run(
                OsStr::new("sh"),
                &[OsString::from("-c"), OsString::from("echo out; echo oops >&2; exit 3")],
            )
            .unwrap();
        assert_eq!(out.code, Some(3));
        assert_eq!(out.stderr.trim(), "oops");
        assert!(!out.success());
    }

    #[test]
    fn missing_binary_is_spawn_error() {
        let res = SystemRunner.run(OsStr::new("/nonexistent/definitely-not-here"), &[]);
        assert!(res.is_err());
    }
}

//! Shell command execution
//!
//! Runs the selected instruction through a shell interpreter with stderr
//! merged into stdout, fully captured, blocking until the subprocess exits.

use std::env;
use std::io;

use console::Term;
use duct::cmd;
use log::debug;

use crate::colors::ColorTheme;
use crate::error::MenuError;

/// Outcome of one command execution: exit code plus the combined
/// stdout/stderr stream.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub exit_code: i32,
    pub output: String,
}

impl RunReport {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Print the success/failure banner and the captured output.
    ///
    /// The failure branch keeps the "Error output" heading over the merged
    /// stream even though stdout and stderr are no longer separable.
    pub fn print(&self, term: &Term) -> io::Result<()> {
        if self.success() {
            term.write_line(
                &ColorTheme::ok()
                    .apply_to("--- Command run successfully ---")
                    .to_string(),
            )?;
            term.write_line(&format!("Output:\n{}", self.output))?;
        } else {
            term.write_line(
                &ColorTheme::alert()
                    .apply_to("--- Command run unsuccessfully ---")
                    .to_string(),
            )?;
            term.write_line(&format!("Error output:\n{}", self.output))?;
        }
        Ok(())
    }
}

/// Executes instruction strings through a resolved shell interpreter.
pub struct ShellRunner {
    shell: String,
    flag: &'static str,
}

impl ShellRunner {
    /// Resolve the interpreter: explicit override first, then the `SHELL`
    /// environment variable, then the platform default (`sh -c`, or
    /// `cmd /C` on windows).
    pub fn new(shell_override: Option<String>) -> Self {
        let resolved = shell_override.or_else(|| env::var("SHELL").ok());
        match resolved {
            Some(shell) => Self { shell, flag: "-c" },
            None if cfg!(target_os = "windows") => Self {
                shell: "cmd".to_string(),
                flag: "/C",
            },
            None => Self {
                shell: "sh".to_string(),
                flag: "-c",
            },
        }
    }

    pub fn shell(&self) -> &str {
        &self.shell
    }

    /// Run one instruction to completion, capturing combined output.
    ///
    /// A non-zero exit code is a normal `RunReport`; only a spawn failure
    /// (missing interpreter, permission error) is an `Err`.
    pub fn run(&self, instruction: &str) -> Result<RunReport, MenuError> {
        debug!("running via {} {}: {}", self.shell, self.flag, instruction);

        let output = cmd(self.shell.as_str(), [self.flag, instruction])
            .stderr_to_stdout()
            .stdout_capture()
            .unchecked()
            .run()
            .map_err(|source| MenuError::Spawn {
                shell: self.shell.clone(),
                source,
            })?;

        Ok(RunReport {
            exit_code: output.status.code().unwrap_or(-1),
            output: String::from_utf8_lossy(&output.stdout).to_string(),
        })
    }
}

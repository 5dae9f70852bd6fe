//! Interactive menu loop
//!
//! Render, prompt, dispatch, repeat. The loop owns the terminal handle and
//! the read-only command table; it ends only on the Exit choice or on EOF.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use console::Term;
use log::debug;

use crate::colors::ColorTheme;
use crate::config::CommandTable;
use crate::menu::MenuModel;
use crate::runner::ShellRunner;

/// UX pacing after the exit and invalid-choice messages.
const PAUSE: Duration = Duration::from_millis(500);

/// What one line of user input means for a table of a given size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    /// Zero-based entry position to dispatch.
    Run(usize),
    Exit,
    Invalid,
}

/// Non-numeric input counts as invalid rather than aborting the loop.
fn classify(input: &str, table_len: usize) -> Choice {
    match input.trim().parse::<i64>() {
        Ok(n) if n == table_len as i64 + 1 => Choice::Exit,
        Ok(n) if n >= 1 && n <= table_len as i64 => Choice::Run(n as usize - 1),
        _ => Choice::Invalid,
    }
}

pub struct App {
    term: Term,
    table: CommandTable,
    menu: MenuModel,
    runner: ShellRunner,
}

impl App {
    pub fn new(table: CommandTable, runner: ShellRunner) -> Self {
        let menu = MenuModel::build(&table);
        Self {
            term: Term::stdout(),
            table,
            menu,
            runner,
        }
    }

    /// Run the loop until the user picks Exit or stdin reaches EOF.
    pub fn run(&self) -> Result<()> {
        let stdin = io::stdin();

        loop {
            self.menu.render(&self.term)?;

            print!("Enter your choice [1-{}]: ", self.table.len() + 1);
            io::stdout().flush()?;

            let mut input = String::new();
            if stdin.lock().read_line(&mut input)? == 0 {
                // EOF on stdin, nothing more to prompt for
                self.term.write_line("")?;
                self.farewell()?;
                return Ok(());
            }

            match classify(&input, self.table.len()) {
                Choice::Exit => {
                    self.farewell()?;
                    thread::sleep(PAUSE);
                    return Ok(());
                }
                Choice::Invalid => {
                    self.term.write_line(
                        &ColorTheme::alert().apply_to("Invalid choice!").to_string(),
                    )?;
                    thread::sleep(PAUSE);
                }
                Choice::Run(position) => {
                    self.dispatch(position)?;
                    print!(
                        "{}",
                        ColorTheme::accent().apply_to("\nPress Enter to continue...")
                    );
                    io::stdout().flush()?;
                    let mut pause = String::new();
                    if stdin.lock().read_line(&mut pause)? == 0 {
                        self.term.write_line("")?;
                        self.farewell()?;
                        return Ok(());
                    }
                }
            }
        }
    }

    fn dispatch(&self, position: usize) -> Result<()> {
        let Some(entry) = self.table.get(position) else {
            return Ok(());
        };
        debug!("dispatching entry {}: {}", entry.name, entry.instruction);

        self.term.write_line(
            &ColorTheme::detail()
                .apply_to(format!("You selected: {}", entry.instruction))
                .to_string(),
        )?;

        match self.runner.run(&entry.instruction) {
            Ok(report) => report.print(&self.term)?,
            // a failed spawn is reported but never ends the loop
            Err(err) => {
                self.term.write_line(
                    &ColorTheme::alert()
                        .apply_to("--- Exception occurred ---")
                        .to_string(),
                )?;
                self.term.write_line(&err.to_string())?;
            }
        }
        Ok(())
    }

    fn farewell(&self) -> Result<()> {
        self.term
            .write_line(&ColorTheme::accent().apply_to("Exiting...").to_string())?;
        Ok(())
    }
}

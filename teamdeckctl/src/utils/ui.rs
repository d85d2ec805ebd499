use owo_colors::OwoColorize;
use std::process::ExitCode;

/// Terminal output of teamdeckctl.
///
/// Command results go to stdout, failures and log lines to stderr so that
/// `--output json` stays machine readable.
#[derive(Debug, Default)]
pub struct Ui;

fn failure_line(msg: &str) -> String {
    format!("💥 {} {}", "Failed:".bright_red(), msg)
}

impl Ui {
    pub fn new() -> Self {
        Self
    }

    pub fn println(&self, msg: impl AsRef<str>) {
        println!("{}", msg.as_ref());
    }

    pub fn eprintln(&self, msg: impl AsRef<str>) {
        eprintln!("{}", msg.as_ref());
    }

    pub fn failed(&self, msg: impl AsRef<str>) {
        self.eprintln(failure_line(msg.as_ref()));
    }

    /// Run a command body and print what it renders. Errors are returned
    /// untouched, [`Ui::report`] prints them.
    pub fn run<F>(&self, f: F) -> anyhow::Result<()>
    where
        F: FnOnce() -> anyhow::Result<String>,
    {
        let result = f()?;
        if !result.is_empty() {
            self.println(result);
        }
        Ok(())
    }

    /// Turn the outcome of a command into the process exit code, printing a
    /// failure line for errors
    pub fn report(&self, result: anyhow::Result<()>) -> ExitCode {
        match result {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                self.failed(format!("{e:#}"));
                ExitCode::FAILURE
            }
        }
    }
}

use crate::app::render::Renderer;
use crate::core::session::{Command, MenuSession, Outcome};
use crate::domain::ports::IdGenerator;
use crate::utils::error::{MenuError, Result};
use std::io::{BufRead, Write};

/// Counters reported when the shell ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellSummary {
    pub commands: usize,
    pub errors: usize,
}

/// Line-oriented front end. Each line is one user action and runs to
/// completion before the next line is read.
pub struct Shell<G: IdGenerator> {
    session: MenuSession<G>,
    renderer: Renderer,
    prompt: bool,
}

impl<G: IdGenerator> Shell<G> {
    pub fn new(session: MenuSession<G>, renderer: Renderer) -> Self {
        Self {
            session,
            renderer,
            prompt: false,
        }
    }

    /// Print a `> ` prompt before each line (interactive terminals only).
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn session(&self) -> &MenuSession<G> {
        &self.session
    }

    /// Runs until `quit` or end of input. Bad commands are reported on
    /// `output` and do not stop the loop; only I/O failures do.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, output: &mut W) -> Result<ShellSummary> {
        let mut summary = ShellSummary::default();
        let mut buf = Vec::new();

        loop {
            if self.prompt {
                write!(output, "> ")?;
                output.flush()?;
            }

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                if self.prompt {
                    writeln!(output)?;
                }
                break;
            }

            // A line that is not UTF-8 is a bad command, not a broken stream.
            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line.trim(),
                Err(e) => {
                    summary.commands += 1;
                    summary.errors += 1;
                    let error = MenuError::InvalidInputError {
                        reason: format!("line is not valid UTF-8 ({})", e),
                    };
                    tracing::warn!("Skipping input line: {}", error);
                    writeln!(output, "{}", self.renderer.render_error(&error))?;
                    continue;
                }
            };
            if line.is_empty() {
                continue;
            }

            summary.commands += 1;
            let result = line
                .parse::<Command>()
                .and_then(|command| self.session.execute(command));

            match result {
                Ok(outcome) => {
                    writeln!(output, "{}", self.renderer.render(&outcome)?)?;
                    if outcome == Outcome::Quit {
                        break;
                    }
                }
                Err(e) => {
                    summary.errors += 1;
                    tracing::warn!("Command '{}' failed: {}", line, e);
                    writeln!(output, "{}", self.renderer.render_error(&e))?;
                }
            }
        }

        tracing::info!(
            "Shell finished after {} command(s), {} error(s)",
            summary.commands,
            summary.errors
        );
        Ok(summary)
    }
}

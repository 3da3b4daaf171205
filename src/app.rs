//! Selecta demo application.
//!
//! A line-oriented host for the dropdown demo page: every prompt line is
//! parsed into a [`Command`], applied to the page, and finished searches
//! are folded in before the next prompt.

use std::io::{BufRead, Write};

use selecta_ui::demos::{DropdownDemo, DropdownMessage};
use selecta_ui::TextRenderer;

use crate::command::{Command, HELP};
use crate::config::DemoConfig;
use crate::error::AppError;

const PROMPT: &str = "> ";

/// Demo application state
pub struct DemoApp {
    demo: DropdownDemo,
    renderer: TextRenderer,
    /// Selections already reported to the user
    reported: usize,
}

impl DemoApp {
    pub fn new(config: &DemoConfig) -> Result<Self, AppError> {
        let demo = DropdownDemo::new(config.demo_settings())?;
        Ok(Self {
            demo,
            renderer: TextRenderer::new(),
            reported: 0,
        })
    }

    pub fn demo(&self) -> &DropdownDemo {
        &self.demo
    }

    /// Run until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<(), AppError> {
        writeln!(output, "{}", self.demo.render(&self.renderer))?;
        writeln!(output, "Type 'help' for commands.")?;
        write!(output, "{PROMPT}")?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            self.after_poll(&mut output)?;

            match Command::parse(&line) {
                Ok(None) => {}
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => self.execute(command, &mut output)?,
                Err(err) => {
                    log::debug!("Rejected command line {:?}", line);
                    writeln!(output, "{err}")?;
                }
            }

            write!(output, "{PROMPT}")?;
            output.flush()?;
        }

        writeln!(output)?;
        Ok(())
    }

    fn execute<W: Write>(&mut self, command: Command, output: &mut W) -> Result<(), AppError> {
        match command {
            Command::Show => {
                write!(output, "{}", self.demo.render(&self.renderer))?;
            }
            Command::Help => {
                writeln!(output, "{HELP}")?;
            }
            Command::Wait => {
                let pending = self.demo.pending_searches();
                if pending == 0 {
                    writeln!(output, "No searches in flight.")?;
                } else {
                    writeln!(output, "Waiting for {pending} search(es)...")?;
                    output.flush()?;
                    self.demo.settle();
                    self.report_selections(output)?;
                    write!(output, "{}", self.demo.render(&self.renderer))?;
                }
            }
            Command::Message(message) => {
                if matches!(message, DropdownMessage::Reset) {
                    self.reported = 0;
                }
                self.demo.update(message);
                self.report_selections(output)?;
                write!(output, "{}", self.demo.render(&self.renderer))?;
            }
            // Handled by the loop
            Command::Quit => {}
        }
        Ok(())
    }

    /// Fold in searches that finished while the user was typing.
    fn after_poll<W: Write>(&mut self, output: &mut W) -> Result<(), AppError> {
        let applied = self.demo.poll();
        if applied > 0 {
            log::debug!("Applied {} finished search(es)", applied);
        }
        Ok(self.report_selections(output)?)
    }

    fn report_selections<W: Write>(&mut self, output: &mut W) -> std::io::Result<()> {
        let selections = self.demo.selections();
        for (slot, option) in selections.iter().skip(self.reported) {
            writeln!(output, "Selected in \"{}\": {} ({})", slot.title(), option.label, option.value)?;
        }
        self.reported = selections.len();
        Ok(())
    }
}

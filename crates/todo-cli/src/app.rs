//! Interactive command loop

use std::io::{self, BufRead, Write};

use colored::Colorize;
use todo_core::{ListManager, Store, TodoError};

use crate::command::{parse_index, Command};

const MAIN_PROMPT: &str = "Enter command (add, list, toggle, delete, exit):";

/// Reads commands from `input`, applies them to the list and reports on `output`.
pub struct App<S: Store, R: BufRead, W: Write> {
    manager: ListManager<S>,
    input: R,
    output: W,
}

impl<S: Store, R: BufRead, W: Write> App<S, R, W> {
    pub fn new(manager: ListManager<S>, input: R, output: W) -> Self {
        Self {
            manager,
            input,
            output,
        }
    }

    pub fn manager(&self) -> &ListManager<S> {
        &self.manager
    }

    pub fn into_manager(self) -> ListManager<S> {
        self.manager
    }

    /// Run until `exit` or end of input
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", "📝 Todo List".cyan().bold())?;

        loop {
            let line = match self.prompt(MAIN_PROMPT)? {
                Some(line) => line,
                None => {
                    writeln!(self.output)?;
                    self.farewell()?;
                    break;
                }
            };

            match line.parse::<Command>() {
                Ok(Command::Exit) => {
                    self.farewell()?;
                    break;
                }
                Ok(command) => self.dispatch(command)?,
                Err(unknown) => {
                    tracing::debug!(input = %unknown.0, "Unknown command");
                    writeln!(self.output, "{}", "Invalid command.".red())?;
                }
            }
        }

        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::Add => self.add(),
            Command::List => self.list(),
            Command::Toggle => self.toggle(),
            Command::Delete => self.delete(),
            Command::Exit => Ok(()),
        }
    }

    fn add(&mut self) -> io::Result<()> {
        let title = self.prompt("Enter title:")?.unwrap_or_default();
        if title.trim().is_empty() {
            return self.report(TodoError::EmptyTitle);
        }

        match self.manager.add(title) {
            Ok(item) => {
                let message = format!("Added: {}", item);
                writeln!(self.output, "{}", message.green())
            }
            Err(e) => self.report(e),
        }
    }

    fn list(&mut self) -> io::Result<()> {
        if self.manager.is_empty() {
            return writeln!(self.output, "{}", "No todos found.".yellow());
        }

        for (index, item) in self.manager.list().iter().enumerate() {
            writeln!(self.output, "{}: {}", index, item)?;
        }
        Ok(())
    }

    fn toggle(&mut self) -> io::Result<()> {
        let Some(index) = self.read_index()? else {
            return writeln!(self.output, "{}", "Invalid index.".red());
        };

        match self.manager.toggle(index) {
            Ok(item) => {
                let message = format!("Toggled: {}", item);
                writeln!(self.output, "{}", message.green())
            }
            Err(e) => self.report(e),
        }
    }

    fn delete(&mut self) -> io::Result<()> {
        let Some(index) = self.read_index()? else {
            return writeln!(self.output, "{}", "Invalid index.".red());
        };

        match self.manager.delete(index) {
            Ok(item) => {
                let message = format!("Deleted: {}", item);
                writeln!(self.output, "{}", message.green())
            }
            Err(e) => self.report(e),
        }
    }

    fn read_index(&mut self) -> io::Result<Option<usize>> {
        let line = self.prompt("Enter index:")?.unwrap_or_default();
        Ok(parse_index(&line))
    }

    fn report(&mut self, error: TodoError) -> io::Result<()> {
        tracing::debug!("Rejected: {}", error);
        let message = match error {
            TodoError::EmptyTitle => "Invalid title.",
            TodoError::IndexOutOfRange { .. } => "Invalid index.",
        };
        writeln!(self.output, "{}", message.red())
    }

    fn farewell(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", "👋 Goodbye!".cyan())
    }

    /// Print `label` and read one line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{} ", label.cyan().bold())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

//! Interactive menu loop over a task store.
//!
//! [`Console`] owns the [`TaskStore`] and drives it from a blocking
//! read-eval loop: clear the screen, print the menu, read one choice,
//! dispatch, pause, repeat. It is generic over its input and output so
//! tests can run a full scripted session against in-memory buffers.
//!
//! All store errors are recovered locally and surfaced as user-facing
//! messages; nothing short of an output I/O failure stops the loop.

use std::io::{self, BufRead, Write};

use taskdeck_core::{StoreError, TaskId, TaskStore};

use crate::screen;

/// Menu-driven console over a [`TaskStore`].
pub struct Console<R, W> {
    reader: R,
    writer: W,
    store: TaskStore,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console with an empty store.
    ///
    /// Screen clearing is on by default; tests and piped sessions turn
    /// it off with [`with_screen_clearing`](Self::with_screen_clearing).
    #[must_use]
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            store: TaskStore::new(),
            clear_screen: true,
        }
    }

    /// Sets whether the screen is cleared between menu iterations.
    #[must_use]
    pub fn with_screen_clearing(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    /// Returns a read-only view of the underlying store.
    #[must_use]
    pub const fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Consumes the console, returning the store.
    #[must_use]
    pub fn into_store(self) -> TaskStore {
        self.store
    }

    /// Runs the menu loop until the user exits or input is exhausted.
    ///
    /// End-of-input is treated as a clean exit so a closed stdin cannot
    /// spin the loop.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing to the output fails.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            if self.clear_screen
                && let Err(e) = screen::clear(&mut self.writer)
            {
                tracing::warn!(error = %e, "could not clear screen");
                writeln!(self.writer, "Warning: could not clear screen: {e}")?;
            }

            writeln!(self.writer, "Task Management System")?;
            writeln!(self.writer, "1. Add Task")?;
            writeln!(self.writer, "2. List Tasks")?;
            writeln!(self.writer, "3. Complete Task")?;
            writeln!(self.writer, "4. Delete Task")?;
            writeln!(self.writer, "5. Exit")?;

            let Some(line) = self.prompt("\nEnter your choice (1-5): ")? else {
                tracing::debug!("input closed, exiting");
                return Ok(());
            };
            let Ok(choice) = line.trim().parse::<u32>() else {
                writeln!(self.writer, "Error: Please enter a valid number!")?;
                continue;
            };

            match choice {
                1 => self.add_task()?,
                2 => self.list_tasks()?,
                3 => self.complete_task()?,
                4 => self.delete_task()?,
                5 => {
                    writeln!(self.writer, "Goodbye!")?;
                    return Ok(());
                }
                _ => writeln!(self.writer, "Invalid choice! Please try again.")?,
            }

            if self.prompt("\nPress Enter to continue...")?.is_none() {
                tracing::debug!("input closed, exiting");
                return Ok(());
            }
        }
    }

    /// Prompts for the title and description, then adds the task.
    ///
    /// The title must be non-empty as typed (no trimming); the
    /// description may be empty.
    fn add_task(&mut self) -> io::Result<()> {
        let Some(title) = self.prompt("Enter task title: ")? else {
            return Ok(());
        };
        let Some(description) = self.prompt("Enter task description: ")? else {
            return Ok(());
        };

        match self.store.add(&title, &description) {
            Ok(task) => {
                tracing::info!(id = task.id.get(), "task added");
                writeln!(self.writer, "Task added successfully!")
            }
            Err(StoreError::TitleEmpty) => {
                writeln!(self.writer, "Error: Title cannot be empty!")
            }
            Err(e @ StoreError::TaskNotFound(_)) => {
                // add() never scans by id; keep the compiler honest.
                tracing::warn!(error = %e, "unexpected add failure");
                writeln!(self.writer, "Error: {e}")
            }
        }
    }

    /// Prints all tasks in creation order.
    fn list_tasks(&mut self) -> io::Result<()> {
        if self.store.is_empty() {
            return writeln!(self.writer, "No tasks found!");
        }

        writeln!(self.writer, "\nCurrent Tasks:")?;
        writeln!(self.writer, "-------------")?;
        for task in self.store.tasks() {
            writeln!(
                self.writer,
                "ID: {}\nTitle: {}\nDescription: {}\nStatus: {}\n",
                task.id,
                task.title,
                task.description,
                task.status_label()
            )?;
        }
        Ok(())
    }

    /// Prompts for an id and marks the matching task completed.
    fn complete_task(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt_id("Enter task ID to complete: ")? else {
            return Ok(());
        };

        match self.store.complete(id) {
            Ok(()) => {
                tracing::info!(%id, "task completed");
                writeln!(self.writer, "Task marked as completed!")
            }
            Err(StoreError::TaskNotFound(_)) => {
                tracing::debug!(%id, "complete: no such task");
                writeln!(self.writer, "Task not found!")
            }
            Err(e @ StoreError::TitleEmpty) => writeln!(self.writer, "Error: {e}"),
        }
    }

    /// Prompts for an id and removes the matching task.
    fn delete_task(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt_id("Enter task ID to delete: ")? else {
            return Ok(());
        };

        match self.store.remove(id) {
            Ok(task) => {
                tracing::info!(%id, title = %task.title, "task deleted");
                writeln!(self.writer, "Task deleted successfully!")
            }
            Err(StoreError::TaskNotFound(_)) => {
                tracing::debug!(%id, "delete: no such task");
                writeln!(self.writer, "Task not found!")
            }
            Err(e @ StoreError::TitleEmpty) => writeln!(self.writer, "Error: {e}"),
        }
    }

    /// Writes a prompt and reads one line of input.
    ///
    /// Returns `Ok(None)` at end of input. The trailing newline is
    /// stripped; no other trimming is applied.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{text}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Prompts for a numeric task id.
    ///
    /// Returns `Ok(None)` on end of input or a malformed number; the
    /// parse failure is reported and the current operation is abandoned.
    fn prompt_id(&mut self, text: &str) -> io::Result<Option<TaskId>> {
        let Some(line) = self.prompt(text)? else {
            return Ok(None);
        };
        match line.trim().parse::<u64>() {
            Ok(raw) => Ok(Some(TaskId::from_raw(raw))),
            Err(_) => {
                writeln!(self.writer, "Error: Please enter a valid number!")?;
                Ok(None)
            }
        }
    }
}

//! # CLI Layer
//!
//! This module is **one possible UI client** for roster, not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Handles argument parsing and logging setup
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Parses flags, loads configuration, builds the API and starts a session
//! - `Session`: The numbered menu loop. Generic over the reader and writer so tests
//!   can drive it with in-memory buffers
//! - `handle_*()`: One handler per menu entry. Each returns a [`Flow`]; running out of
//!   input at any prompt ends the session the same way choosing "Exit" does

use super::prompt::Prompter;
use super::render::{
    render_details, render_search_results, render_statistics, render_table, rule, section,
};
use super::setup::Cli;
use clap::Parser;
use colored::Colorize;
use roster::api::{RosterApi, StudentUpdate};
use roster::config::RosterConfig;
use roster::error::{Result, RosterError};
use roster::model::StudentId;
use roster::store::memory::InMemoryStore;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    if cli.print_config {
        print!("{}", RosterConfig::template());
        return Ok(());
    }

    let mut config = RosterConfig::load(cli.config.as_deref())?;
    config.apply_overrides(cli.no_seed, cli.no_color);
    debug!(?config, "configuration loaded");

    if !config.color {
        colored::control::set_override(false);
    }

    let api = if config.seed_samples {
        RosterApi::with_sample_data()?
    } else {
        RosterApi::in_memory()
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(api, &config, stdin.lock(), stdout.lock());
    session.start()
}

/// Logs go to stderr so they never interleave with the menu.
fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| RosterError::Logging(e.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Shorthand for "read a line or end the session on EOF".
macro_rules! read_or_exit {
    ($prompter:expr, $prompt:expr) => {
        match $prompter.read_line($prompt)? {
            Some(line) => line,
            None => return Ok(Flow::Exit),
        }
    };
}

struct Session<R, W> {
    api: RosterApi<InMemoryStore>,
    prompter: Prompter<R, W>,
    confirm_deletes: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    fn new(api: RosterApi<InMemoryStore>, config: &RosterConfig, input: R, output: W) -> Self {
        Self {
            api,
            prompter: Prompter::new(input, output),
            confirm_deletes: config.confirm_deletes,
        }
    }

    fn start(&mut self) -> Result<()> {
        self.say(format!(
            "{}\n{}\n{}",
            rule('=', 60),
            "       STUDENT RECORD MANAGEMENT SYSTEM".bold(),
            rule('=', 60)
        ))?;

        loop {
            self.print_menu()?;
            let Some(choice) = self.prompter.read_choice("Enter your choice (1-8): ", 1, 8)? else {
                break;
            };
            if self.dispatch(choice)? == Flow::Exit {
                break;
            }
            self.say("\nPress Enter to continue...")?;
            if self.prompter.read_line("")?.is_none() {
                break;
            }
        }
        debug!("session ended");
        Ok(())
    }

    fn dispatch(&mut self, choice: u32) -> Result<Flow> {
        match choice {
            1 => self.handle_add(),
            2 => self.handle_view_all(),
            3 => self.handle_view_by_id(),
            4 => self.handle_update(),
            5 => self.handle_delete(),
            6 => self.handle_search(),
            7 => self.handle_statistics(),
            _ => {
                self.say("\nThank you for using Student Management System!\nGoodbye!")?;
                Ok(Flow::Exit)
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        self.say(format!(
            "\n{rule}\n{}\n{rule}\n\
             1. Add New Student\n\
             2. View All Students\n\
             3. View Student by ID\n\
             4. Update Student\n\
             5. Delete Student\n\
             6. Search Students\n\
             7. Display Statistics\n\
             8. Exit\n\
             {rule}",
            "           MAIN MENU".bold(),
            rule = rule('=', 40)
        ))
    }

    fn handle_add(&mut self) -> Result<Flow> {
        self.say(section("ADD NEW STUDENT", 30))?;

        let name = read_or_exit!(self.prompter, "Enter student name: ");
        let course = read_or_exit!(self.prompter, "Enter course: ");
        let marks = read_or_exit!(self.prompter, "Enter marks (0-100): ");

        let Some(marks) = parse_marks(&marks) else {
            self.error("Invalid marks! Please enter a valid number.")?;
            return Ok(Flow::Continue);
        };

        match self.api.add_record(&name, &course, marks) {
            Ok(student) => {
                self.success("\n✓ Student added successfully!")?;
                self.say(format!("Student ID: {}", student.id()))?;
                self.say(format!("Details: {}", student))?;
            }
            Err(e) => self.error(format!("Error: {}", e))?,
        }
        Ok(Flow::Continue)
    }

    fn handle_view_all(&mut self) -> Result<Flow> {
        self.say(section("ALL STUDENTS", 80))?;

        let students = self.api.all_records();
        if students.is_empty() {
            self.say("No students found in the system.")?;
        } else {
            self.say(render_table(&students).trim_end())?;
            self.say(format!("Total students: {}", students.len()))?;
        }
        Ok(Flow::Continue)
    }

    fn handle_view_by_id(&mut self) -> Result<Flow> {
        self.say(section("VIEW STUDENT BY ID", 30))?;

        let line = read_or_exit!(self.prompter, "Enter student ID: ");
        let Some(id) = parse_id(&line) else {
            self.error("Invalid ID! Please enter a valid number.")?;
            return Ok(Flow::Continue);
        };

        match self.api.find_by_id(id) {
            Some(student) => {
                self.say("\nStudent found:")?;
                self.say(render_details(&student).trim_end())?;
            }
            None => self.not_found(id)?,
        }
        Ok(Flow::Continue)
    }

    fn handle_update(&mut self) -> Result<Flow> {
        self.say(section("UPDATE STUDENT", 30))?;

        let line = read_or_exit!(self.prompter, "Enter student ID to update: ");
        let Some(id) = parse_id(&line) else {
            self.error("Invalid input! Please enter valid numbers.")?;
            return Ok(Flow::Continue);
        };
        let Some(current) = self.api.find_by_id(id) else {
            self.not_found(id)?;
            return Ok(Flow::Continue);
        };

        self.say(format!("\nCurrent details:\n{}", current))?;
        self.say("\nWhat would you like to update?\n1. Name\n2. Course\n3. Marks\n4. All details")?;
        let Some(choice) = self.prompter.read_choice("Enter choice (1-4): ", 1, 4)? else {
            return Ok(Flow::Exit);
        };

        let mut update = StudentUpdate::new();
        if choice == 1 || choice == 4 {
            update = update.with_name(read_or_exit!(self.prompter, "Enter new name: "));
        }
        if choice == 2 || choice == 4 {
            update = update.with_course(read_or_exit!(self.prompter, "Enter new course: "));
        }
        if choice == 3 || choice == 4 {
            let line = read_or_exit!(self.prompter, "Enter new marks (0-100): ");
            let Some(marks) = parse_marks(&line) else {
                self.error("Invalid marks! Please enter a valid number.")?;
                return Ok(Flow::Continue);
            };
            update = update.with_marks(marks);
        }

        match self.api.update_record(id, &update) {
            Ok(Some(updated)) => {
                self.success("✓ Student updated successfully!")?;
                self.say(format!("Updated details: {}", updated))?;
            }
            Ok(None) => self.error("Failed to update student.")?,
            Err(e) => self.error(format!("Error: {}", e))?,
        }
        Ok(Flow::Continue)
    }

    fn handle_delete(&mut self) -> Result<Flow> {
        self.say(section("DELETE STUDENT", 30))?;

        let line = read_or_exit!(self.prompter, "Enter student ID to delete: ");
        let Some(id) = parse_id(&line) else {
            self.error("Invalid ID! Please enter a valid number.")?;
            return Ok(Flow::Continue);
        };
        let Some(student) = self.api.find_by_id(id) else {
            self.not_found(id)?;
            return Ok(Flow::Continue);
        };

        self.say(format!("\nStudent to delete:\n{}", student))?;

        if self.confirm_deletes {
            let Some(confirmed) = self
                .prompter
                .confirm("\nAre you sure you want to delete this student? (y/n): ")?
            else {
                return Ok(Flow::Exit);
            };
            if !confirmed {
                self.say("Delete operation cancelled.")?;
                return Ok(Flow::Continue);
            }
        }

        match self.api.delete_record(id) {
            Some(_) => self.success("✓ Student deleted successfully!")?,
            None => self.error("Failed to delete student.")?,
        }
        Ok(Flow::Continue)
    }

    fn handle_search(&mut self) -> Result<Flow> {
        self.say(section("SEARCH STUDENTS", 30))?;
        self.say("Search by:\n1. Name\n2. Course\n3. Grade")?;

        let Some(choice) = self.prompter.read_choice("Enter choice (1-3): ", 1, 3)? else {
            return Ok(Flow::Exit);
        };

        let results = match choice {
            1 => {
                let query = read_or_exit!(self.prompter, "Enter name to search: ");
                self.api.search_by_name(&query)
            }
            2 => {
                let query = read_or_exit!(self.prompter, "Enter course to search: ");
                self.api.search_by_course(&query)
            }
            _ => {
                let label =
                    read_or_exit!(self.prompter, "Enter grade to search (A+, A, B, C, D, F): ");
                self.api.search_by_grade(&label)
            }
        };

        self.say(render_search_results(&results).trim_end())?;
        Ok(Flow::Continue)
    }

    fn handle_statistics(&mut self) -> Result<Flow> {
        self.say(section("STUDENT STATISTICS", 40))?;

        let stats = self.api.statistics();
        if stats.is_empty() {
            self.say("No students in the system.")?;
        } else {
            self.say(render_statistics(&stats).trim_end())?;
        }
        Ok(Flow::Continue)
    }

    fn not_found(&mut self, id: StudentId) -> Result<()> {
        self.error(format!("Student with ID {} not found!", id))
    }

    fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.prompter.out(), "{}", text)?;
        Ok(())
    }

    fn success(&mut self, text: &str) -> Result<()> {
        self.say(text.green())
    }

    fn error(&mut self, text: impl AsRef<str>) -> Result<()> {
        self.say(text.as_ref().red())
    }
}

fn parse_id(line: &str) -> Option<StudentId> {
    line.trim().parse().ok()
}

fn parse_marks(line: &str) -> Option<f64> {
    line.trim().parse().ok()
}

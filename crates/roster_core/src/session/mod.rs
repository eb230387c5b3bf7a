//! Interactive menu loop over a roster store.
//!
//! # Responsibility
//! - Prompt for commands and record fields on a line-oriented stream.
//! - Drive `StudentService` and render exactly one outcome line per command.
//!
//! # Invariants
//! - The schema is ensured once, when the loop starts.
//! - Store failures and malformed input never end the loop; only `q` or the
//!   end of input does.
//! - Update never prompts for new fields when the target id is absent.

mod input;

pub use input::{parse_whole_number, InputParseError, MenuChoice};

use crate::db::Store;
use crate::model::student::{StudentId, StudentRecord};
use crate::repo::student_repo::SqliteStudentRepository;
use crate::service::student_service::{ChangeOutcome, StudentService};
use log::info;
use std::io::{self, BufRead, Write};

const MENU: &str = "\nCRUD Operations Menu:
1. Insert Student
2. View All Students
3. View Specific Student
4. Update Student
5. Delete Student
q. Exit
Enter your choice: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Field prompts differ only by wording between insert and update.
#[derive(Debug, Clone, Copy)]
enum FieldPrompts {
    New,
    Replacement,
}

impl FieldPrompts {
    fn label(self, field: &str) -> String {
        match self {
            Self::New => format!("Enter {field}: "),
            Self::Replacement => format!("Enter new {field}: "),
        }
    }
}

/// Menu-driven session reading from `input` and rendering to `output`.
pub struct InteractiveSession<I: BufRead, O: Write> {
    store: Store,
    service: StudentService<SqliteStudentRepository>,
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> InteractiveSession<I, O> {
    pub fn new(store: Store, input: I, output: O) -> Self {
        let service = StudentService::new(SqliteStudentRepository::new(store.clone()));
        Self {
            store,
            service,
            input,
            output,
        }
    }

    /// Consumes the session and returns its output sink.
    pub fn into_output(self) -> O {
        self.output
    }

    /// Runs the menu loop until `q` or end of input.
    ///
    /// # Errors
    /// Only terminal I/O failures are returned; store failures are rendered.
    pub fn run(&mut self) -> io::Result<()> {
        if let Err(err) = self.store.ensure_schema() {
            writeln!(self.output, "Error: {err}")?;
        }
        info!("event=session_start module=session status=ok");

        loop {
            write!(self.output, "{MENU}")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };

            let flow = match MenuChoice::parse(&line) {
                Some(MenuChoice::Insert) => self.insert()?,
                Some(MenuChoice::ViewAll) => self.view_all()?,
                Some(MenuChoice::ViewOne) => self.view_one()?,
                Some(MenuChoice::Update) => self.update()?,
                Some(MenuChoice::Delete) => self.delete()?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting...")?;
                    Flow::Exit
                }
                None => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        self.output.flush()?;
        info!("event=session_end module=session status=ok");
        Ok(())
    }

    fn insert(&mut self) -> io::Result<Flow> {
        let Some(id) = self.prompt_number("Enter student ID: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(record) = self.prompt_fields(id, FieldPrompts::New)? else {
            return Ok(Flow::Exit);
        };

        match self.service.register(&record) {
            Ok(()) => writeln!(self.output, "Student inserted.")?,
            Err(err) => writeln!(self.output, "Error: {err}")?,
        }
        Ok(Flow::Continue)
    }

    fn view_all(&mut self) -> io::Result<Flow> {
        match self.service.list() {
            Ok(records) if records.is_empty() => writeln!(self.output, "No students found.")?,
            Ok(records) => {
                writeln!(self.output, "=== Students in database ===")?;
                for record in &records {
                    writeln!(self.output, "{record}")?;
                }
            }
            Err(err) => writeln!(self.output, "Error: {err}")?,
        }
        Ok(Flow::Continue)
    }

    fn view_one(&mut self) -> io::Result<Flow> {
        let Some(id) = self.prompt_number("Enter student ID to view: ")? else {
            return Ok(Flow::Exit);
        };

        match self.service.find(id) {
            Ok(Some(record)) => writeln!(self.output, "Student details: {record}")?,
            Ok(None) => self.write_not_found(id)?,
            Err(err) => writeln!(self.output, "Error: {err}")?,
        }
        Ok(Flow::Continue)
    }

    fn update(&mut self) -> io::Result<Flow> {
        let Some(id) = self.prompt_number("Enter student ID to update: ")? else {
            return Ok(Flow::Exit);
        };

        match self.service.find(id) {
            Ok(Some(_)) => {}
            Ok(None) => {
                self.write_not_found(id)?;
                return Ok(Flow::Continue);
            }
            Err(err) => {
                writeln!(self.output, "Error: {err}")?;
                return Ok(Flow::Continue);
            }
        }

        let Some(record) = self.prompt_fields(id, FieldPrompts::Replacement)? else {
            return Ok(Flow::Exit);
        };

        match self.service.update(&record) {
            Ok(ChangeOutcome::Applied) => writeln!(self.output, "Student updated successfully.")?,
            Ok(ChangeOutcome::NotFound(id)) => self.write_not_found(id)?,
            Err(err) => writeln!(self.output, "Error: {err}")?,
        }
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> io::Result<Flow> {
        let Some(id) = self.prompt_number("Enter student ID to delete: ")? else {
            return Ok(Flow::Exit);
        };

        match self.service.remove(id) {
            Ok(ChangeOutcome::Applied) => writeln!(self.output, "Student with ID {id} deleted.")?,
            Ok(ChangeOutcome::NotFound(id)) => self.write_not_found(id)?,
            Err(err) => writeln!(self.output, "Error: {err}")?,
        }
        Ok(Flow::Continue)
    }

    /// Collects every non-id field, in storage order.
    fn prompt_fields(
        &mut self,
        id: StudentId,
        prompts: FieldPrompts,
    ) -> io::Result<Option<StudentRecord>> {
        let Some(first_name) = self.prompt_required(&prompts.label("first name"))? else {
            return Ok(None);
        };
        let Some(last_name) = self.prompt_required(&prompts.label("last name"))? else {
            return Ok(None);
        };
        let Some(age) = self.prompt_number(&prompts.label("age"))? else {
            return Ok(None);
        };
        let Some(gender) = self.prompt_text(&prompts.label("gender"))? else {
            return Ok(None);
        };
        let Some(combination) = self.prompt_text(&prompts.label("combination"))? else {
            return Ok(None);
        };

        Ok(Some(StudentRecord::new(
            id,
            first_name,
            last_name,
            age,
            gender,
            combination,
        )))
    }

    fn write_not_found(&mut self, id: StudentId) -> io::Result<()> {
        writeln!(self.output, "Student with ID {id} not found.")
    }

    /// Re-prompts until a whole number is entered. `None` means end of input.
    fn prompt_number(&mut self, label: &str) -> io::Result<Option<i64>> {
        loop {
            let Some(text) = self.prompt_text(label)? else {
                return Ok(None);
            };
            match parse_whole_number(&text) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    /// Re-prompts until non-blank text is entered. `None` means end of input.
    fn prompt_required(&mut self, label: &str) -> io::Result<Option<String>> {
        loop {
            let Some(text) = self.prompt_text(label)? else {
                return Ok(None);
            };
            if !text.is_empty() {
                return Ok(Some(text));
            }
            writeln!(self.output, "Value must not be empty. Please try again.")?;
        }
    }

    fn prompt_text(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

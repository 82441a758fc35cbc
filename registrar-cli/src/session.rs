//! Interactive menu session.
//!
//! A [`Session`] owns the roster and runs the four-action menu loop against
//! any `BufRead` input and `Write` output. `main` wires it to stdin/stdout;
//! tests drive it with in-memory buffers and never touch the real console.
//!
//! No failure inside the loop is fatal: bad names, unknown menu choices, and
//! file problems are all reported to the output writer and the menu regains
//! control. Only end of input or the Exit choice ends the session.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use registrar_core::persistence::{self, LoadResult};
use registrar_core::types::{CourseName, Name, NameField};
use registrar_core::{Roster, Student};

// ---------------------------------------------------------------------------
// Menu
// ---------------------------------------------------------------------------

const MENU: &str = "\
---- Course Registration Program ----
  Select from the following menu:
    1. Register a student for a course.
    2. Show current data.
    3. Save data to a file.
    4. Exit the program.
-------------------------------------";

/// The four reachable actions of the menu state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Register,
    ShowAll,
    Save,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(MenuChoice::Register),
            "2" => Ok(MenuChoice::ShowAll),
            "3" => Ok(MenuChoice::Save),
            "4" => Ok(MenuChoice::Exit),
            other => Err(format!("unknown choice '{other}'; choose 1, 2, 3, or 4")),
        }
    }
}

// ---------------------------------------------------------------------------
// Roster rendering
// ---------------------------------------------------------------------------

#[derive(Tabled)]
struct RosterRow {
    #[tabled(rename = "first name")]
    first_name: String,
    #[tabled(rename = "last name")]
    last_name: String,
    #[tabled(rename = "course")]
    course: String,
}

impl From<&Student> for RosterRow {
    fn from(student: &Student) -> Self {
        Self {
            first_name: student.first_name.to_string(),
            last_name: student.last_name.to_string(),
            course: student.course_name.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Interactive state: the roster plus the file it loads from and saves to.
pub struct Session<R, W> {
    input: R,
    output: W,
    file: PathBuf,
    roster: Roster,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session over arbitrary input/output. The roster starts
    /// empty; [`Session::run`] fills it from the file.
    pub fn new(file: impl Into<PathBuf>, input: R, output: W) -> Self {
        Self {
            input,
            output,
            file: file.into(),
            roster: Roster::new(),
        }
    }

    /// Load the roster, then loop over the menu until Exit is chosen or the
    /// input ends.
    pub fn run(&mut self) -> io::Result<()> {
        self.load_roster()?;
        loop {
            writeln!(self.output, "\n{MENU}")?;
            let Some(line) = self.prompt("Enter your menu choice number: ")? else {
                break; // end of input behaves like Exit
            };
            match line.parse::<MenuChoice>() {
                Ok(MenuChoice::Register) => self.register()?,
                Ok(MenuChoice::ShowAll) => self.show_roster()?,
                Ok(MenuChoice::Save) => self.save_roster()?,
                Ok(MenuChoice::Exit) => break,
                Err(message) => writeln!(self.output, "{}", message.red())?,
            }
        }
        writeln!(self.output, "Program ended.")?;
        Ok(())
    }

    // -- actions ------------------------------------------------------------

    /// Option 1: prompt for the record fields, validating each name as soon
    /// as it is typed. A bad first name aborts the action before the last
    /// name is ever requested.
    fn register(&mut self) -> io::Result<()> {
        let Some(first) = self.prompt("Enter the student's first name: ")? else {
            return Ok(());
        };
        let first = match Name::new(NameField::First, first) {
            Ok(name) => name,
            Err(err) => return self.report_error("That name cannot be registered.", &err),
        };

        let Some(last) = self.prompt("Enter the student's last name: ")? else {
            return Ok(());
        };
        let last = match Name::new(NameField::Last, last) {
            Ok(name) => name,
            Err(err) => return self.report_error("That name cannot be registered.", &err),
        };

        let Some(course) = self.prompt("Please enter the name of the course: ")? else {
            return Ok(());
        };

        let student = Student {
            first_name: first,
            last_name: last,
            course_name: CourseName::from(course),
        };
        writeln!(
            self.output,
            "{} Registered {} {} for {}.",
            "✓".green(),
            student.first_name,
            student.last_name,
            student.course_name
        )?;
        self.roster.register(student);
        Ok(())
    }

    /// Option 2: render the roster in registration order.
    fn show_roster(&mut self) -> io::Result<()> {
        if self.roster.is_empty() {
            writeln!(self.output, "No students registered yet.")?;
            return Ok(());
        }
        let rows: Vec<RosterRow> = self.roster.students().iter().map(RosterRow::from).collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        writeln!(self.output, "{table}")?;
        writeln!(self.output, "{} registration(s).", self.roster.len())?;
        Ok(())
    }

    /// Option 3: persist the roster, then echo what is now on disk.
    fn save_roster(&mut self) -> io::Result<()> {
        match persistence::save(&self.file, self.roster.students()) {
            Ok(()) => {
                self.show_roster()?;
                writeln!(
                    self.output,
                    "{} Saved {} registration(s) to {}.",
                    "✓".green(),
                    self.roster.len(),
                    self.file.display()
                )
            }
            Err(err) => self.report_error(
                "There was a problem writing the roster file. \
                 Check that it is not open in another program.",
                &err,
            ),
        }
    }

    // -- plumbing -----------------------------------------------------------

    /// Populate the roster from the file: absence is informational, a
    /// failure is reported and the session continues with an empty roster.
    fn load_roster(&mut self) -> io::Result<()> {
        match persistence::load(&self.file) {
            Ok(LoadResult::Loaded(students)) => {
                self.roster = Roster::from(students);
                Ok(())
            }
            Ok(LoadResult::FileAbsent) => {
                writeln!(
                    self.output,
                    "{} not found. Starting with an empty roster.",
                    self.file.display()
                )
            }
            Err(err) => {
                self.roster = Roster::new();
                self.report_error(
                    "There was a problem reading the roster file. \
                     Continuing with an empty roster.",
                    &err,
                )
            }
        }
    }

    /// Print `prompt` (no newline) and read one line. `None` means the input
    /// ended.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        // Strip only the line terminator. Interior and edge whitespace stay,
        // and name validation rejects it.
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    /// User-facing message first, then the technical chain, one `caused by:`
    /// line per source.
    fn report_error(&mut self, message: &str, err: &dyn std::error::Error) -> io::Result<()> {
        log::warn!("recovered: {err}");
        writeln!(self.output, "{}", message.red())?;
        writeln!(self.output, "  caused by: {err}")?;
        let mut source = err.source();
        while let Some(cause) = source {
            writeln!(self.output, "  caused by: {cause}")?;
            source = cause.source();
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;
    use tempfile::TempDir;

    /// Run a scripted session against `file` and return the final roster
    /// plus the full transcript.
    fn run_script(file: &Path, script: &str) -> (Roster, String) {
        let mut session = Session::new(file, Cursor::new(script.as_bytes().to_vec()), Vec::new());
        session.run().expect("in-memory session never fails");
        let Session { roster, output, .. } = session;
        (roster, String::from_utf8(output).expect("utf8 transcript"))
    }

    fn roster_file(dir: &TempDir) -> PathBuf {
        dir.path().join("Enrollments.json")
    }

    #[test]
    fn menu_choice_parses_the_four_actions() {
        assert_eq!("1".parse::<MenuChoice>(), Ok(MenuChoice::Register));
        assert_eq!("2".parse::<MenuChoice>(), Ok(MenuChoice::ShowAll));
        assert_eq!("3".parse::<MenuChoice>(), Ok(MenuChoice::Save));
        assert_eq!("4".parse::<MenuChoice>(), Ok(MenuChoice::Exit));
        assert!("9".parse::<MenuChoice>().is_err());
        assert!("".parse::<MenuChoice>().is_err());
        // Choices are taken as typed; no trimming.
        assert!(" 1".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn unknown_choice_redisplays_menu_without_changes() {
        let dir = TempDir::new().expect("tempdir");
        let file = roster_file(&dir);
        let (roster, transcript) = run_script(&file, "9\n4\n");

        assert!(roster.is_empty());
        assert!(!file.exists(), "nothing may be written without Save");
        assert!(transcript.contains("choose 1, 2, 3, or 4"), "got: {transcript}");
        assert_eq!(
            transcript.matches("Course Registration Program").count(),
            2,
            "menu must be shown again after a bad choice"
        );
    }

    #[test]
    fn register_then_view_shows_the_record() {
        let dir = TempDir::new().expect("tempdir");
        let (roster, transcript) =
            run_script(&roster_file(&dir), "1\nAda\nLovelace\nAlgorithms\n2\n4\n");

        assert_eq!(roster.len(), 1);
        assert_eq!(roster.students()[0].first_name.as_str(), "Ada");
        assert_eq!(roster.students()[0].course_name.0, "Algorithms");
        assert!(
            transcript.contains("Registered Ada Lovelace for Algorithms."),
            "got: {transcript}"
        );
        assert!(transcript.contains("Lovelace"), "table row missing");
        assert!(transcript.contains("1 registration(s)."), "got: {transcript}");
    }

    #[test]
    fn invalid_first_name_aborts_before_last_name_prompt() {
        let dir = TempDir::new().expect("tempdir");
        let (roster, transcript) = run_script(&roster_file(&dir), "1\nAda1\n4\n");

        assert!(roster.is_empty(), "rejected input must not be registered");
        assert!(
            transcript.contains("must contain only alphabetic characters"),
            "got: {transcript}"
        );
        assert!(
            !transcript.contains("Enter the student's last name"),
            "a bad first name must abort the action"
        );
    }

    #[test]
    fn whitespace_is_taken_literally_and_rejected() {
        let dir = TempDir::new().expect("tempdir");
        let (roster, transcript) = run_script(&roster_file(&dir), "1\n Ada\n4\n");

        assert!(roster.is_empty());
        assert!(
            transcript.contains("must contain only alphabetic characters"),
            "got: {transcript}"
        );
    }

    #[test]
    fn empty_course_name_is_accepted() {
        let dir = TempDir::new().expect("tempdir");
        let (roster, transcript) = run_script(&roster_file(&dir), "1\nGrace\nHopper\n\n2\n4\n");

        assert_eq!(roster.len(), 1);
        assert_eq!(roster.students()[0].course_name.0, "");
        assert!(transcript.contains("Registered Grace Hopper for ."), "got: {transcript}");
    }

    #[test]
    fn end_of_input_is_treated_as_exit() {
        let dir = TempDir::new().expect("tempdir");
        let (roster, transcript) = run_script(&roster_file(&dir), "");
        assert!(roster.is_empty());
        assert!(transcript.contains("Program ended."), "got: {transcript}");

        // Mid-register end of input also winds down cleanly.
        let (roster, transcript) = run_script(&roster_file(&dir), "1\nAda\n");
        assert!(roster.is_empty());
        assert!(transcript.contains("Program ended."), "got: {transcript}");
    }

    #[test]
    fn save_then_new_session_reloads() {
        let dir = TempDir::new().expect("tempdir");
        let file = roster_file(&dir);

        let (_, transcript) = run_script(&file, "1\nAda\nLovelace\nAlgorithms\n3\n4\n");
        assert!(file.exists());
        assert!(transcript.contains("Saved 1 registration(s)"), "got: {transcript}");

        let (roster, transcript) = run_script(&file, "2\n4\n");
        assert_eq!(roster.len(), 1);
        assert!(transcript.contains("Ada"), "reloaded roster must show");
    }

    #[test]
    fn missing_file_prints_notice() {
        let dir = TempDir::new().expect("tempdir");
        let (_, transcript) = run_script(&roster_file(&dir), "4\n");
        assert!(
            transcript.contains("not found. Starting with an empty roster."),
            "got: {transcript}"
        );
    }

    #[test]
    fn corrupt_file_reports_and_continues_empty() {
        let dir = TempDir::new().expect("tempdir");
        let file = roster_file(&dir);
        fs::write(&file, b"{ not json").expect("write garbage");

        let (roster, transcript) = run_script(&file, "4\n");
        assert!(roster.is_empty());
        assert!(transcript.contains("problem reading the roster file"), "got: {transcript}");
        assert!(transcript.contains("caused by:"), "technical detail missing");
        // Until the user saves, the unreadable file is left as it was.
        assert_eq!(fs::read(&file).expect("reread"), b"{ not json");
    }

    #[test]
    fn save_failure_is_reported_and_loop_continues() {
        let dir = TempDir::new().expect("tempdir");
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"a plain file").expect("write blocker");
        let file = blocker.join("roster.json");

        let (roster, transcript) = run_script(&file, "3\n2\n4\n");
        assert!(roster.is_empty());
        assert!(transcript.contains("problem writing the roster file"), "got: {transcript}");
        assert!(
            transcript.contains("No students registered yet."),
            "the loop must keep going after a failed save"
        );
    }
}

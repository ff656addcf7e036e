//! The interactive prompt loop.
//!
//! Books stay in memory for the whole session and are written back only
//! when the user leaves, either with an exit phrase or by closing stdin.
//! If that save fails the user is told and the session stays open.

use super::line::LineReader;
use super::render;
use otto::api::AssistantApi;
use otto::error::{AssistantError, Result};
use otto::input::{Command, ParseError};
use otto::store::DataStore;
use std::io::Write;
use tracing::{debug, warn};

const BANNER: &str = r"
I am your personal bot-assistant named
  __  ____  ____  __
 /  \(_  _)(_  _)/  \
( () ) )(    )( ( () )
 \__/ (__)  (__) \__/
";

const SEPARATOR_WIDTH: usize = 50;
const GREETING: &str = "Hello my name is Otto. How can I help you?";
const FAREWELL: &str = "Good bye!";
const COMMAND_PROMPT: &str = "Enter command:  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session<S: DataStore, L: LineReader, W: Write> {
    api: AssistantApi<S>,
    input: L,
    output: W,
}

impl<S: DataStore, L: LineReader, W: Write> Session<S, L, W> {
    pub fn new(api: AssistantApi<S>, input: L, output: W) -> Self {
        Self { api, input, output }
    }

    pub fn run(&mut self) -> Result<()> {
        self.greet()?;
        loop {
            writeln!(self.output, "{}", "-".repeat(SEPARATOR_WIDTH))?;
            let line = match self.prompt(COMMAND_PROMPT) {
                Ok(Some(line)) => line,
                // End of input counts as leaving, but there is no way to
                // retry a failed save.
                Ok(None) => {
                    return match self.api.save() {
                        Ok(()) => self.say_good_bye(),
                        Err(e) => {
                            self.report_unsaved(&e)?;
                            Err(e)
                        }
                    };
                }
                Err(e) => {
                    warn!(error = %e, "cannot read input, saving before stopping");
                    self.api.save()?;
                    return Err(e);
                }
            };
            if self.dispatch(&line)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn greet(&mut self) -> Result<()> {
        writeln!(self.output, "{}", BANNER)?;
        let report = self.api.upcoming_birthdays(None);
        render::result(&mut self.output, &report)?;
        writeln!(self.output, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        writeln!(self.output, "{}", GREETING)?;
        Ok(())
    }

    /// Runs one command line. Bad input is reported and the session goes on.
    pub fn dispatch(&mut self, line: &str) -> Result<Flow> {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(ParseError::Empty) => return Ok(Flow::Continue),
            Err(e) => {
                render::error(&mut self.output, &e.to_string())?;
                return Ok(Flow::Continue);
            }
        };
        debug!(?command, "dispatching");

        let outcome = match command {
            Command::Exit => return self.leave(),
            Command::Hello => Ok(self.api.hello()),
            Command::Help => Ok(self.api.help()),
            Command::HelpNote => Ok(self.api.help_note()),
            Command::AddContact { name, phone } => self.api.add_contact(&name, &phone),
            Command::ChangeContactPhone { name, phone } => {
                self.api.change_contact_phone(&name, &phone)
            }
            Command::ChangeContactName { old, new } => self.api.change_contact_name(&old, &new),
            Command::AddPhone { name, phone } => self.api.add_phone(&name, &phone),
            Command::AddBirthday { name, birthday } => self.api.add_birthday(&name, &birthday),
            Command::AddEmail { name, email } => self.api.add_email(&name, &email),
            Command::DeleteContact { name } => self.api.delete_contact(&name),
            Command::SearchContacts { term } => Ok(self.api.search_contacts(&term)),
            Command::ShowAllContacts => Ok(self.api.show_all_contacts()),
            Command::SearchByBirthday { days } => Ok(self.api.upcoming_birthdays(days)),
            Command::AddNote => {
                let title = self.prompt("Enter the title of the note:  ")?.unwrap_or_default();
                let text = self.prompt("Enter the content of the note: ")?.unwrap_or_default();
                let tags = self.prompt("Enter tags, separated by commas: ")?.unwrap_or_default();
                Ok(self.api.add_note(&title, &text, &tags))
            }
            Command::SearchNote { query } => Ok(self.api.search_notes(&query)),
            Command::EditNote { title, text } => Ok(self.api.edit_note(&title, &text)),
            Command::RemoveNote { title } => Ok(self.api.remove_note(&title)),
            Command::ShowNotes => Ok(self.api.show_notes()),
            Command::SortFiles { path } => self.api.sort_files(&path),
        };

        match outcome {
            Ok(result) => render::result(&mut self.output, &result)?,
            Err(e) => {
                debug!(error = %e, user_error = e.is_user_error(), "command failed");
                render::error(&mut self.output, &e.to_string())?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Saves and says good bye. A failed save keeps the session open.
    fn leave(&mut self) -> Result<Flow> {
        if let Err(e) = self.api.save() {
            self.report_unsaved(&e)?;
            return Ok(Flow::Continue);
        }
        self.say_good_bye()?;
        Ok(Flow::Exit)
    }

    fn say_good_bye(&mut self) -> Result<()> {
        writeln!(self.output, "{}", FAREWELL)?;
        self.output.flush()?;
        Ok(())
    }

    fn report_unsaved(&mut self, error: &AssistantError) -> Result<()> {
        warn!(error = %error, "saving failed");
        render::error(
            &mut self.output,
            &format!(
                "Could not save your data: {}. Fix the problem and exit again.",
                error
            ),
        )?;
        Ok(())
    }

    /// `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        Ok(self.input.read_line(text, &mut self.output)?)
    }

    #[cfg(test)]
    fn into_parts(self) -> (AssistantApi<S>, W) {
        (self.api, self.output)
    }
}

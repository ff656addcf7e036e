//! Where the prompt loop gets its lines from: a line editor with tab
//! completion of command names when stdin is a terminal, plain buffered
//! reading when input is piped.

use otto::input::COMMAND_KEYWORDS;
use reedline::{
    default_emacs_keybindings, ColumnarMenu, DefaultCompleter, Emacs, KeyCode, KeyModifiers,
    MenuBuilder, Prompt, PromptEditMode, PromptHistorySearch, Reedline, ReedlineEvent,
    ReedlineMenu, Signal,
};
use std::borrow::Cow;
use std::io::{self, BufRead, Write};
use tracing::warn;

const COMPLETION_MENU: &str = "completion_menu";

pub trait LineReader {
    /// Shows `prompt` and reads one line without its line ending. `None`
    /// means the input is finished.
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> io::Result<Option<String>>;
}

/// Reads from any buffered source. Bytes that are not valid UTF-8 are
/// replaced, so a stray byte cannot end the session.
pub struct Piped<R: BufRead> {
    input: R,
}

impl<R: BufRead> Piped<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> LineReader for Piped<R> {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> io::Result<Option<String>> {
        write!(out, "{}", prompt)?;
        out.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(out)?;
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = line {
            warn!("input line was not valid UTF-8, invalid bytes replaced");
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

/// Interactive line editor. Tab completes command names; Ctrl-D ends the
/// input and Ctrl-C clears the current line.
pub struct Editor {
    line_editor: Reedline,
}

impl Editor {
    pub fn new() -> Self {
        let keywords = COMMAND_KEYWORDS.iter().map(|k| k.to_string()).collect();
        let mut completer = DefaultCompleter::with_inclusions(&['_']).set_min_word_len(2);
        completer.insert(keywords);
        let completion_menu = ColumnarMenu::default().with_name(COMPLETION_MENU);

        let mut keybindings = default_emacs_keybindings();
        keybindings.add_binding(
            KeyModifiers::NONE,
            KeyCode::Tab,
            ReedlineEvent::UntilFound(vec![
                ReedlineEvent::Menu(COMPLETION_MENU.to_string()),
                ReedlineEvent::MenuNext,
            ]),
        );

        let line_editor = Reedline::create()
            .with_completer(Box::new(completer))
            .with_menu(ReedlineMenu::EngineCompleter(Box::new(completion_menu)))
            .with_edit_mode(Box::new(Emacs::new(keybindings)));
        Self { line_editor }
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl LineReader for Editor {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> io::Result<Option<String>> {
        out.flush()?;
        match self.line_editor.read_line(&TextPrompt(prompt))? {
            Signal::Success(line) => Ok(Some(line)),
            Signal::CtrlC => Ok(Some(String::new())),
            Signal::CtrlD => Ok(None),
        }
    }
}

struct TextPrompt<'a>(&'a str);

impl Prompt for TextPrompt<'_> {
    fn render_prompt_left(&self) -> Cow<str> {
        Cow::Borrowed(self.0)
    }

    fn render_prompt_right(&self) -> Cow<str> {
        "".into()
    }

    fn render_prompt_indicator(&self, _: PromptEditMode) -> Cow<str> {
        "".into()
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<str> {
        "... ".into()
    }

    fn render_prompt_history_search_indicator(&self, _: PromptHistorySearch) -> Cow<str> {
        "".into()
    }
}

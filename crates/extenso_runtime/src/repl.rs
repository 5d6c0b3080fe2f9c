//! The main REPL implementation.

use std::io::{self, Write};

use extenso_foundation::{Conversion, Error, ErrorKind, Result, ScaleMode};
use extenso_parser::{Converter, ConverterConfig, Normalizer};
use extenso_vocabulary::{Vocabulary, portuguese};

use crate::batch::render;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;

const HELP: &str = "\
Type a phrase such as 'cento e vinte e dois' to convert it.

  :short         use the short scale (bilião = 10^9)
  :long          use the long scale (bilião = 10^12)
  :scale         show the current scale
  :stats         show accepted and rejected counts
  :why <phrase>  convert and explain a rejection
  :why           explain the last rejection
  :help          show this message
  :quit          exit";

/// What evaluating one line of input produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    /// A phrase was converted.
    Converted(Conversion),
    /// A phrase was converted with `:why`.
    Explained(Conversion),
    /// A message from a meta command.
    Message(String),
    /// The user asked to leave.
    Quit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state (scale, counters).
    session: Session,

    /// Vocabulary used for every conversion.
    vocabulary: &'static Vocabulary,

    /// Token limit and default scale. The session scale overrides the
    /// configured one.
    config: ConverterConfig,

    /// Print the rejection reason after every sentinel.
    explain: bool,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new(portuguese::standard())?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor and the standard vocabulary.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            session: Session::new(),
            vocabulary: portuguese::standard(),
            config: ConverterConfig::default(),
            explain: false,
            show_banner: true,
            prompt: "extenso> ".to_string(),
        }
    }

    /// Sets the session for this REPL.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Sets the converter configuration. The session keeps deciding the
    /// scale, so `:short` and `:long` still apply.
    #[must_use]
    pub fn with_config(mut self, config: ConverterConfig) -> Self {
        self.config = config;
        self
    }

    /// Prints the rejection reason for every rejected phrase, as `:why`
    /// does.
    #[must_use]
    pub const fn with_explain(mut self, explain: bool) -> Self {
        self.explain = explain;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the REPL loop until EOF or `:quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            match self.read_eval_print() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    self.print_error(&e);
                }
            }
        }

        println!("\nAté logo!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        if input.trim().is_empty() {
            return Ok(true);
        }

        self.editor.add_history(&input);

        match self.eval(&input) {
            Ok(Response::Quit) => return Ok(false),
            Ok(response) => println!("{}", self.format_response(&response)),
            Err(e) => self.print_error(&e),
        }

        Ok(true)
    }

    /// Evaluates one line: a meta command or a phrase to convert.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown meta command.
    pub fn eval(&mut self, input: &str) -> Result<Response> {
        let trimmed = input.trim();
        let Some(command) = trimmed.strip_prefix(':') else {
            let conversion = self.convert(trimmed);
            return Ok(Response::Converted(conversion));
        };

        let (name, rest) = command
            .split_once(char::is_whitespace)
            .map_or((command, ""), |(name, rest)| (name, rest.trim()));

        match name {
            "short" => Ok(self.switch_scale(ScaleMode::Short)),
            "long" => Ok(self.switch_scale(ScaleMode::Long)),
            "scale" => Ok(Response::Message(format!(
                "{} scale",
                self.session.scale_mode()
            ))),
            "stats" => Ok(Response::Message(format!(
                "{} accepted, {} rejected",
                self.session.accepted(),
                self.session.rejected()
            ))),
            "why" if rest.is_empty() => match self.session.last_rejection() {
                Some(rejection) => Ok(Response::Explained(Conversion::Invalid(
                    rejection.clone(),
                ))),
                None => Ok(Response::Message("nothing rejected yet".to_string())),
            },
            "why" => Ok(Response::Explained(self.convert(rest))),
            "help" | "h" | "?" => Ok(Response::Message(HELP.to_string())),
            "quit" | "q" | "exit" => Ok(Response::Quit),
            _ => Err(Error::new(ErrorKind::Usage(format!(
                "unknown command ':{name}' (try :help)"
            )))),
        }
    }

    fn convert(&mut self, phrase: &str) -> Conversion {
        let config = self.config.with_scale_mode(self.session.scale_mode());
        let conversion = Converter::with_config(self.vocabulary, config).convert(phrase);
        tracing::debug!(
            phrase = %Normalizer::normalize(phrase),
            result = %conversion,
            "repl conversion"
        );
        self.session.record(&conversion);
        conversion
    }

    fn switch_scale(&mut self, mode: ScaleMode) -> Response {
        self.session.set_scale_mode(mode);
        Response::Message(format!("using the {mode} scale"))
    }

    fn format_response(&self, response: &Response) -> String {
        match response {
            Response::Converted(conversion @ Conversion::Number(_)) => {
                format!("\x1b[1m{}\x1b[0m", render(conversion, false))
            }
            Response::Converted(conversion) => {
                format!("\x1b[31m{}\x1b[0m", render(conversion, self.explain))
            }
            Response::Explained(conversion @ Conversion::Number(_)) => {
                format!("\x1b[1m{}\x1b[0m", render(conversion, true))
            }
            Response::Explained(conversion) => {
                format!("\x1b[31m{}\x1b[0m", render(conversion, true))
            }
            Response::Message(message) => message.clone(),
            Response::Quit => String::new(),
        }
    }

    /// Prints an error to stderr.
    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }

    /// Prints the welcome banner.
    fn print_banner(&self) {
        println!("\x1b[1;36mExtenso\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        println!(
            "Numbers in words, {} scale. Type :help for commands, Ctrl+D to exit.\n",
            self.session.scale_mode()
        );

        let _ = io::stdout().flush();
    }
}

/// One line of interactive input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// Shorten or expand the line as typed.
    Submit(&'a str),
    /// Run live validation on the rest of the line.
    Check(&'a str),
    History,
    Export,
    Help,
    Quit,
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    /// Lines starting with `:` are commands; everything else is submitted
    /// byte for byte, whitespace included.
    pub fn parse(line: &'a str) -> Self {
        let Some(command) = line.strip_prefix(':') else {
            return Self::Submit(line);
        };

        let (name, rest) = command.split_once(' ').unwrap_or((command, ""));
        match name {
            "check" => Self::Check(rest),
            "history" => Self::History,
            "export" => Self::Export,
            "help" => Self::Help,
            "quit" | "q" => Self::Quit,
            _ => Self::Unknown(name),
        }
    }
}

pub const HELP: &str = "\
Enter a URL to shorten it, or a short URL to expand it.

Commands:
  :check <url>  validate without submitting
  :history      show every shortened URL
  :export       print the history as JSON
  :help         show this message
  :quit         leave the session";

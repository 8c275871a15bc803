use gig_core::Msg;

/// A parsed line from the terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Msg(Msg),
    Redraw,
    Help,
    Quit,
    Unknown(String),
}

pub const HELP_TEXT: &str = "\
Commands:
  search <text>  filter by profession or employer
  clear          drop the search filter
  tap <id>       toggle selection of a posting
  book           book the selected postings
  ok             dismiss the current message
  list           redraw the listing
  quit           exit";

/// Blank lines yield `None`.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "search" | "/" => Command::Msg(Msg::QueryChanged(rest.to_string())),
        "clear" => Command::Msg(Msg::QueryChanged(String::new())),
        "tap" if !rest.is_empty() => Command::Msg(Msg::PostingTapped {
            id: rest.to_string(),
        }),
        "book" => Command::Msg(Msg::BookClicked),
        "ok" => Command::Msg(Msg::NoticeDismissed),
        "list" => Command::Redraw,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    };
    Some(command)
}

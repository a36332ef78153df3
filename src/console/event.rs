/// A line typed into the interactive shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Refresh,
    Search(String),
    Category(String),
    Offline,
    Online,
    Open(usize),
    Show,
    Help,
    Quit,
    Unknown(String),
    None,
}

impl From<&str> for Command {
    fn from(line: &str) -> Self {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match (word, rest) {
            ("", _) => Command::None,
            ("refresh" | "r", "") => Command::Refresh,
            ("search" | "s" | "/", text) if !text.is_empty() => Command::Search(text.to_string()),
            ("category" | "c", name) if !name.is_empty() => Command::Category(name.to_string()),
            ("offline", "") => Command::Offline,
            ("online", "") => Command::Online,
            ("open" | "o", n) => match n.parse::<usize>() {
                Ok(n) if n > 0 => Command::Open(n),
                _ => Command::Unknown(line.to_string()),
            },
            ("show" | "ls", "") => Command::Show,
            ("help" | "?", "") => Command::Help,
            ("quit" | "q" | "exit", "") => Command::Quit,
            _ => Command::Unknown(line.to_string()),
        }
    }
}

use std::str::FromStr;

/// A command typed at the main prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    List,
    Toggle,
    Delete,
    Exit,
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "add" => Ok(Command::Add),
            "list" => Ok(Command::List),
            "toggle" => Ok(Command::Toggle),
            "delete" => Ok(Command::Delete),
            "exit" => Ok(Command::Exit),
            _ => Err(UnknownCommand(input.trim().to_string())),
        }
    }
}

/// Parse a zero-based index typed by the user
pub fn parse_index(input: &str) -> Option<usize> {
    input.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("add".parse::<Command>(), Ok(Command::Add));
        assert_eq!("LIST".parse::<Command>(), Ok(Command::List));
        assert_eq!("  Toggle \n".parse::<Command>(), Ok(Command::Toggle));
        assert_eq!("DeLeTe".parse::<Command>(), Ok(Command::Delete));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Exit));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "remove".parse::<Command>(),
            Err(UnknownCommand("remove".to_string()))
        );
        assert!("".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("0"), Some(0));
        assert_eq!(parse_index(" 12\n"), Some(12));
        assert_eq!(parse_index("+1"), Some(1));
        assert_eq!(parse_index("abc"), None);
        assert_eq!(parse_index("-1"), None);
        assert_eq!(parse_index(""), None);
    }
}

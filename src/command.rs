//! Parsing of the commands typed at the demo prompt.

use selecta_ui::demos::{DemoSlot, DropdownMessage};

use crate::error::CommandError;

/// Help text printed by the `help` command.
pub const HELP: &str = "\
Commands (N is the dropdown number 1-3):
  show            draw all dropdowns
  focus N         tab onto the trigger of dropdown N
  click N         click the trigger of dropdown N
  type N TEXT     set the search text of dropdown N
  clear N         clear the search text of dropdown N
  pick N VALUE    click the result with VALUE in dropdown N
  outside         click somewhere outside every dropdown
  wait            wait for outstanding searches
  reset           rebuild all dropdowns
  help            show this help
  quit            exit";

/// A parsed prompt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show,
    Wait,
    Help,
    Quit,
    /// Forwarded to the demo page
    Message(DropdownMessage),
}

fn parse_slot(command: &'static str, arg: Option<&str>) -> Result<DemoSlot, CommandError> {
    let arg = arg.ok_or(CommandError::MissingArgument {
        command,
        expected: "a dropdown number",
    })?;
    arg.parse::<usize>()
        .ok()
        .and_then(DemoSlot::from_number)
        .ok_or_else(|| CommandError::BadSlot(arg.to_string()))
}

impl Command {
    /// Parse one line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim_start();
        let (slot_arg, tail) = match rest.split_once(char::is_whitespace) {
            Some((slot, tail)) => (Some(slot), tail.trim_start()),
            None if rest.is_empty() => (None, ""),
            None => (Some(rest), ""),
        };

        let command = match word.to_lowercase().as_str() {
            "show" => Command::Show,
            "wait" => Command::Wait,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            "outside" => Command::Message(DropdownMessage::PointerOutside),
            "reset" => Command::Message(DropdownMessage::Reset),
            "focus" => Command::Message(DropdownMessage::Focus(parse_slot("focus", slot_arg)?)),
            "click" => Command::Message(DropdownMessage::Click(parse_slot("click", slot_arg)?)),
            "clear" => Command::Message(DropdownMessage::Search(parse_slot("clear", slot_arg)?, String::new())),
            "type" => {
                let slot = parse_slot("type", slot_arg)?;
                if tail.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "type",
                        expected: "search text",
                    });
                }
                Command::Message(DropdownMessage::Search(slot, tail.to_string()))
            }
            "pick" => {
                let slot = parse_slot("pick", slot_arg)?;
                if tail.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "pick",
                        expected: "an option value",
                    });
                }
                Command::Message(DropdownMessage::Pick(slot, tail.to_string()))
            }
            _ => return Err(CommandError::Unknown(word.to_string())),
        };

        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_words() {
        assert_eq!(Command::parse("show"), Ok(Some(Command::Show)));
        assert_eq!(Command::parse("  QUIT "), Ok(Some(Command::Quit)));
        assert_eq!(Command::parse(""), Ok(None));
        assert_eq!(
            Command::parse("outside"),
            Ok(Some(Command::Message(DropdownMessage::PointerOutside)))
        );
    }

    #[test]
    fn test_parse_type_keeps_spaces() {
        assert_eq!(
            Command::parse("type 2 new york"),
            Ok(Some(Command::Message(DropdownMessage::Search(
                DemoSlot::Async,
                "new york".to_string()
            ))))
        );
    }

    #[test]
    fn test_parse_clear_and_pick() {
        assert_eq!(
            Command::parse("clear 1"),
            Ok(Some(Command::Message(DropdownMessage::Search(DemoSlot::Plain, String::new()))))
        );
        assert_eq!(
            Command::parse("pick 3 option2"),
            Ok(Some(Command::Message(DropdownMessage::Pick(
                DemoSlot::Custom,
                "option2".to_string()
            ))))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Command::parse("dance"), Err(CommandError::Unknown("dance".into())));
        assert_eq!(Command::parse("click 7"), Err(CommandError::BadSlot("7".into())));
        assert_eq!(Command::parse("click x"), Err(CommandError::BadSlot("x".into())));
        assert!(matches!(
            Command::parse("click"),
            Err(CommandError::MissingArgument { command: "click", .. })
        ));
        assert!(matches!(
            Command::parse("type 1"),
            Err(CommandError::MissingArgument { command: "type", .. })
        ));
    }
}

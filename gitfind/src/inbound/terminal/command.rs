//! Parsing of interactive session commands.

use thiserror::Error;

use crate::domain::SubResourceId;

/// Help text listing the commands understood by [`SessionCommand::parse`].
pub const HELP: &str = "\
commands:
  user <text>   set the identifier to look up (text kept as typed)
  search        look up the current identifier
  remove <id>   drop a repository from the list
  show          print the current view
  help          print this message
  quit          leave the session";

/// One user interaction event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Overwrite the identifier with the given text.
    SetIdentifier(String),
    /// Trigger a lookup of the current identifier.
    Search,
    /// Remove the sub-resource with this id.
    Remove(SubResourceId),
    /// Re-render the current view.
    Show,
    /// Print the command list.
    Help,
    /// End the session.
    Quit,
}

/// Reasons a line is not a valid command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The line was blank.
    #[error("empty command")]
    Empty,
    /// The keyword is not a known command.
    #[error("unknown command '{keyword}', try 'help'")]
    Unknown {
        /// Keyword as typed.
        keyword: String,
    },
    /// `remove` was given no id.
    #[error("'remove' needs a repository id")]
    MissingId,
    /// `remove` was given something that is not a numeric id.
    #[error("invalid repository id '{raw}'")]
    InvalidId {
        /// Argument as typed.
        raw: String,
    },
    /// A command that takes no argument was given one.
    #[error("'{keyword}' takes no argument")]
    UnexpectedArgument {
        /// Keyword as typed.
        keyword: String,
    },
}

impl SessionCommand {
    /// Parse one input line.
    ///
    /// The keyword ends at the first space. For `user` everything after that
    /// space is the identifier, untouched.
    ///
    /// # Examples
    /// ```
    /// use gitfind::inbound::terminal::SessionCommand;
    ///
    /// assert_eq!(
    ///     SessionCommand::parse("user  octocat"),
    ///     Ok(SessionCommand::SetIdentifier(" octocat".to_owned())),
    /// );
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] when the line is blank, names an unknown
    /// command, or carries a bad argument.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        if line.trim().is_empty() {
            return Err(CommandError::Empty);
        }
        let (keyword, argument) = match line.split_once(' ') {
            Some((keyword, argument)) => (keyword, Some(argument)),
            None => (line, None),
        };

        match keyword {
            "user" => Ok(Self::SetIdentifier(argument.unwrap_or_default().to_owned())),
            "remove" => parse_remove(argument),
            "search" => no_argument(keyword, argument, Self::Search),
            "show" => no_argument(keyword, argument, Self::Show),
            "help" => no_argument(keyword, argument, Self::Help),
            "quit" | "exit" => no_argument(keyword, argument, Self::Quit),
            _ => Err(CommandError::Unknown {
                keyword: keyword.to_owned(),
            }),
        }
    }
}

fn parse_remove(argument: Option<&str>) -> Result<SessionCommand, CommandError> {
    let raw = argument
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .ok_or(CommandError::MissingId)?;
    raw.parse::<SubResourceId>()
        .map(SessionCommand::Remove)
        .map_err(|_| CommandError::InvalidId {
            raw: raw.to_owned(),
        })
}

fn no_argument(
    keyword: &str,
    argument: Option<&str>,
    command: SessionCommand,
) -> Result<SessionCommand, CommandError> {
    if argument.is_some_and(|text| !text.trim().is_empty()) {
        return Err(CommandError::UnexpectedArgument {
            keyword: keyword.to_owned(),
        });
    }
    Ok(command)
}

//! Terminal presentation surface.
//!
//! Renders lookup views as text, parses user commands, and surfaces lookup
//! failures. It holds no lookup state of its own; everything goes through
//! [`ProfileLookupFlow`](crate::domain::ProfileLookupFlow).

mod command;
mod notifier;
mod render;
mod session;

pub use command::{CommandError, HELP, SessionCommand};
pub use notifier::{TerminalNotifier, notice_text};
pub use render::render;
pub use session::run_session;

/*!
 * Command Shell
 *
 * Line-oriented driver around the memory manager: parses commands, filters
 * raw input the same way the interactive form did, and renders results as
 * text or JSON.
 */

mod command;
pub mod render;
mod session;

pub use command::{is_blank, parse_block_sizes, Command, CommandError, ShowFormat, HELP_TEXT};
pub use session::{ScriptSummary, Session};

pub mod util;
pub mod args;
pub mod command;

pub use command::{parse_command, Command, PersonEdits};
pub use util::Index;

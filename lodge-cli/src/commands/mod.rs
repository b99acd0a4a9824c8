//! CLI command implementations.
//!
//! One module per subcommand:
//! - `list`: List reservations
//! - `get`: Show one reservation
//! - `create`: Book a stay
//! - `update`: Change a reservation
//! - `delete`: Cancel a reservation
//! - `check`: Check whether a period is free
//! - `calendar`: Show the occupancy of a month
//! - `completions`: Generate shell completion scripts

pub mod calendar;
pub mod check;
pub mod completions;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

pub use calendar::CalendarCommand;
pub use check::CheckCommand;
pub use completions::CompletionsCommand;
pub use create::CreateCommand;
pub use delete::DeleteCommand;
pub use get::GetCommand;
pub use list::ListCommand;
pub use update::UpdateCommand;

//! User commands

mod add;
mod current;
mod get;
mod list;

pub use add::AddUser;
pub use current::SetCurrentUser;
pub use get::GetUser;
pub use list::ListUsers;

//! List commands

mod add;
mod delete;
mod get;
mod mv;
mod update;

pub use add::AddList;
pub use delete::DeleteList;
pub use get::GetList;
pub use mv::MoveList;
pub use update::UpdateList;

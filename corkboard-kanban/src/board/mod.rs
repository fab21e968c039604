//! Board commands

mod add;
mod delete;
mod get;
mod list;
mod member;
mod update;

pub use add::AddBoard;
pub use delete::DeleteBoard;
pub use get::GetBoard;
pub use list::{BoardSort, ListBoards};
pub use member::{AddBoardMember, RemoveBoardMember};
pub use update::UpdateBoard;

//! Card commands

mod add;
mod assign;
mod delete;
mod get;
mod mv;
mod unassign;
mod update;

pub use add::AddCard;
pub use assign::AssignCard;
pub use delete::DeleteCard;
pub use get::GetCard;
pub use mv::MoveCard;
pub use unassign::UnassignCard;
pub use update::UpdateCard;

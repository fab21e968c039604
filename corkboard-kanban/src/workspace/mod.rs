//! Workspace commands

mod add;
mod current;
mod delete;
mod get;
mod list;
mod member;
mod update;

pub use add::AddWorkspace;
pub use current::SetCurrentWorkspace;
pub use delete::DeleteWorkspace;
pub use get::GetWorkspace;
pub use list::ListWorkspaces;
pub use member::{AddWorkspaceMember, RemoveWorkspaceMember};
pub use update::UpdateWorkspace;

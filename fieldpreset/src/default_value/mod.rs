//! Default value entry operations

mod delete;
mod get;
mod list;
mod set;
mod update;

pub use delete::DeleteDefault;
pub use get::GetDefault;
pub use list::ListDefaults;
pub use set::SetDefault;
pub use update::UpdateDefault;

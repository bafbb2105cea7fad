pub mod project_list;
pub mod title_bar;

pub use project_list::{ProjectList, ProjectListState};
pub use title_bar::TitleBar;

mod error_banner;
mod task_entry;
mod task_list;
mod task_list_row;
mod task_summary;
mod view_selectors;

pub use error_banner::ErrorBanner;
pub use task_entry::TaskEntry;
pub use task_list::TaskList;
pub use task_list_row::TaskListRow;
pub use task_summary::TaskSummary;
pub use view_selectors::ViewSelectors;

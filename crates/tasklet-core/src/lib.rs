//! Domain layer of the Tasklet to-do widget: the task record, its storage
//! slot, the store that owns the list, and the derived view.

pub mod config;
pub mod storage;
pub mod store;
pub mod task;
pub mod view;

pub use config::WidgetConfig;
pub use storage::{
  MemoryPort,
  TaskPort
};
pub use store::{
  Change,
  TaskStore
};
pub use task::{
  Task,
  TaskCounts
};
pub use view::{
  FilterMode,
  SortMode,
  ViewState,
  derive_view
};

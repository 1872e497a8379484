use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;
use tracing::{
  debug,
  warn
};

use crate::task::Task;

pub const DEFAULT_STORAGE_KEY: &str =
  "tasks";

/// Durable slot holding the whole task
/// list.
///
/// `load` returns `Ok(None)` when the slot
/// has never been written; malformed
/// content is an error, never an empty
/// list.
pub trait TaskPort {
  fn load(
    &self
  ) -> anyhow::Result<Option<Vec<Task>>>;

  fn save(
    &self,
    tasks: &[Task]
  ) -> anyhow::Result<()>;
}

/// Decodes the stored JSON array.
///
/// A literal `null` counts as an absent
/// slot. Text is trimmed and records with
/// blank text are dropped.
#[tracing::instrument(skip(raw), fields(bytes = raw.len()))]
pub fn decode_tasks(
  raw: &str
) -> anyhow::Result<Option<Vec<Task>>> {
  let decoded = serde_json::from_str::<
    Option<Vec<Task>>
  >(raw)
  .context(
    "failed to decode stored tasks"
  )?;

  let Some(tasks) = decoded else {
    return Ok(None);
  };

  let before = tasks.len();
  let tasks = tasks
    .into_iter()
    .filter_map(|mut task| {
      let trimmed = task.text.trim();
      if trimmed.is_empty() {
        return None;
      }
      if trimmed.len() != task.text.len()
      {
        task.text = trimmed.to_string();
      }
      Some(task)
    })
    .collect::<Vec<_>>();

  if tasks.len() != before {
    warn!(
      dropped = before - tasks.len(),
      "dropped stored tasks with blank \
       text"
    );
  }
  debug!(
    count = tasks.len(),
    "decoded stored tasks"
  );
  Ok(Some(tasks))
}

pub fn encode_tasks(
  tasks: &[Task]
) -> anyhow::Result<String> {
  serde_json::to_string(tasks)
    .context("failed to encode tasks")
}

/// In-process slot. Clones share the same
/// slot, the way every handle on browser
/// storage sees the same key.
#[derive(Debug, Clone, Default)]
pub struct MemoryPort {
  slot: Rc<RefCell<Option<String>>>
}

impl MemoryPort {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_raw(
    raw: impl Into<String>
  ) -> Self {
    Self {
      slot: Rc::new(RefCell::new(Some(
        raw.into()
      )))
    }
  }

  pub fn raw(&self) -> Option<String> {
    self.slot.borrow().clone()
  }
}

impl TaskPort for MemoryPort {
  fn load(
    &self
  ) -> anyhow::Result<Option<Vec<Task>>>
  {
    match self.slot.borrow().as_deref() {
      | Some(raw) => decode_tasks(raw),
      | None => Ok(None)
    }
  }

  fn save(
    &self,
    tasks: &[Task]
  ) -> anyhow::Result<()> {
    let json = encode_tasks(tasks)?;
    *self.slot.borrow_mut() = Some(json);
    Ok(())
  }
}

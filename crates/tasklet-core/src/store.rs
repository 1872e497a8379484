use anyhow::Context;
use tracing::{
  debug,
  info,
  warn
};
use uuid::Uuid;

use crate::storage::TaskPort;
use crate::task::{
  Task,
  TaskCounts
};

/// Result of a store mutation.
///
/// The in-memory change is always applied;
/// a failed write to the slot is carried
/// alongside it instead of replacing it.
#[derive(Debug)]
#[must_use]
pub struct Change<T> {
  pub outcome:    T,
  pub save_error: Option<anyhow::Error>
}

impl<T> Change<T> {
  fn unchanged(outcome: T) -> Self {
    Self {
      outcome,
      save_error: None
    }
  }

  pub fn is_saved(&self) -> bool {
    self.save_error.is_none()
  }

  /// Folds a failed save into an error,
  /// dropping the outcome.
  pub fn saved(self) -> anyhow::Result<T> {
    match self.save_error {
      | Some(error) => Err(error),
      | None => Ok(self.outcome)
    }
  }

  pub fn map<U>(
    self,
    f: impl FnOnce(T) -> U
  ) -> Change<U> {
    Change {
      outcome:    f(self.outcome),
      save_error: self.save_error
    }
  }
}

/// Ordered task list bound to its storage
/// slot.
///
/// Every effective mutation writes the full
/// list back through the port. No-ops
/// (blank text, out-of-range index, unknown
/// id) leave the slot untouched.
#[derive(Debug, Clone)]
pub struct TaskStore<P> {
  port:  P,
  tasks: Vec<Task>
}

impl<P: TaskPort> TaskStore<P> {
  #[tracing::instrument(skip_all)]
  pub fn open(
    port: P
  ) -> anyhow::Result<Self> {
    let tasks = port
      .load()
      .context(
        "failed to open task store"
      )?
      .unwrap_or_default();

    info!(
      count = tasks.len(),
      "opened task store"
    );
    Ok(Self { port, tasks })
  }

  /// Starts from an empty list without
  /// reading the slot.
  pub fn empty(port: P) -> Self {
    Self {
      port,
      tasks: Vec::new()
    }
  }

  pub fn tasks(&self) -> &[Task] {
    &self.tasks
  }

  pub fn len(&self) -> usize {
    self.tasks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tasks.is_empty()
  }

  pub fn get(
    &self,
    index: usize
  ) -> Option<&Task> {
    self.tasks.get(index)
  }

  pub fn position(
    &self,
    id: Uuid
  ) -> Option<usize> {
    self
      .tasks
      .iter()
      .position(|task| task.id == id)
  }

  pub fn counts(&self) -> TaskCounts {
    TaskCounts::of(&self.tasks)
  }

  #[tracing::instrument(skip(self, text))]
  pub fn add_task(
    &mut self,
    text: &str
  ) -> Change<Option<Uuid>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
      debug!("ignored blank task text");
      return Change::unchanged(None);
    }

    let task = Task::new_pending(trimmed);
    let id = task.id;
    self.tasks.push(task);
    debug!(%id, count = self.tasks.len(), "added task");
    self.persist(Some(id))
  }

  #[tracing::instrument(skip(self))]
  pub fn remove_task(
    &mut self,
    index: usize
  ) -> Change<bool> {
    if index >= self.tasks.len() {
      debug!(
        len = self.tasks.len(),
        "remove index out of range"
      );
      return Change::unchanged(false);
    }

    let task = self.tasks.remove(index);
    debug!(id = %task.id, count = self.tasks.len(), "removed task");
    self.persist(true)
  }

  #[tracing::instrument(skip(self))]
  pub fn toggle_completion(
    &mut self,
    index: usize
  ) -> Change<bool> {
    let Some(task) =
      self.tasks.get_mut(index)
    else {
      debug!(
        len = self.tasks.len(),
        "toggle index out of range"
      );
      return Change::unchanged(false);
    };

    task.toggle();
    debug!(
      id = %task.id,
      completed = task.completed,
      "toggled task"
    );
    self.persist(true)
  }

  pub fn remove_by_id(
    &mut self,
    id: Uuid
  ) -> Change<bool> {
    match self.position(id) {
      | Some(index) => {
        self.remove_task(index)
      }
      | None => {
        debug!(%id, "remove of unknown task");
        Change::unchanged(false)
      }
    }
  }

  pub fn toggle_by_id(
    &mut self,
    id: Uuid
  ) -> Change<bool> {
    match self.position(id) {
      | Some(index) => {
        self.toggle_completion(index)
      }
      | None => {
        debug!(%id, "toggle of unknown task");
        Change::unchanged(false)
      }
    }
  }

  fn persist<T>(
    &self,
    outcome: T
  ) -> Change<T> {
    let save_error = self
      .port
      .save(&self.tasks)
      .context("failed to save tasks")
      .err();

    if let Some(error) = &save_error {
      warn!(
        error = %format!("{error:#}"),
        count = self.tasks.len(),
        "task change kept in memory only"
      );
    }
    Change {
      outcome,
      save_error
    }
  }
}

#[cfg(test)]
mod tests {
  use anyhow::bail;

  use super::TaskStore;
  use crate::storage::{
    MemoryPort,
    TaskPort
  };
  use crate::task::Task;

  #[derive(Debug, Clone)]
  struct FullPort;

  impl TaskPort for FullPort {
    fn load(
      &self
    ) -> anyhow::Result<Option<Vec<Task>>>
    {
      Ok(None)
    }

    fn save(
      &self,
      _tasks: &[Task]
    ) -> anyhow::Result<()> {
      bail!("storage quota exceeded")
    }
  }

  fn store_with(
    texts: &[&str]
  ) -> TaskStore<MemoryPort> {
    let mut store =
      TaskStore::empty(MemoryPort::new());
    for text in texts {
      store.add_task(text).saved().unwrap();
    }
    store
  }

  fn texts(
    store: &TaskStore<MemoryPort>
  ) -> Vec<&str> {
    store
      .tasks()
      .iter()
      .map(|task| task.text.as_str())
      .collect()
  }

  #[test]
  fn add_appends_trimmed_pending_task() {
    let mut store = store_with(&["a"]);
    let id = store
      .add_task("  Buy milk \t")
      .saved()
      .unwrap()
      .unwrap();

    assert_eq!(store.len(), 2);
    let last = &store.tasks()[1];
    assert_eq!(last.id, id);
    assert_eq!(last.text, "Buy milk");
    assert!(!last.completed);
  }

  #[test]
  fn blank_add_is_ignored_and_not_saved()
  {
    let port = MemoryPort::new();
    let mut store =
      TaskStore::empty(port.clone());

    assert_eq!(
      store.add_task("").saved().unwrap(),
      None
    );
    assert_eq!(
      store.add_task("   ").saved().unwrap(),
      None
    );
    assert!(store.is_empty());
    assert!(port.raw().is_none());
  }

  #[test]
  fn toggle_twice_restores_flag() {
    let mut store =
      store_with(&["a", "b", "c"]);
    let before = store.tasks().to_vec();

    assert!(
      store.toggle_completion(1).saved().unwrap()
    );
    assert!(store.tasks()[1].completed);
    assert_eq!(
      store.tasks()[0],
      before[0]
    );
    assert_eq!(
      store.tasks()[2],
      before[2]
    );

    assert!(
      store.toggle_completion(1).saved().unwrap()
    );
    assert_eq!(store.tasks(), &before[..]);
  }

  #[test]
  fn remove_keeps_order_of_the_rest() {
    let mut store =
      store_with(&["a", "b", "c", "d"]);

    assert!(store.remove_task(1).saved().unwrap());
    assert_eq!(
      texts(&store),
      vec!["a", "c", "d"]
    );
  }

  #[test]
  fn out_of_range_index_is_a_no_op() {
    let port = MemoryPort::new();
    let mut store =
      TaskStore::empty(port.clone());
    store.add_task("a").saved().unwrap();
    let saved = port.raw();

    assert!(!store.remove_task(1).saved().unwrap());
    assert!(
      !store.toggle_completion(7).saved().unwrap()
    );
    assert_eq!(store.len(), 1);
    assert!(!store.tasks()[0].completed);
    assert_eq!(port.raw(), saved);
  }

  #[test]
  fn id_keyed_mutations_follow_the_task()
  {
    let mut store =
      store_with(&["a", "b", "c"]);
    let b = store.tasks()[1].id;
    let c = store.tasks()[2].id;

    assert!(store.remove_task(0).saved().unwrap());
    assert!(store.toggle_by_id(c).saved().unwrap());
    assert!(store.tasks()[1].completed);

    assert!(store.remove_by_id(b).saved().unwrap());
    assert_eq!(texts(&store), vec!["c"]);
    assert!(
      !store.remove_by_id(b).saved().unwrap()
    );
    assert!(
      !store.toggle_by_id(b).saved().unwrap()
    );
  }

  #[test]
  fn every_mutation_saves_the_full_list() {
    let port = MemoryPort::new();
    let mut store =
      TaskStore::empty(port.clone());

    store.add_task("a").saved().unwrap();
    store.add_task("b").saved().unwrap();
    store.toggle_completion(0).saved().unwrap();
    assert_eq!(
      port.load().unwrap().as_deref(),
      Some(store.tasks())
    );

    store.remove_task(0).saved().unwrap();
    assert_eq!(
      port.load().unwrap().as_deref(),
      Some(store.tasks())
    );
  }

  #[test]
  fn open_reads_existing_slot() {
    let port = MemoryPort::new();
    let tasks = vec![
      Task::new_pending("a"),
      Task::new_pending("b"),
    ];
    port.save(&tasks).unwrap();

    let store =
      TaskStore::open(port).unwrap();
    assert_eq!(store.tasks(), &tasks[..]);
  }

  #[test]
  fn open_on_absent_slot_is_empty() {
    let store =
      TaskStore::open(MemoryPort::new())
        .unwrap();
    assert!(store.is_empty());
  }

  #[test]
  fn open_on_corrupt_slot_fails_without_overwriting()
   {
    let port =
      MemoryPort::with_raw("[{\"text\":");
    let error =
      TaskStore::open(port.clone())
        .unwrap_err();

    assert!(
      format!("{error:#}")
        .contains("failed to open task store")
    );
    assert_eq!(
      port.raw().as_deref(),
      Some("[{\"text\":")
    );
  }

  #[test]
  fn legacy_slot_loads_and_is_rewritten_with_ids()
   {
    let port = MemoryPort::with_raw(
      r#"[{"text":"Buy milk","completed":false},{"text":"Walk dog","completed":true}]"#
    );
    let mut store =
      TaskStore::open(port.clone())
        .unwrap();
    assert_eq!(
      texts(&store),
      vec!["Buy milk", "Walk dog"]
    );

    store.toggle_completion(0).saved().unwrap();
    let raw = port.raw().unwrap();
    assert!(raw.contains("\"id\""));
    assert_eq!(
      TaskStore::open(port)
        .unwrap()
        .tasks(),
      store.tasks()
    );
  }

  #[test]
  fn failed_save_keeps_the_change_in_memory()
   {
    let mut store =
      TaskStore::empty(FullPort);

    let added = store.add_task("Buy milk");
    assert!(!added.is_saved());
    let id = added.outcome.unwrap();
    assert_eq!(
      store.get(0).map(|task| task.id),
      Some(id)
    );

    let toggled =
      store.toggle_completion(0);
    assert!(toggled.outcome);
    assert!(
      store.get(0).unwrap().completed
    );

    let error = store
      .remove_by_id(id)
      .saved()
      .unwrap_err();
    assert!(
      format!("{error:#}").contains(
        "failed to save tasks: storage \
         quota exceeded"
      )
    );
    assert!(store.get(0).is_none());
  }

  #[test]
  fn no_op_does_not_touch_a_failing_port()
  {
    let mut store =
      TaskStore::empty(FullPort);

    let blank = store.add_task("  ");
    assert!(blank.is_saved());
    assert_eq!(blank.outcome, None);
    assert!(
      store.toggle_completion(0).is_saved()
    );
  }
}

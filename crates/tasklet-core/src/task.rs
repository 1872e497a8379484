use serde::{
  Deserialize,
  Serialize
};
use uuid::Uuid;

/// A single to-do item.
///
/// Records written before identifiers existed carry only `text` and
/// `completed`; they receive a fresh id when decoded.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct Task {
  #[serde(default = "fresh_id")]
  pub id:        Uuid,
  pub text:      String,
  pub completed: bool
}

fn fresh_id() -> Uuid {
  Uuid::new_v4()
}

impl Task {
  pub fn new_pending(
    text: impl Into<String>
  ) -> Self {
    Self {
      id:        fresh_id(),
      text:      text.into(),
      completed: false
    }
  }

  pub fn toggle(&mut self) {
    self.completed = !self.completed;
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub struct TaskCounts {
  pub total:     usize,
  pub completed: usize,
  pub pending:   usize
}

impl TaskCounts {
  pub fn of(tasks: &[Task]) -> Self {
    let completed = tasks
      .iter()
      .filter(|task| task.completed)
      .count();
    Self {
      total: tasks.len(),
      completed,
      pending: tasks.len() - completed
    }
  }
}

#[cfg(test)]
mod tests {
  use super::{
    Task,
    TaskCounts
  };

  #[test]
  fn legacy_record_without_id_gets_one()
  {
    let task: Task = serde_json::from_str(
      r#"{"text":"Buy milk","completed":true}"#
    )
    .unwrap();

    assert_eq!(task.text, "Buy milk");
    assert!(task.completed);
    assert!(!task.id.is_nil());
  }

  #[test]
  fn new_pending_tasks_have_distinct_ids()
  {
    let a = Task::new_pending("a");
    let b = Task::new_pending("a");
    assert_ne!(a.id, b.id);
    assert!(!a.completed);
  }

  #[test]
  fn counts_split_completed_and_pending()
  {
    let mut done = Task::new_pending("x");
    done.toggle();
    let tasks = vec![
      done,
      Task::new_pending("y"),
      Task::new_pending("z"),
    ];

    assert_eq!(
      TaskCounts::of(&tasks),
      TaskCounts {
        total:     3,
        completed: 1,
        pending:   2
      }
    );
  }
}

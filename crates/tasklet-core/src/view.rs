use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use deunicode::deunicode;
use uuid::Uuid;

use crate::storage::TaskPort;
use crate::store::{
  Change,
  TaskStore
};
use crate::task::Task;

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub enum SortMode {
  #[default]
  Default,
  Alphabetical,
  Completed
}

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub enum FilterMode {
  #[default]
  All,
  Completed,
  Pending
}

impl SortMode {
  pub const ALL: [SortMode; 3] = [
    SortMode::Default,
    SortMode::Alphabetical,
    SortMode::Completed
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      | SortMode::Default => "default",
      | SortMode::Alphabetical => {
        "alphabetical"
      }
      | SortMode::Completed => "completed"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | SortMode::Default => "Sort by",
      | SortMode::Alphabetical => {
        "Alphabetical"
      }
      | SortMode::Completed => {
        "Completion Status"
      }
    }
  }

  pub fn compare(
    self,
    a: &Task,
    b: &Task
  ) -> Ordering {
    match self {
      | SortMode::Default => {
        Ordering::Equal
      }
      | SortMode::Alphabetical => {
        collate(&a.text, &b.text)
      }
      | SortMode::Completed => {
        match (a.completed, b.completed) {
          | (false, true) => Ordering::Less,
          | (true, false) => {
            Ordering::Greater
          }
          | _ => Ordering::Equal
        }
      }
    }
  }
}

impl FilterMode {
  pub const ALL: [FilterMode; 3] = [
    FilterMode::All,
    FilterMode::Completed,
    FilterMode::Pending
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      | FilterMode::All => "all",
      | FilterMode::Completed => {
        "completed"
      }
      | FilterMode::Pending => "pending"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | FilterMode::All => "All",
      | FilterMode::Completed => {
        "Completed"
      }
      | FilterMode::Pending => "Pending"
    }
  }

  pub fn matches(
    self,
    task: &Task
  ) -> bool {
    match self {
      | FilterMode::All => true,
      | FilterMode::Completed => {
        task.completed
      }
      | FilterMode::Pending => {
        !task.completed
      }
    }
  }
}

impl FromStr for SortMode {
  type Err = anyhow::Error;

  fn from_str(
    value: &str
  ) -> Result<Self, Self::Err> {
    SortMode::ALL
      .into_iter()
      .find(|mode| mode.as_str() == value)
      .ok_or_else(|| {
        anyhow!("unknown sort mode: {value}")
      })
  }
}

impl FromStr for FilterMode {
  type Err = anyhow::Error;

  fn from_str(
    value: &str
  ) -> Result<Self, Self::Err> {
    FilterMode::ALL
      .into_iter()
      .find(|mode| mode.as_str() == value)
      .ok_or_else(|| {
        anyhow!(
          "unknown filter mode: {value}"
        )
      })
  }
}

impl fmt::Display for SortMode {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl fmt::Display for FilterMode {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Locale-ish text ordering: accents and
/// case are ignored first, then lowercase
/// sorts before uppercase, then raw text.
///
/// Characters group as in the Unicode root
/// collation: whitespace and punctuation
/// come before digits, digits before
/// letters.
pub fn collate(
  a: &str,
  b: &str
) -> Ordering {
  fold(a)
    .cmp(&fold(b))
    .then_with(|| {
      a.to_lowercase()
        .cmp(&b.to_lowercase())
    })
    .then_with(|| lowercase_first(a, b))
    .then_with(|| a.cmp(b))
}

/// ASCII punctuation and symbols in root
/// collation order.
const PUNCTUATION_ORDER: &str =
  "_-,;:!?.'\"()[]{}@*/\\&#%`^$+<=>|~";

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
)]
enum CharClass {
  Space,
  Punctuation,
  Symbol,
  Digit,
  Letter
}

fn collation_key(
  c: char
) -> (CharClass, usize, char) {
  if c.is_whitespace() {
    return (CharClass::Space, 0, c);
  }
  if let Some(rank) =
    PUNCTUATION_ORDER.find(c)
  {
    return (
      CharClass::Punctuation,
      rank,
      c
    );
  }

  let class = if c.is_numeric() {
    CharClass::Digit
  } else if c.is_alphabetic() {
    CharClass::Letter
  } else {
    CharClass::Symbol
  };
  (class, 0, c)
}

fn fold(
  text: &str
) -> Vec<(CharClass, usize, char)> {
  deunicode(text)
    .to_lowercase()
    .chars()
    .map(collation_key)
    .collect()
}

/// Copies the list, sorts it (stable), then
/// filters it.
pub fn derive_view(
  tasks: &[Task],
  sort: SortMode,
  filter: FilterMode
) -> Vec<Task> {
  let mut view = tasks.to_vec();
  if sort != SortMode::Default {
    view.sort_by(|a, b| sort.compare(a, b));
  }
  view.retain(|task| filter.matches(task));
  view
}

/// Transient selections and the pending
/// input text. Never persisted.
#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
)]
pub struct ViewState {
  pub sort:   SortMode,
  pub filter: FilterMode,
  pub input:  String
}

impl ViewState {
  pub fn new(
    sort: SortMode,
    filter: FilterMode
  ) -> Self {
    Self {
      sort,
      filter,
      input: String::new()
    }
  }

  pub fn set_sort(
    &mut self,
    sort: SortMode
  ) {
    self.sort = sort;
  }

  pub fn set_filter(
    &mut self,
    filter: FilterMode
  ) {
    self.filter = filter;
  }

  pub fn set_input(
    &mut self,
    input: impl Into<String>
  ) {
    self.input = input.into();
  }

  /// Adds the pending input as a task. The
  /// input is cleared whenever a task was
  /// appended, even if saving it failed.
  pub fn submit<P: TaskPort>(
    &mut self,
    store: &mut TaskStore<P>
  ) -> Change<Option<Uuid>> {
    let change = store.add_task(&self.input);
    if change.outcome.is_some() {
      self.input.clear();
    }
    change
  }

  pub fn project<P: TaskPort>(
    &self,
    store: &TaskStore<P>
  ) -> Vec<Task> {
    derive_view(
      store.tasks(),
      self.sort,
      self.filter
    )
  }
}

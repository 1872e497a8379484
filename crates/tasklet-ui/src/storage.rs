use anyhow::anyhow;
use tasklet_core::Task;
use tasklet_core::TaskPort;
use tasklet_core::storage::{
  decode_tasks,
  encode_tasks
};

/// `window.localStorage` slot holding the
/// task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalStoragePort {
  key: String
}

impl LocalStoragePort {
  pub fn new(
    key: impl Into<String>
  ) -> Self {
    Self { key: key.into() }
  }
}

fn local_storage()
-> Option<web_sys::Storage> {
  web_sys::window().and_then(|window| {
    window
      .local_storage()
      .ok()
      .flatten()
  })
}

impl TaskPort for LocalStoragePort {
  fn load(
    &self
  ) -> anyhow::Result<Option<Vec<Task>>>
  {
    let Some(storage) = local_storage()
    else {
      tracing::warn!(
        key = %self.key,
        "local storage unavailable; \
         starting empty"
      );
      return Ok(None);
    };

    let stored = storage
      .get_item(&self.key)
      .map_err(|error| {
        anyhow!(
          "failed reading local storage \
           key {}: {error:?}",
          self.key
        )
      })?;

    match stored {
      | Some(raw) => decode_tasks(&raw),
      | None => Ok(None)
    }
  }

  fn save(
    &self,
    tasks: &[Task]
  ) -> anyhow::Result<()> {
    let storage = local_storage()
      .ok_or_else(|| {
        anyhow!(
          "local storage unavailable"
        )
      })?;
    let json = encode_tasks(tasks)?;

    storage
      .set_item(&self.key, &json)
      .map_err(|error| {
        anyhow!(
          "failed writing local storage \
           key {}: {error:?}",
          self.key
        )
      })?;

    tracing::debug!(
      key = %self.key,
      count = tasks.len(),
      "saved tasks to local storage"
    );
    Ok(())
  }
}

use gloo::console::log;
use tasklet_core::{
  Change,
  FilterMode,
  SortMode,
  TaskStore,
  ViewState,
  WidgetConfig
};
use uuid::Uuid;
use yew::{
  Callback,
  Html,
  TargetCast,
  UseStateHandle,
  function_component,
  html,
  use_state
};

use crate::components::{
  ErrorBanner,
  TaskEntry,
  TaskList,
  TaskSummary,
  ViewSelectors
};
use crate::storage::LocalStoragePort;

const WIDGET_CONFIG_TOML: &str =
  include_str!("../assets/tasklet.toml");

#[derive(Clone)]
struct WidgetState {
  store: TaskStore<LocalStoragePort>,
  view:  ViewState,
  error: Option<String>
}

impl WidgetState {
  fn open(config: &WidgetConfig) -> Self {
    let view = ViewState::new(
      config.sort(),
      config.filter()
    );
    let port = LocalStoragePort::new(
      config.storage_key.clone()
    );

    match TaskStore::open(port.clone()) {
      | Ok(store) => {
        Self {
          store,
          view,
          error: None
        }
      }
      | Err(error) => {
        tracing::error!(
          error = %format!("{error:#}"),
          "stored tasks unreadable; \
           starting empty"
        );
        Self {
          store: TaskStore::empty(port),
          view,
          error: Some(format!(
            "Stored tasks could not be \
             read: {error:#}"
          ))
        }
      }
    }
  }

  fn record<T>(
    &mut self,
    change: Change<T>
  ) -> T {
    if let Some(error) = change.save_error {
      tracing::error!(
        error = %format!("{error:#}"),
        "task update failed"
      );
      self.error = Some(format!(
        "Changes could not be saved: \
         {error:#}"
      ));
    }
    change.outcome
  }
}

fn load_widget_config() -> WidgetConfig {
  WidgetConfig::load_or_default(
    WIDGET_CONFIG_TOML
  )
}

fn update(
  widget: &UseStateHandle<WidgetState>,
  action: impl FnOnce(&mut WidgetState)
) {
  let mut next = (**widget).clone();
  action(&mut next);
  widget.set(next);
}

fn submit(
  widget: &UseStateHandle<WidgetState>
) {
  update(widget, |state| {
    let change = state
      .view
      .submit(&mut state.store)
      .map(|added| {
        added.map(|id| id.to_string())
      });
    if let Some(id) = state.record(change)
    {
      ui_debug("task.added", &id);
    }
  });
}

#[function_component(App)]
pub fn app() -> Html {
  let config =
    use_state(load_widget_config);
  let widget = {
    let config_snapshot =
      (*config).clone();
    use_state(move || {
      WidgetState::open(&config_snapshot)
    })
  };

  let on_input = {
    let widget = widget.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        update(&widget, |state| {
          state.view.set_input(input.value());
        });
      }
    )
  };

  let on_add = {
    let widget = widget.clone();
    Callback::from(
      move |_: web_sys::MouseEvent| {
        submit(&widget);
      }
    )
  };

  let on_keydown = {
    let widget = widget.clone();
    Callback::from(
      move |e: web_sys::KeyboardEvent| {
        if e.key() == "Enter"
          && !e.is_composing()
        {
          submit(&widget);
        }
      }
    )
  };

  let on_sort_change = {
    let widget = widget.clone();
    Callback::from(
      move |e: web_sys::Event| {
        let select: web_sys::HtmlSelectElement =
          e.target_unchecked_into();
        match select.value().parse::<SortMode>() {
          | Ok(sort) => {
            ui_debug(
              "view.sort",
              &select.value()
            );
            update(&widget, |state| {
              state.view.set_sort(sort);
            });
          }
          | Err(error) => {
            tracing::warn!(%error, "ignored sort selection");
          }
        }
      }
    )
  };

  let on_filter_change = {
    let widget = widget.clone();
    Callback::from(
      move |e: web_sys::Event| {
        let select: web_sys::HtmlSelectElement =
          e.target_unchecked_into();
        match select.value().parse::<FilterMode>() {
          | Ok(filter) => {
            ui_debug(
              "view.filter",
              &select.value()
            );
            update(&widget, |state| {
              state.view.set_filter(filter);
            });
          }
          | Err(error) => {
            tracing::warn!(%error, "ignored filter selection");
          }
        }
      }
    )
  };

  let on_toggle = {
    let widget = widget.clone();
    Callback::from(move |id: Uuid| {
      ui_debug(
        "task.toggle",
        &id.to_string()
      );
      update(&widget, |state| {
        let change =
          state.store.toggle_by_id(id);
        state.record(change);
      });
    })
  };

  let on_remove = {
    let widget = widget.clone();
    Callback::from(move |id: Uuid| {
      ui_debug(
        "task.remove",
        &id.to_string()
      );
      update(&widget, |state| {
        let change =
          state.store.remove_by_id(id);
        state.record(change);
      });
    })
  };

  let on_dismiss_error = {
    let widget = widget.clone();
    Callback::from(
      move |_: web_sys::MouseEvent| {
        update(&widget, |state| {
          state.error = None;
        });
      }
    )
  };

  let visible =
    widget.view.project(&widget.store);

  html! {
      <div class="todo-list">
          <h1>{ config.title.clone() }</h1>
          <ErrorBanner
              message={widget.error.clone()}
              on_dismiss={on_dismiss_error}
          />
          <TaskEntry
              value={widget.view.input.clone()}
              placeholder={config.placeholder.clone()}
              on_input={on_input}
              on_keydown={on_keydown}
              on_add={on_add}
          />
          <ViewSelectors
              sort={widget.view.sort}
              filter={widget.view.filter}
              on_sort_change={on_sort_change}
              on_filter_change={on_filter_change}
          />
          <TaskList
              tasks={visible}
              on_toggle={on_toggle}
              on_remove={on_remove}
          />
          <TaskSummary counts={widget.store.counts()} />
      </div>
  }
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}

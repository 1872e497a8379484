use tasklet_core::Task;
use uuid::Uuid;
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub task:      Task,
  pub on_toggle: Callback<Uuid>,
  pub on_remove: Callback<Uuid>
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let id = props.task.id;
  let on_toggle =
    props.on_toggle.clone();
  let on_remove =
    props.on_remove.clone();
  let class = classes!(
    "row",
    props
      .task
      .completed
      .then_some("completed")
  );

  html! {
      <li class={class}>
          <span class="text" onclick={move |_| on_toggle.emit(id)}>
              { &props.task.text }
          </span>
          <button
              class="btn remove"
              onclick={move |e: yew::MouseEvent| {
                  e.stop_propagation();
                  on_remove.emit(id);
              }}
          >
              { "Remove" }
          </button>
      </li>
  }
}

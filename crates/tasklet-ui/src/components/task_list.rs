use tasklet_core::Task;
use uuid::Uuid;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TaskListRow;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub tasks:     Vec<Task>,
  pub on_toggle: Callback<Uuid>,
  pub on_remove: Callback<Uuid>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  html! {
      <ul class="tasks">
          {
              for props.tasks.iter().cloned().map(|task| html! {
                  <TaskListRow
                      key={task.id.to_string()}
                      task={task}
                      on_toggle={props.on_toggle.clone()}
                      on_remove={props.on_remove.clone()}
                  />
              })
          }
      </ul>
  }
}

use tasklet_core::TaskCounts;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskSummaryProps {
  pub counts: TaskCounts
}

#[function_component(TaskSummary)]
pub fn task_summary(
  props: &TaskSummaryProps
) -> Html {
  let counts = props.counts;
  let noun = if counts.total == 1 {
    "task"
  } else {
    "tasks"
  };

  html! {
      <div class="summary">
          { format!("{} {noun}, {} completed", counts.total, counts.completed) }
      </div>
  }
}

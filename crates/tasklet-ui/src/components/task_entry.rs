use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskEntryProps {
  pub value:       String,
  pub placeholder: String,
  pub on_input:
    Callback<web_sys::InputEvent>,
  pub on_keydown:
    Callback<web_sys::KeyboardEvent>,
  pub on_add:
    Callback<web_sys::MouseEvent>
}

#[function_component(TaskEntry)]
pub fn task_entry(
  props: &TaskEntryProps
) -> Html {
  html! {
      <div class="entry">
          <input
              type="text"
              value={props.value.clone()}
              placeholder={props.placeholder.clone()}
              oninput={props.on_input.clone()}
              onkeydown={props.on_keydown.clone()}
          />
          <button class="btn" onclick={props.on_add.clone()}>{ "Add Task" }</button>
      </div>
  }
}

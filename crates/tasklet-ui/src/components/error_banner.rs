use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
  pub message:    Option<String>,
  pub on_dismiss:
    Callback<web_sys::MouseEvent>
}

#[function_component(ErrorBanner)]
pub fn error_banner(
  props: &ErrorBannerProps
) -> Html {
  let Some(message) =
    props.message.as_ref()
  else {
    return html! {};
  };

  html! {
      <div class="error" role="alert">
          <span>{ message }</span>
          <button class="btn" onclick={props.on_dismiss.clone()}>{ "Dismiss" }</button>
      </div>
  }
}

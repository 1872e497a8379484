use tasklet_core::{
  FilterMode,
  SortMode
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ViewSelectorsProps {
  pub sort:             SortMode,
  pub filter:           FilterMode,
  pub on_sort_change:
    Callback<web_sys::Event>,
  pub on_filter_change:
    Callback<web_sys::Event>
}

#[function_component(ViewSelectors)]
pub fn view_selectors(
  props: &ViewSelectorsProps
) -> Html {
  html! {
      <div class="filters">
          <select
              value={props.sort.as_str()}
              onchange={props.on_sort_change.clone()}
          >
              {
                  for SortMode::ALL.into_iter().map(|mode| html! {
                      <option value={mode.as_str()} selected={mode == props.sort}>
                          { mode.label() }
                      </option>
                  })
              }
          </select>
          <select
              value={props.filter.as_str()}
              onchange={props.on_filter_change.clone()}
          >
              {
                  for FilterMode::ALL.into_iter().map(|mode| html! {
                      <option value={mode.as_str()} selected={mode == props.filter}>
                          { mode.label() }
                      </option>
                  })
              }
          </select>
      </div>
  }
}

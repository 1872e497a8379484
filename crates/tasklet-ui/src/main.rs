mod app;
mod components;
mod storage;

const MOUNT_ID: &str = "tasklet";

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  tracing::info!(
    version = env!("CARGO_PKG_VERSION"),
    mount = MOUNT_ID,
    "starting Tasklet widget"
  );

  let Some(mount) = web_sys::window()
    .and_then(|window| window.document())
    .and_then(|document| {
      document.get_element_by_id(MOUNT_ID)
    })
  else {
    tracing::error!(
      mount = MOUNT_ID,
      "mount element missing; widget \
       not started"
    );
    return;
  };

  yew::Renderer::<app::App>::with_root(
    mount
  )
  .render();
}

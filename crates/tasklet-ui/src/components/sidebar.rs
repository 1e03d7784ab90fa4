use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
  pub open:       bool,
  pub user_name:  String,
  pub avatar_url: String,
  pub on_close:   Callback<MouseEvent>,
  pub on_logout:  Callback<MouseEvent>
}

#[function_component(Sidebar)]
pub fn sidebar(
  props: &SidebarProps
) -> Html {
  let make_item = |label: &str| {
    html! {
        <div class="item">{ label.to_string() }</div>
    }
  };

  html! {
      <>
          {
              if props.open {
                  html! { <div class="sidebar-overlay" onclick={props.on_close.clone()}></div> }
              } else {
                  html! {}
              }
          }
          <aside
              class={classes!("sidebar", (!props.open).then_some("closed"))}
              onclick={|e: MouseEvent| e.stop_propagation()}
          >
              <div class="sidebar-header">
                  <img class="avatar" src={props.avatar_url.clone()} alt={props.user_name.clone()} />
                  <div class="sidebar-name">{ props.user_name.clone() }</div>
                  <button class="icon-button" title="Close menu" onclick={props.on_close.clone()}>
                      { "×" }
                  </button>
              </div>
              { make_item("Templates") }
              { make_item("Categories") }
              { make_item("Analytics") }
              { make_item("Settings") }
              <button class="btn logout" onclick={props.on_logout.clone()}>{ "Log out" }</button>
          </aside>
      </>
  }
}

use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
  pub greeting:        String,
  pub date_line:       String,
  pub time_line:       String,
  pub user_name:       String,
  pub avatar_url:      String,
  pub on_sidebar_open: Callback<MouseEvent>
}

#[function_component(Header)]
pub fn header(
  props: &HeaderProps
) -> Html {
  html! {
      <header class="topbar">
          <button class="menu-button" title="Open menu" onclick={props.on_sidebar_open.clone()}>
              { "☰" }
          </button>
          <div class="topbar-text">
              <div class="greeting">{ format!("{}, {}", props.greeting, props.user_name) }</div>
              <div class="clock">
                  <span>{ props.date_line.clone() }</span>
                  <span class="clock-time">{ props.time_line.clone() }</span>
              </div>
          </div>
          <img class="avatar" src={props.avatar_url.clone()} alt={props.user_name.clone()} />
      </header>
  }
}

use web_sys::{
  HtmlInputElement,
  InputEvent,
  KeyboardEvent,
  SubmitEvent
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  TargetCast,
  function_component,
  html,
  use_state
};

use crate::app::keys::is_submit_key;

#[derive(Properties, PartialEq)]
pub struct AddTaskModalProps {
  pub on_submit:
    Callback<(String, Option<String>)>,
  pub on_close: Callback<MouseEvent>
}

/// Floating form for a new task. Drafts
/// live only while the modal is mounted.
#[function_component(AddTaskModal)]
pub fn add_task_modal(
  props: &AddTaskModalProps
) -> Html {
  let draft_title = use_state(String::new);
  let draft_date = use_state(String::new);

  let submit = {
    let draft_title = draft_title.clone();
    let draft_date = draft_date.clone();
    let on_submit = props.on_submit.clone();
    move || {
      on_submit.emit((
        (*draft_title).clone(),
        optional_text(&draft_date)
      ));
    }
  };

  let on_title_input = {
    let draft_title = draft_title.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      draft_title.set(input.value());
    })
  };
  let on_date_input = {
    let draft_date = draft_date.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      draft_date.set(input.value());
    })
  };
  let on_title_keydown = {
    let submit = submit.clone();
    Callback::from(move |e: KeyboardEvent| {
      if is_submit_key(&e.key()) {
        e.prevent_default();
        submit();
      }
    })
  };
  let on_form_submit =
    Callback::from(move |e: SubmitEvent| {
      e.prevent_default();
      submit();
    });

  html! {
      <div class="modal-backdrop" onclick={props.on_close.clone()}>
          <form
              class="modal"
              onclick={|e: MouseEvent| e.stop_propagation()}
              onsubmit={on_form_submit}
          >
              <div class="header">{ "New task" }</div>
              <input
                  class="input"
                  type="text"
                  placeholder="What do you need to do?"
                  value={(*draft_title).clone()}
                  oninput={on_title_input}
                  onkeydown={on_title_keydown}
              />
              <input
                  class="input"
                  type="date"
                  value={(*draft_date).clone()}
                  oninput={on_date_input}
              />
              <div class="modal-actions">
                  <button type="button" class="btn" onclick={props.on_close.clone()}>{ "Cancel" }</button>
                  <button type="submit" class="btn ok">{ "Add task" }</button>
              </div>
          </form>
      </div>
  }
}

fn optional_text(
  value: &str
) -> Option<String> {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    None
  } else {
    Some(trimmed.to_string())
  }
}

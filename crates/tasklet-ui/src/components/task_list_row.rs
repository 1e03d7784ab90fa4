use tasklet_core::task::TaskId;
use tasklet_core::view::TaskRow;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub row:       TaskRow,
  pub on_toggle: Callback<TaskId>
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let id = props.row.id;
  let on_toggle = props.on_toggle.clone();
  let onclick =
    Callback::from(move |_: MouseEvent| {
      on_toggle.emit(id)
    });

  html! {
      <div class="task-item" data-id={id.to_string()} onclick={onclick}>
          <div class={props.row.checkbox_class.clone()}>
              { if props.row.completed { "✓" } else { "" } }
          </div>
          <span class={props.row.title_class.clone()}>{ &props.row.title }</span>
          {
              match &props.row.date_label {
                  Some(date) => html! { <span class="task-date">{ date.clone() }</span> },
                  None => html! {}
              }
          }
      </div>
  }
}

use tasklet_core::task::TaskId;
use tasklet_core::view::TaskListView;
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
  pub list:      TaskListView,
  pub on_toggle: Callback<TaskId>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  match &props.list {
    | TaskListView::Empty {
      placeholder
    } => html! {
        <div class="task-list">
            <div class="task-empty">{ placeholder.clone() }</div>
        </div>
    },
    | TaskListView::Rows(rows) => html! {
        <div class="task-list">
            {
                for rows.iter().cloned().map(|row| html! {
                    <TaskListRow
                        key={row.id.0.to_string()}
                        row={row.clone()}
                        on_toggle={props.on_toggle.clone()}
                    />
                })
            }
        </div>
    }
  }
}

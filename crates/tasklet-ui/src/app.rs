mod dispatcher;
pub(crate) mod keys;

use chrono::Local;
use gloo::console::log;
use gloo::events::EventListener;
use gloo::timers::callback::Interval;
use tasklet_core::clock::{
  format_header_date,
  format_header_time,
  greeting,
  to_minute
};
use tasklet_core::config::parse_query_overrides;
use tasklet_core::filter::Filter;
use tasklet_core::overlay::{
  OverlayEvent,
  Panel
};
use tasklet_core::start_session_or_default;
use tasklet_core::task::TaskId;
use tasklet_core::widget::Action;
use wasm_bindgen::JsCast;
use yew::{
  Callback,
  Html,
  MouseEvent,
  function_component,
  html,
  use_effect_with,
  use_force_update,
  use_mut_ref,
  use_state_eq
};

use self::dispatcher::Dispatcher;
use self::keys::is_cancel_key;
use crate::components::{
  AddTaskModal,
  CategoryCards,
  FilterMenu,
  Header,
  NoticeToast,
  Sidebar,
  TaskList
};

#[function_component(App)]
pub fn app() -> Html {
  let session = use_mut_ref(|| {
    start_session_or_default(
      parse_query_overrides(
        &page_query()
      )
    )
  });
  let force_update = use_force_update();
  let (notice_timeout_ms, clock_refresh_ms) = {
    let session = session.borrow();
    (
      session.config.notice.timeout_ms,
      session.config.clock.refresh_ms
    )
  };

  let dispatcher = Dispatcher::new(
    session.clone(),
    force_update,
    notice_timeout_ms
  );
  let on_action =
    Callback::from(move |action: Action| {
      dispatcher.dispatch(action)
    });

  let now = use_state_eq(current_minute);

  {
    use_effect_with((), move |_| {
      ui_debug(
        "app.mounted",
        "frontend mounted and hooks \
         initialized"
      );
      || ()
    });
  }

  {
    let now = now.clone();
    use_effect_with(
      clock_refresh_ms,
      move |refresh_ms| {
        let interval = Interval::new(
          *refresh_ms,
          move || now.set(current_minute())
        );
        tracing::debug!(
          refresh_ms = *refresh_ms,
          "clock refresh scheduled"
        );
        move || drop(interval)
      }
    );
  }

  {
    let on_action = on_action.clone();
    use_effect_with((), move |_| {
      let listener = EventListener::new(
        &gloo::utils::document(),
        "keydown",
        move |event| {
          let cancel = event
            .dyn_ref::<web_sys::KeyboardEvent>()
            .is_some_and(|key_event| {
              is_cancel_key(&key_event.key())
            });
          if cancel {
            on_action.emit(Action::Overlay(
              OverlayEvent::CancelKey
            ));
          }
        }
      );
      move || drop(listener)
    });
  }

  let (view, overlay, notice, user) = {
    let session = session.borrow();
    (
      session.widget.view(),
      session.widget.overlay(),
      session.widget.notice().cloned(),
      session.config.user.clone()
    )
  };

  let overlay_callback =
    |event: OverlayEvent| {
      let on_action = on_action.clone();
      Callback::from(move |e: MouseEvent| {
        e.stop_propagation();
        on_action
          .emit(Action::Overlay(event));
      })
    };

  let on_page_click = {
    let on_action = on_action.clone();
    Callback::from(move |_: MouseEvent| {
      on_action.emit(Action::Overlay(
        OverlayEvent::OutsideClick
      ))
    })
  };
  let on_toggle_task = {
    let on_action = on_action.clone();
    Callback::from(move |id: TaskId| {
      on_action.emit(Action::ToggleTask(id))
    })
  };
  let on_select_filter = {
    let on_action = on_action.clone();
    Callback::from(move |filter: Filter| {
      on_action
        .emit(Action::SelectFilter(filter))
    })
  };
  let on_delete_all = {
    let on_action = on_action.clone();
    Callback::from(move |e: MouseEvent| {
      e.stop_propagation();
      on_action.emit(Action::DeleteAll)
    })
  };
  let on_add_category = {
    let on_action = on_action.clone();
    Callback::from(move |_: MouseEvent| {
      on_action.emit(Action::AddCategory)
    })
  };
  let on_logout = {
    let on_action = on_action.clone();
    Callback::from(move |e: MouseEvent| {
      e.stop_propagation();
      on_action.emit(Action::Logout)
    })
  };
  let on_submit_task = {
    let on_action = on_action.clone();
    Callback::from(
      move |(title, date): (
        String,
        Option<String>
      )| {
        ui_debug(
          "action.modal.submit",
          &format!(
            "title_len={}, has_date={}",
            title.len(),
            date.is_some()
          )
        );
        on_action.emit(Action::SubmitTask {
          title,
          date
        })
      }
    )
  };

  html! {
      <div class="page" onclick={on_page_click}>
          <Header
              greeting={greeting(*now).to_string()}
              date_line={format_header_date(*now)}
              time_line={format_header_time(*now)}
              user_name={user.name.clone()}
              avatar_url={user.avatar_url()}
              on_sidebar_open={overlay_callback(OverlayEvent::Open(Panel::Sidebar))}
          />
          <main class="content">
              <section>
                  <div class="section-title">{ "Categories" }</div>
                  <CategoryCards
                      cards={view.cards.clone()}
                      on_add_category={on_add_category}
                  />
              </section>
              <section>
                  <div class="section-header">
                      <div class="section-title">{ "Today's tasks" }</div>
                      <FilterMenu
                          open={overlay.is_open(Panel::Filter)}
                          active={view.filter}
                          on_toggle={overlay_callback(OverlayEvent::Toggle(Panel::Filter))}
                          on_select={on_select_filter}
                          on_delete_all={on_delete_all}
                      />
                  </div>
                  <TaskList list={view.list.clone()} on_toggle={on_toggle_task} />
              </section>
          </main>
          <button
              class="fab"
              title="Add task"
              onclick={overlay_callback(OverlayEvent::Toggle(Panel::AddTask))}
          >
              { "+" }
          </button>
          {
              if overlay.is_open(Panel::AddTask) {
                  html! {
                      <AddTaskModal
                          on_submit={on_submit_task}
                          on_close={overlay_callback(OverlayEvent::Close(Panel::AddTask))}
                      />
                  }
              } else {
                  html! {}
              }
          }
          <Sidebar
              open={overlay.is_open(Panel::Sidebar)}
              user_name={user.name.clone()}
              avatar_url={user.avatar_url()}
              on_close={overlay_callback(OverlayEvent::Close(Panel::Sidebar))}
              on_logout={on_logout}
          />
          <NoticeToast notice={notice} />
      </div>
  }
}

fn current_minute() -> chrono::NaiveDateTime {
  to_minute(Local::now().naive_local())
}

fn page_query() -> String {
  web_sys::window()
    .and_then(|window| {
      window.location().search().ok()
    })
    .unwrap_or_default()
}

pub(crate) fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}

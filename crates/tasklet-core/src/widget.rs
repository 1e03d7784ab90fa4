//! Gesture handling for the to-do widget.
//!
//! Every user interaction arrives as an
//! [`Action`]; the widget applies it to
//! the store, the overlay state and the
//! notice slot, and reports which part of
//! the page needs to be rendered again.

use tracing::{
  debug,
  info
};

use crate::config::WidgetConfig;
use crate::error::StoreError;
use crate::filter::Filter;
use crate::notice::{
  Notice,
  NoticeSlot,
  NoticeTicket
};
use crate::overlay::{
  Overlay,
  OverlayEvent,
  Panel
};
use crate::store::TaskStore;
use crate::task::TaskId;
use crate::view::{
  WidgetView,
  render_all
};

pub const TASK_ADDED_MESSAGE: &str =
  "Task added";
pub const ADD_CATEGORY_UNAVAILABLE_MESSAGE:
  &str =
  "Adding categories is not available \
   yet";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
  ToggleTask(TaskId),
  SelectFilter(Filter),
  DeleteAll,
  SubmitTask {
    title: String,
    date:  Option<String>
  },
  AddCategory,
  Logout,
  Overlay(OverlayEvent),
  DismissNotice(NoticeTicket)
}

impl Action {
  pub fn name(&self) -> &'static str {
    match self {
      | Action::ToggleTask(_) => "toggle_task",
      | Action::SelectFilter(_) => {
        "select_filter"
      }
      | Action::DeleteAll => "delete_all",
      | Action::SubmitTask { .. } => {
        "submit_task"
      }
      | Action::AddCategory => "add_category",
      | Action::Logout => "logout",
      | Action::Overlay(_) => "overlay",
      | Action::DismissNotice(_) => {
        "dismiss_notice"
      }
    }
  }
}

/// Which part of the page changed.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum Rerender {
  Nothing,
  /// Overlays, notices or the header;
  /// the task data is untouched.
  Chrome,
  /// The visible task list only.
  TaskList,
  All
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct Outcome {
  pub rerender: Rerender,
  /// Set when a notice was shown; the
  /// caller schedules its dismissal.
  pub notice:   Option<NoticeTicket>
}

impl Outcome {
  fn quiet(rerender: Rerender) -> Self {
    Self {
      rerender,
      notice: None
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
  store:   TaskStore,
  overlay: Overlay,
  notices: NoticeSlot
}

impl Widget {
  pub fn new(store: TaskStore) -> Self {
    Self {
      store,
      overlay: Overlay::None,
      notices: NoticeSlot::default()
    }
  }

  /// Builds the session widget from
  /// configuration.
  pub fn from_config(
    cfg: &WidgetConfig
  ) -> anyhow::Result<Self> {
    Ok(Self::new(cfg.build_store()?))
  }

  pub fn store(&self) -> &TaskStore {
    &self.store
  }

  pub fn overlay(&self) -> Overlay {
    self.overlay
  }

  pub fn notice(&self) -> Option<&Notice> {
    self.notices.visible()
  }

  pub fn view(&self) -> WidgetView {
    render_all(&self.store)
  }

  #[tracing::instrument(
    skip(self, action),
    fields(action = action.name())
  )]
  pub fn dispatch(
    &mut self,
    action: Action
  ) -> Outcome {
    match action {
      | Action::ToggleTask(id) => {
        let closed = self.dismiss_overlay();
        match self.store.toggle_completion(id)
        {
          | Ok(_) => Outcome::quiet(Rerender::All),
          | Err(err) => {
            debug!(%err, "toggle ignored");
            Outcome::quiet(if closed {
              Rerender::Chrome
            } else {
              Rerender::Nothing
            })
          }
        }
      }
      | Action::SelectFilter(filter) => {
        self.store.set_filter(filter);
        self.close(Panel::Filter);
        Outcome::quiet(Rerender::TaskList)
      }
      | Action::DeleteAll => {
        self.store.clear_all();
        self.close(Panel::Filter);
        Outcome::quiet(Rerender::All)
      }
      | Action::SubmitTask {
        title,
        date
      } => self.submit_task(&title, date.as_deref()),
      | Action::AddCategory => {
        self.dismiss_overlay();
        let notice = self.notices.show(
          Notice::error(
            ADD_CATEGORY_UNAVAILABLE_MESSAGE
          )
        );
        Outcome {
          rerender: Rerender::Chrome,
          notice
        }
      }
      | Action::Logout => {
        self.close(Panel::Sidebar);
        info!("logged out");
        Outcome::quiet(Rerender::Chrome)
      }
      | Action::Overlay(event) => {
        let before = self.overlay;
        self.overlay =
          self.overlay.transition(event);
        if before == self.overlay {
          Outcome::quiet(Rerender::Nothing)
        } else {
          debug!(
            ?before,
            after = ?self.overlay,
            "overlay changed"
          );
          Outcome::quiet(Rerender::Chrome)
        }
      }
      | Action::DismissNotice(ticket) => {
        if self.notices.dismiss(ticket) {
          Outcome::quiet(Rerender::Chrome)
        } else {
          Outcome::quiet(Rerender::Nothing)
        }
      }
    }
  }

  fn submit_task(
    &mut self,
    title: &str,
    date: Option<&str>
  ) -> Outcome {
    match self.store.add_task(title, date) {
      | Ok(task) => {
        debug!(id = %task.id, "task submitted");
        self.close(Panel::AddTask);
        Outcome {
          rerender: Rerender::All,
          notice:   self.notices.show(
            Notice::success(TASK_ADDED_MESSAGE)
          )
        }
      }
      | Err(err) => {
        debug!(%err, "task submission rejected");
        Outcome {
          rerender: Rerender::Chrome,
          notice:   self
            .notices
            .show(Notice::error(user_message(&err)))
        }
      }
    }
  }

  /// Clicks on task rows and category
  /// buttons land outside every menu.
  fn dismiss_overlay(&mut self) -> bool {
    let before = self.overlay;
    self.overlay = self
      .overlay
      .transition(OverlayEvent::OutsideClick);
    before != self.overlay
  }

  fn close(&mut self, panel: Panel) {
    self.overlay = self
      .overlay
      .transition(OverlayEvent::Close(panel));
  }
}

fn user_message(err: &StoreError) -> String {
  match err {
    | StoreError::EmptyTitle => {
      "Please enter a task title".to_string()
    }
    | StoreError::InvalidDate(_) => {
      "Please enter a valid date".to_string()
    }
    | other => other.to_string()
  }
}

use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use tasklet_core::Session;
use tasklet_core::widget::{
  Action,
  Rerender
};
use yew::functional::UseForceUpdateHandle;

use super::ui_debug;

/// Applies actions to the session widget
/// and re-renders the page when the
/// widget reports a change.
#[derive(Clone)]
pub(super) struct Dispatcher {
  session:           Rc<RefCell<Session>>,
  force_update:      UseForceUpdateHandle,
  notice_timeout_ms: u32
}

impl Dispatcher {
  pub(super) fn new(
    session: Rc<RefCell<Session>>,
    force_update: UseForceUpdateHandle,
    notice_timeout_ms: u32
  ) -> Self {
    Self {
      session,
      force_update,
      notice_timeout_ms
    }
  }

  pub(super) fn dispatch(
    &self,
    action: Action
  ) {
    let name = action.name();
    let outcome = self
      .session
      .borrow_mut()
      .widget
      .dispatch(action);

    if outcome.rerender != Rerender::Nothing
    {
      ui_debug(
        "action.dispatch",
        &format!(
          "action={name}, rerender={:?}",
          outcome.rerender
        )
      );
      self.force_update.force_update();
    }

    if let Some(ticket) = outcome.notice {
      let dispatcher = self.clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          TimeoutFuture::new(
            dispatcher.notice_timeout_ms
          )
          .await;
          dispatcher.dispatch(
            Action::DismissNotice(ticket)
          );
        }
      );
    }
  }
}

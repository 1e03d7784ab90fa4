pub mod category;
pub mod clock;
pub mod config;
pub mod error;
pub mod filter;
pub mod notice;
pub mod overlay;
pub mod store;
pub mod summary;
pub mod task;
pub mod view;
pub mod widget;

use anyhow::Context;
use tracing::{
  debug,
  error,
  info
};

use crate::config::WidgetConfig;
use crate::widget::Widget;

/// Session state handed to the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
  pub config: WidgetConfig,
  pub widget: Widget
}

/// Loads the bundled configuration,
/// applies `rc.` overrides and builds
/// the widget for one page session.
#[tracing::instrument(skip_all)]
pub fn start_session<I>(
  overrides: I
) -> anyhow::Result<Session>
where
  I: IntoIterator<Item = (String, String)>
{
  let mut cfg = WidgetConfig::load_bundled();
  cfg.apply_overrides(overrides);
  debug!(?cfg.tasks, ?cfg.user, "effective widget config");

  let widget = Widget::from_config(&cfg)
    .context(
      "failed to build widget from \
       configuration"
    )?;

  info!(
    tasks = widget.store().len(),
    "widget session started"
  );
  Ok(Session {
    config: cfg,
    widget
  })
}

/// Like [`start_session`], but falls back
/// to the built-in defaults when the
/// overrides leave the configuration
/// unusable.
pub fn start_session_or_default<I>(
  overrides: I
) -> Session
where
  I: IntoIterator<Item = (String, String)>
{
  match start_session(overrides) {
    | Ok(session) => session,
    | Err(err) => {
      let detail = format!("{err:#}");
      error!(error = %detail, "session start failed; using defaults");
      Session {
        config: WidgetConfig::default(),
        widget: Widget::new(
          store::TaskStore::default()
        )
      }
    }
  }
}

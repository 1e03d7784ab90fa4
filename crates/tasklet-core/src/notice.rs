use tracing::debug;

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
)]
pub enum NoticeKind {
  Success,
  Error
}

impl NoticeKind {
  pub fn as_key(self) -> &'static str {
    match self {
      | NoticeKind::Success => "success",
      | NoticeKind::Error => "error"
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct Notice {
  pub kind:    NoticeKind,
  pub message: String
}

impl Notice {
  pub fn success(
    message: impl Into<String>
  ) -> Self {
    Self {
      kind:    NoticeKind::Success,
      message: message.into()
    }
  }

  pub fn error(
    message: impl Into<String>
  ) -> Self {
    Self {
      kind:    NoticeKind::Error,
      message: message.into()
    }
  }
}

/// Identifies one shown notice so a late
/// dismissal timer cannot hide a newer
/// one.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
)]
pub struct NoticeTicket(u64);

/// Holds at most one visible notice.
/// Requests made while a notice is
/// showing are dropped.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct NoticeSlot {
  current: Option<(NoticeTicket, Notice)>,
  seq:     u64
}

impl NoticeSlot {
  pub fn show(
    &mut self,
    notice: Notice
  ) -> Option<NoticeTicket> {
    if let Some((_, visible)) =
      &self.current
    {
      debug!(
        suppressed = %notice.message,
        visible = %visible.message,
        "notice already visible; suppressing"
      );
      return None;
    }

    self.seq = self.seq.wrapping_add(1);
    let ticket = NoticeTicket(self.seq);
    debug!(
      kind = notice.kind.as_key(),
      message = %notice.message,
      "showing notice"
    );
    self.current = Some((ticket, notice));
    Some(ticket)
  }

  /// Returns whether the notice was
  /// hidden.
  pub fn dismiss(
    &mut self,
    ticket: NoticeTicket
  ) -> bool {
    match &self.current {
      | Some((current, _))
        if *current == ticket =>
      {
        self.current = None;
        true
      }
      | _ => false
    }
  }

  pub fn visible(
    &self
  ) -> Option<&Notice> {
    self
      .current
      .as_ref()
      .map(|(_, notice)| notice)
  }
}

#[cfg(test)]
mod tests {
  use super::{
    Notice,
    NoticeKind,
    NoticeSlot
  };

  #[test]
  fn second_notice_is_suppressed_not_queued()
   {
    let mut slot = NoticeSlot::default();
    let first = slot
      .show(Notice::success("Task added"));
    assert!(first.is_some());
    assert!(
      slot
        .show(Notice::error("Title required"))
        .is_none()
    );
    assert_eq!(
      slot.visible().map(|n| n.kind),
      Some(NoticeKind::Success)
    );

    assert!(slot.dismiss(first.unwrap()));
    assert!(slot.visible().is_none());
  }

  #[test]
  fn stale_ticket_does_not_hide_newer_notice()
   {
    let mut slot = NoticeSlot::default();
    let first =
      slot.show(Notice::success("one")).unwrap();
    assert!(slot.dismiss(first));

    let second =
      slot.show(Notice::success("two")).unwrap();
    assert_ne!(first, second);
    assert!(!slot.dismiss(first));
    assert_eq!(
      slot.visible().map(|n| n.message.as_str()),
      Some("two")
    );
    assert!(slot.dismiss(second));
  }
}

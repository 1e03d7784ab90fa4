/// Panels that float over the page. At
/// most one is open at a time.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
)]
pub enum Panel {
  Filter,
  AddTask,
  Sidebar
}

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Hash,
)]
pub enum Overlay {
  #[default]
  None,
  Open(Panel)
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum OverlayEvent {
  Toggle(Panel),
  Open(Panel),
  Close(Panel),
  OutsideClick,
  CancelKey
}

impl Overlay {
  pub fn is_open(
    self,
    panel: Panel
  ) -> bool {
    self == Overlay::Open(panel)
  }

  pub fn transition(
    self,
    event: OverlayEvent
  ) -> Overlay {
    match (self, event) {
      | (current, OverlayEvent::Toggle(panel))
        if current.is_open(panel) =>
      {
        Overlay::None
      }
      | (_, OverlayEvent::Toggle(panel))
      | (_, OverlayEvent::Open(panel)) => {
        Overlay::Open(panel)
      }
      | (current, OverlayEvent::Close(panel))
        if current.is_open(panel) =>
      {
        Overlay::None
      }
      | (current, OverlayEvent::Close(_)) => {
        current
      }
      | (_, OverlayEvent::OutsideClick)
      | (_, OverlayEvent::CancelKey) => {
        Overlay::None
      }
    }
  }
}

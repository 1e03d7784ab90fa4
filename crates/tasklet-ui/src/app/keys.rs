/// Keys that close every open overlay.
pub(super) fn is_cancel_key(
  key: &str
) -> bool {
  matches!(key, "Escape" | "Esc")
}

/// Keys that submit the add-task form
/// from a text input.
pub(crate) fn is_submit_key(
  key: &str
) -> bool {
  key == "Enter"
}

use crate::task::TaskId;

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  thiserror::Error,
)]
pub enum StoreError {
  #[error("task title cannot be empty")]
  EmptyTitle,
  #[error(
    "invalid date {0:?}; expected \
     YYYY-MM-DD"
  )]
  InvalidDate(String),
  #[error("unknown category: {0}")]
  UnknownCategory(String),
  #[error("task not found: {0}")]
  NotFound(TaskId)
}

impl StoreError {
  /// Errors caused by user input, which
  /// the widget reports as a notice.
  pub fn is_validation(&self) -> bool {
    matches!(
      self,
      StoreError::EmptyTitle
        | StoreError::InvalidDate(_)
        | StoreError::UnknownCategory(_)
    )
  }
}

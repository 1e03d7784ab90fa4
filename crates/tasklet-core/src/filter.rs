use std::fmt;

use crate::task::Task;

/// Completion selector over the task
/// list.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Hash,
)]
pub enum Filter {
  #[default]
  All,
  Open,
  Closed
}

impl Filter {
  pub const ALL: [Filter; 3] = [
    Filter::All,
    Filter::Open,
    Filter::Closed
  ];

  pub fn as_key(self) -> &'static str {
    match self {
      | Filter::All => "all",
      | Filter::Open => "open",
      | Filter::Closed => "closed"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Filter::All => "All tasks",
      | Filter::Open => "Open",
      | Filter::Closed => "Closed"
    }
  }

  pub fn matches(
    self,
    task: &Task
  ) -> bool {
    match self {
      | Filter::All => true,
      | Filter::Open => !task.completed,
      | Filter::Closed => task.completed
    }
  }
}

impl fmt::Display for Filter {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_key())
  }
}

#[cfg(test)]
mod tests {
  use super::Filter;
  use crate::task::{
    Task,
    TaskId
  };

  fn task(completed: bool) -> Task {
    let mut task = Task::new_open(
      TaskId(1),
      "x".to_string(),
      "Personal".to_string(),
      None
    );
    task.completed = completed;
    task
  }

  #[test]
  fn open_and_closed_partition_by_completion()
   {
    let open = task(false);
    let done = task(true);

    assert!(Filter::All.matches(&open));
    assert!(Filter::All.matches(&done));
    assert!(Filter::Open.matches(&open));
    assert!(!Filter::Open.matches(&done));
    assert!(Filter::Closed.matches(&done));
    assert!(!Filter::Closed.matches(&open));
  }
}

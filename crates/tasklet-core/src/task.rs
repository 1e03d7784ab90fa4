use std::fmt;

use chrono::NaiveDate;
use serde::{
  Deserialize,
  Serialize
};

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct Task {
  pub id:        TaskId,
  pub title:     String,
  pub category:  String,
  #[serde(default)]
  pub date:      Option<NaiveDate>,
  #[serde(default)]
  pub completed: bool
}

impl Task {
  pub fn new_open(
    id: TaskId,
    title: String,
    category: String,
    date: Option<NaiveDate>
  ) -> Self {
    Self {
      id,
      title,
      category,
      date,
      completed: false
    }
  }

  pub fn toggle(&mut self) {
    self.completed = !self.completed;
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::{
    Task,
    TaskId
  };

  #[test]
  fn serializes_with_bare_id_and_iso_date() {
    let mut task = Task::new_open(
      TaskId(1_700_000_000_000),
      "Buy milk".to_string(),
      "Personal".to_string(),
      NaiveDate::from_ymd_opt(2024, 1, 1)
    );
    task.toggle();

    let value =
      serde_json::to_value(&task).unwrap();
    assert_eq!(
      value,
      serde_json::json!({
        "id": 1_700_000_000_000_u64,
        "title": "Buy milk",
        "category": "Personal",
        "date": "2024-01-01",
        "completed": true
      })
    );

    let back: Task =
      serde_json::from_value(value).unwrap();
    assert_eq!(back, task);
  }
}

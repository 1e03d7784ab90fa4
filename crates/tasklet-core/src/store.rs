use chrono::{
  NaiveDate,
  Utc
};
use tracing::{
  debug,
  info,
  trace
};

use crate::category::CategoryRegistry;
use crate::error::StoreError;
use crate::filter::Filter;
use crate::summary::CategorySummary;
use crate::task::{
  Task,
  TaskId
};

pub const DEFAULT_CATEGORY: &str =
  "Personal";

/// Hands out time-derived ids that never
/// repeat: each id is the current
/// millisecond or one past the previous
/// id, whichever is larger.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct IdGenerator {
  last: u64
}

impl IdGenerator {
  pub fn next_id_at(
    &mut self,
    now_ms: u64
  ) -> TaskId {
    let id = now_ms.max(self.last + 1);
    self.last = id;
    TaskId(id)
  }

  pub fn next_id(&mut self) -> TaskId {
    let now_ms = u64::try_from(
      Utc::now().timestamp_millis()
    )
    .unwrap_or_default();
    self.next_id_at(now_ms)
  }
}

/// Authoritative task collection for one
/// widget session.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskStore {
  tasks:            Vec<Task>,
  registry:         CategoryRegistry,
  default_category: String,
  filter:           Filter,
  ids:              IdGenerator
}

impl TaskStore {
  pub fn new(
    registry: CategoryRegistry,
    default_category: impl Into<String>
  ) -> Result<Self, StoreError> {
    let default_category =
      default_category.into();
    if !registry.contains(&default_category)
    {
      return Err(
        StoreError::UnknownCategory(
          default_category
        )
      );
    }

    info!(
      categories = registry.len(),
      default_category = %default_category,
      "task store initialized"
    );

    Ok(Self {
      tasks: vec![],
      registry,
      default_category,
      filter: Filter::All,
      ids: IdGenerator::default()
    })
  }

  pub fn registry(
    &self
  ) -> &CategoryRegistry {
    &self.registry
  }

  pub fn default_category(&self) -> &str {
    &self.default_category
  }

  pub fn tasks(&self) -> &[Task] {
    &self.tasks
  }

  pub fn len(&self) -> usize {
    self.tasks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tasks.is_empty()
  }

  pub fn get(
    &self,
    id: TaskId
  ) -> Option<&Task> {
    self
      .tasks
      .iter()
      .find(|task| task.id == id)
  }

  pub fn filter(&self) -> Filter {
    self.filter
  }

  pub fn set_filter(
    &mut self,
    filter: Filter
  ) {
    debug!(filter = %filter, "active filter changed");
    self.filter = filter;
  }

  /// Adds an open task in the default
  /// category.
  #[tracing::instrument(skip(self))]
  pub fn add_task(
    &mut self,
    title: &str,
    date: Option<&str>
  ) -> Result<Task, StoreError> {
    let category =
      self.default_category.clone();
    self.add_task_in(title, date, &category)
  }

  #[tracing::instrument(skip(self))]
  pub fn add_task_in(
    &mut self,
    title: &str,
    date: Option<&str>,
    category: &str
  ) -> Result<Task, StoreError> {
    let title = title.trim();
    if title.is_empty() {
      return Err(StoreError::EmptyTitle);
    }
    let date = parse_task_date(date)?;
    if !self.registry.contains(category) {
      return Err(
        StoreError::UnknownCategory(
          category.to_string()
        )
      );
    }

    let task = Task::new_open(
      self.ids.next_id(),
      title.to_string(),
      category.to_string(),
      date
    );
    info!(id = %task.id, category, "task added");
    self.tasks.push(task.clone());
    Ok(task)
  }

  /// Inserts a task with an explicit
  /// completion state. Used to seed the
  /// demo list.
  pub fn insert(
    &mut self,
    title: &str,
    category: &str,
    date: Option<NaiveDate>,
    completed: bool
  ) -> Result<TaskId, StoreError> {
    let title = title.trim();
    if title.is_empty() {
      return Err(StoreError::EmptyTitle);
    }
    if !self.registry.contains(category) {
      return Err(
        StoreError::UnknownCategory(
          category.to_string()
        )
      );
    }

    let mut task = Task::new_open(
      self.ids.next_id(),
      title.to_string(),
      category.to_string(),
      date
    );
    task.completed = completed;
    let id = task.id;
    trace!(id = %id, "task inserted");
    self.tasks.push(task);
    Ok(id)
  }

  #[tracing::instrument(skip(self))]
  pub fn toggle_completion(
    &mut self,
    id: TaskId
  ) -> Result<&Task, StoreError> {
    let task = self
      .tasks
      .iter_mut()
      .find(|task| task.id == id)
      .ok_or(StoreError::NotFound(id))?;
    task.toggle();
    debug!(
      id = %id,
      completed = task.completed,
      "task completion toggled"
    );
    Ok(task)
  }

  /// Drops every task and resets the
  /// active filter.
  #[tracing::instrument(skip(self))]
  pub fn clear_all(&mut self) {
    let removed = self.tasks.len();
    self.tasks.clear();
    self.filter = Filter::All;
    info!(removed, "cleared all tasks");
  }

  pub fn filtered_tasks(
    &self,
    filter: Filter
  ) -> Vec<&Task> {
    self
      .tasks
      .iter()
      .filter(|task| filter.matches(task))
      .collect()
  }

  pub fn visible_tasks(&self) -> Vec<&Task> {
    self.filtered_tasks(self.filter)
  }

  /// One entry per registered category,
  /// in registry order, including
  /// categories without tasks.
  pub fn category_summary(
    &self
  ) -> Vec<(String, CategorySummary)> {
    self
      .registry
      .iter()
      .map(|category| {
        let (total, completed) = self
          .tasks
          .iter()
          .filter(|task| {
            task.category == category.key
          })
          .fold(
            (0_usize, 0_usize),
            |(total, completed), task| {
              (
                total + 1,
                completed
                  + usize::from(task.completed)
              )
            }
          );
        (
          category.key.clone(),
          CategorySummary::from_counts(
            total, completed
          )
        )
      })
      .collect()
  }

  pub fn summary_for(
    &self,
    key: &str
  ) -> Option<CategorySummary> {
    self
      .category_summary()
      .into_iter()
      .find(|(category, _)| category == key)
      .map(|(_, summary)| summary)
  }
}

impl Default for TaskStore {
  fn default() -> Self {
    Self {
      tasks:            vec![],
      registry:         CategoryRegistry::default(),
      default_category: DEFAULT_CATEGORY
        .to_string(),
      filter:           Filter::All,
      ids:              IdGenerator::default()
    }
  }
}

fn parse_task_date(
  date: Option<&str>
) -> Result<Option<NaiveDate>, StoreError> {
  let Some(raw) = date
    .map(str::trim)
    .filter(|raw| !raw.is_empty())
  else {
    return Ok(None);
  };

  NaiveDate::parse_from_str(raw, "%Y-%m-%d")
    .map(Some)
    .map_err(|_| {
      StoreError::InvalidDate(
        raw.to_string()
      )
    })
}

//! View models for the widget.
//!
//! Everything the page shows is derived
//! here from store state; the UI only
//! maps these values onto components.

use tracing::warn;

use crate::category::{
  CategoryRegistry,
  Color
};
use crate::filter::Filter;
use crate::store::TaskStore;
use crate::summary::CategorySummary;
use crate::task::{
  Task,
  TaskId
};

pub const EMPTY_PLACEHOLDER: &str =
  "No tasks";

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCard {
  pub key:            String,
  pub name:           String,
  pub color:          Color,
  pub total:          usize,
  pub completed:      usize,
  pub percent:        f64,
  pub count_label:    String,
  pub progress_style: String,
  pub card_class:     String,
  pub bar_class:      String
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
  pub id:             TaskId,
  pub title:          String,
  pub category:       String,
  pub color:          Color,
  pub completed:      bool,
  pub date_label:     Option<String>,
  pub checkbox_class: String,
  pub title_class:    String
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskListView {
  Empty { placeholder: String },
  Rows(Vec<TaskRow>)
}

impl TaskListView {
  pub fn rows(&self) -> &[TaskRow] {
    match self {
      | TaskListView::Empty { .. } => &[],
      | TaskListView::Rows(rows) => rows
    }
  }

  pub fn is_empty(&self) -> bool {
    matches!(self, TaskListView::Empty { .. })
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetView {
  pub cards:       Vec<CategoryCard>,
  pub list:        TaskListView,
  pub filter:      Filter,
  pub total_tasks: usize
}

pub fn render_category_cards(
  summary: &[(String, CategorySummary)],
  registry: &CategoryRegistry
) -> Vec<CategoryCard> {
  summary
    .iter()
    .filter_map(|(key, counts)| {
      let Some(category) = registry.get(key)
      else {
        warn!(category = %key, "summary for unregistered category; skipping card");
        return None;
      };
      let color = category.color.token();

      Some(CategoryCard {
        key: key.clone(),
        name: category.name().to_string(),
        color: category.color,
        total: counts.total,
        completed: counts.completed,
        percent: counts.percent,
        count_label: count_label(
          counts.total
        ),
        progress_style: format!(
          "width: {}%",
          format_percent(counts.percent)
        ),
        card_class: format!(
          "category-card border-{color}"
        ),
        bar_class: format!(
          "progress-fill bg-{color}"
        )
      })
    })
    .collect()
}

pub fn render_task_list(
  tasks: &[&Task],
  registry: &CategoryRegistry
) -> TaskListView {
  if tasks.is_empty() {
    return TaskListView::Empty {
      placeholder: EMPTY_PLACEHOLDER
        .to_string()
    };
  }

  let rows = tasks
    .iter()
    .filter_map(|task| {
      let Some(color) =
        registry.color_of(&task.category)
      else {
        warn!(
          id = %task.id,
          category = %task.category,
          "task references unregistered category; skipping row"
        );
        return None;
      };
      Some(task_row(task, color))
    })
    .collect();

  TaskListView::Rows(rows)
}

pub fn render_all(
  store: &TaskStore
) -> WidgetView {
  let summary = store.category_summary();
  WidgetView {
    cards:       render_category_cards(
      &summary,
      store.registry()
    ),
    list:        render_task_list(
      &store.visible_tasks(),
      store.registry()
    ),
    filter:      store.filter(),
    total_tasks: store.len()
  }
}

fn task_row(
  task: &Task,
  color: Color
) -> TaskRow {
  let token = color.token();
  let checkbox_class = if task.completed {
    format!(
      "checkbox border-{token} checked \
       bg-{token}"
    )
  } else {
    format!("checkbox border-{token}")
  };
  let title_class = if task.completed {
    "task-text done".to_string()
  } else {
    "task-text".to_string()
  };

  TaskRow {
    id: task.id,
    title: task.title.clone(),
    category: task.category.clone(),
    color,
    completed: task.completed,
    date_label: task.date.map(|date| {
      date.format("%b %-d, %Y").to_string()
    }),
    checkbox_class,
    title_class
  }
}

fn count_label(total: usize) -> String {
  if total == 1 {
    "1 task".to_string()
  } else {
    format!("{total} tasks")
  }
}

/// Whole percentages print without a
/// fraction; others keep one decimal.
fn format_percent(percent: f64) -> String {
  if percent.fract() == 0.0 {
    format!("{percent:.0}")
  } else {
    format!("{percent:.1}")
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::{
    EMPTY_PLACEHOLDER,
    TaskListView,
    format_percent,
    render_all,
    render_category_cards,
    render_task_list
  };
  use crate::category::{
    CategoryRegistry,
    Color
  };
  use crate::store::TaskStore;
  use crate::summary::CategorySummary;
  use crate::task::{
    Task,
    TaskId
  };

  #[test]
  fn empty_list_renders_placeholder() {
    let registry =
      CategoryRegistry::default();
    let view =
      render_task_list(&[], &registry);
    assert_eq!(
      view,
      TaskListView::Empty {
        placeholder: EMPTY_PLACEHOLDER
          .to_string()
      }
    );
    assert!(view.rows().is_empty());
  }

  #[test]
  fn completed_rows_are_checked_and_struck()
  {
    let registry =
      CategoryRegistry::default();
    let mut done = Task::new_open(
      TaskId(7),
      "Pay for rent".to_string(),
      "Personal".to_string(),
      NaiveDate::from_ymd_opt(2024, 1, 1)
    );
    done.completed = true;
    let open = Task::new_open(
      TaskId(8),
      "Write report".to_string(),
      "Business".to_string(),
      None
    );

    let view = render_task_list(
      &[&done, &open],
      &registry
    );
    let rows = view.rows();
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].color, Color::Blue);
    assert_eq!(
      rows[0].checkbox_class,
      "checkbox border-blue checked bg-blue"
    );
    assert_eq!(
      rows[0].title_class,
      "task-text done"
    );
    assert_eq!(
      rows[0].date_label.as_deref(),
      Some("Jan 1, 2024")
    );

    assert_eq!(
      rows[1].checkbox_class,
      "checkbox border-fuchsia"
    );
    assert_eq!(rows[1].title_class, "task-text");
    assert_eq!(rows[1].date_label, None);
  }

  #[test]
  fn unregistered_category_row_is_skipped() {
    let registry =
      CategoryRegistry::default();
    let stray = Task::new_open(
      TaskId(1),
      "Stray".to_string(),
      "Travel".to_string(),
      None
    );
    let view =
      render_task_list(&[&stray], &registry);
    assert_eq!(view, TaskListView::Rows(vec![]));
  }

  #[test]
  fn cards_follow_registry_order_with_progress()
   {
    let registry =
      CategoryRegistry::default();
    let summary = vec![
      (
        "Business".to_string(),
        CategorySummary::from_counts(3, 1)
      ),
      (
        "Personal".to_string(),
        CategorySummary::from_counts(1, 1)
      ),
    ];
    let cards = render_category_cards(
      &summary, &registry
    );
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].name, "Business");
    assert_eq!(cards[0].count_label, "3 tasks");
    assert_eq!(
      cards[0].progress_style,
      "width: 33.3%"
    );
    assert_eq!(
      cards[0].bar_class,
      "progress-fill bg-fuchsia"
    );
    assert_eq!(cards[1].count_label, "1 task");
    assert_eq!(
      cards[1].progress_style,
      "width: 100%"
    );
  }

  #[test]
  fn render_all_reflects_filter() {
    let mut store = TaskStore::default();
    store
      .insert("a", "Business", None, true)
      .unwrap();
    store.set_filter(
      crate::filter::Filter::Open
    );

    let view = render_all(&store);
    assert_eq!(view.total_tasks, 1);
    assert!(view.list.is_empty());
    assert_eq!(view.cards.len(), 2);
    assert_eq!(
      view.cards[1].progress_style,
      "width: 0%"
    );
  }

  #[test]
  fn percent_formatting() {
    assert_eq!(format_percent(50.0), "50");
    assert_eq!(format_percent(0.0), "0");
    assert_eq!(
      format_percent(66.666_666),
      "66.7"
    );
  }
}

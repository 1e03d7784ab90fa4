use std::collections::BTreeSet;

use tasklet_core::error::StoreError;
use tasklet_core::filter::Filter;
use tasklet_core::start_session;
use tasklet_core::store::TaskStore;
use tasklet_core::task::TaskId;
use tasklet_core::view::{
  EMPTY_PLACEHOLDER,
  TaskListView,
  render_task_list
};
use tasklet_core::widget::{
  Action,
  Rerender
};

fn ids(tasks: &[&tasklet_core::task::Task]) -> Vec<TaskId> {
  tasks.iter().map(|task| task.id).collect()
}

#[test]
fn blank_titles_are_rejected_without_mutation() {
  let mut store = TaskStore::default();
  for title in ["", "   ", "\t\n"] {
    let err = store
      .add_task(title, None)
      .expect_err("blank title must fail");
    assert_eq!(err, StoreError::EmptyTitle);
    assert!(err.is_validation());
  }
  assert_eq!(store.len(), 0);
}

#[test]
fn add_task_appends_one_open_personal_task() {
  let mut store = TaskStore::default();
  store
    .insert("existing", "Business", None, true)
    .expect("seed task");

  let task = store
    .add_task("Buy milk", Some("2024-01-01"))
    .expect("valid task");

  assert_eq!(store.len(), 2);
  assert!(!task.completed);
  assert_eq!(task.category, "Personal");
  assert_eq!(store.tasks().last(), Some(&task));
}

#[test]
fn open_and_closed_partition_the_collection() {
  let mut store = TaskStore::default();
  for (idx, completed) in
    [false, true, true, false, true]
      .into_iter()
      .enumerate()
  {
    store
      .insert(
        &format!("task {idx}"),
        if idx % 2 == 0 {
          "Business"
        } else {
          "Personal"
        },
        None,
        completed
      )
      .expect("seed task");
  }

  let all = ids(&store.filtered_tasks(Filter::All));
  let open = ids(&store.filtered_tasks(Filter::Open));
  let closed =
    ids(&store.filtered_tasks(Filter::Closed));

  let open_set: BTreeSet<TaskId> =
    open.iter().copied().collect();
  let closed_set: BTreeSet<TaskId> =
    closed.iter().copied().collect();
  assert!(open_set.is_disjoint(&closed_set));

  let union: BTreeSet<TaskId> =
    open_set.union(&closed_set).copied().collect();
  let all_set: BTreeSet<TaskId> =
    all.iter().copied().collect();
  assert_eq!(union, all_set);

  // insertion order is kept within each view
  let mut merged: Vec<TaskId> =
    open.iter().chain(closed.iter()).copied().collect();
  merged.sort();
  assert_eq!(merged, all);
  assert!(open.windows(2).all(|w| w[0] < w[1]));
  assert!(closed.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn summary_covers_every_category() {
  let mut store = TaskStore::default();
  store
    .insert("meeting", "Business", None, false)
    .expect("seed task");
  store
    .insert("slides", "Business", None, true)
    .expect("seed task");
  store
    .insert("gym", "Personal", None, false)
    .expect("seed task");

  let summary = store.category_summary();
  let keys: Vec<&str> =
    summary.iter().map(|(key, _)| key.as_str()).collect();
  assert_eq!(keys, vec!["Business", "Personal"]);

  let business = store
    .summary_for("Business")
    .expect("business summary");
  assert_eq!(business.total, 2);
  assert_eq!(business.completed, 1);
  assert_eq!(business.percent, 50.0);

  let personal = store
    .summary_for("Personal")
    .expect("personal summary");
  assert_eq!(personal.total, 1);
  assert_eq!(personal.completed, 0);
  assert_eq!(personal.percent, 0.0);

  store.clear_all();
  for (_, counts) in store.category_summary() {
    assert_eq!(counts.total, 0);
    assert_eq!(counts.percent, 0.0);
  }
}

#[test]
fn double_toggle_restores_state_and_unknown_is_noop() {
  let mut store = TaskStore::default();
  let id = store
    .insert("walk", "Personal", None, false)
    .expect("seed task");
  let before = store.clone();

  assert!(
    store
      .toggle_completion(id)
      .expect("known id")
      .completed
  );
  assert!(
    !store
      .toggle_completion(id)
      .expect("known id")
      .completed
  );
  assert_eq!(store, before);

  let unknown = TaskId(id.0 + 1_000);
  assert_eq!(
    store.toggle_completion(unknown).unwrap_err(),
    StoreError::NotFound(unknown)
  );
  assert_eq!(store, before);
}

#[test]
fn clear_all_resets_any_filter() {
  for filter in Filter::ALL {
    let mut store = TaskStore::default();
    store
      .insert("a", "Business", None, false)
      .expect("seed task");
    store.set_filter(filter);
    store.clear_all();
    assert!(store.is_empty());
    assert_eq!(store.filter(), Filter::All);
  }
}

#[test]
fn empty_collection_renders_placeholder() {
  let store = TaskStore::default();
  for filter in Filter::ALL {
    let tasks = store.filtered_tasks(filter);
    assert!(tasks.is_empty());
    assert_eq!(
      render_task_list(&tasks, store.registry()),
      TaskListView::Empty {
        placeholder: EMPTY_PLACEHOLDER.to_string()
      }
    );
  }
}

#[test]
fn session_walkthrough() {
  let mut session = start_session(vec![(
    "rc.notice.timeout_ms".to_string(),
    "1000".to_string()
  )])
  .expect("bundled session");
  assert_eq!(session.config.notice.timeout_ms, 1_000);

  let widget = &mut session.widget;
  assert_eq!(widget.store().len(), 10);

  let view = widget.view();
  assert_eq!(view.cards.len(), 2);
  assert_eq!(view.cards[0].count_label, "5 tasks");
  assert_eq!(view.list.rows().len(), 10);

  widget.dispatch(Action::SelectFilter(Filter::Closed));
  assert_eq!(widget.view().list.rows().len(), 3);

  let first_closed = widget.view().list.rows()[0].id;
  let outcome =
    widget.dispatch(Action::ToggleTask(first_closed));
  assert_eq!(outcome.rerender, Rerender::All);
  assert_eq!(widget.view().list.rows().len(), 2);

  widget.dispatch(Action::DeleteAll);
  let view = widget.view();
  assert_eq!(view.filter, Filter::All);
  assert!(view.list.is_empty());
  assert!(view.cards.iter().all(|card| card.total == 0));
}

#[test]
fn session_without_samples_starts_empty() {
  let session = start_session(vec![(
    "rc.tasks.sample".to_string(),
    "no".to_string()
  )])
  .expect("bundled session");
  assert!(session.widget.store().is_empty());
}

#[test]
fn session_rejects_unknown_default_category() {
  let result = start_session(vec![(
    "rc.tasks.default_category".to_string(),
    "Errands".to_string()
  )]);
  assert!(result.is_err());

  let fallback =
    tasklet_core::start_session_or_default(vec![(
      "rc.tasks.default_category".to_string(),
      "Errands".to_string()
    )]);
  assert_eq!(
    fallback.widget.store().default_category(),
    "Personal"
  );
}

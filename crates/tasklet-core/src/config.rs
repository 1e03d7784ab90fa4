use anyhow::{
  Context,
  bail
};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{
  debug,
  error,
  info,
  warn
};

use crate::category::{
  Category,
  CategoryRegistry
};
use crate::store::{
  DEFAULT_CATEGORY,
  TaskStore
};

pub const BUNDLED_CONFIG_TOML: &str =
  include_str!("../assets/tasklet.toml");

const AVATAR_PLACEHOLDER_BASE: &str =
  "https://placehold.co/80x80/f3f4f6/6b7280";

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct WidgetConfig {
  #[serde(default)]
  pub version:      u32,
  #[serde(default)]
  pub notice:       NoticeConfig,
  #[serde(default)]
  pub clock:        ClockConfig,
  #[serde(default)]
  pub user:         UserProfile,
  #[serde(default)]
  pub tasks:        TasksConfig,
  #[serde(
    default = "default_categories"
  )]
  pub categories:   Vec<Category>,
  #[serde(default)]
  pub sample_tasks: Vec<SampleTask>
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct NoticeConfig {
  #[serde(
    default = "default_notice_timeout_ms"
  )]
  pub timeout_ms: u32
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct ClockConfig {
  #[serde(
    default = "default_clock_refresh_ms"
  )]
  pub refresh_ms: u32
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct UserProfile {
  #[serde(default = "default_user_name")]
  pub name:     String,
  #[serde(default)]
  pub initials: String
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct TasksConfig {
  #[serde(
    default = "default_category_key"
  )]
  pub default_category: String,
  #[serde(default = "config_true")]
  pub sample:           bool
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct SampleTask {
  pub title:     String,
  pub category:  String,
  #[serde(default)]
  pub completed: bool,
  #[serde(default)]
  pub date:      Option<NaiveDate>
}

fn config_true() -> bool {
  true
}

fn default_notice_timeout_ms() -> u32 {
  2_500
}

fn default_clock_refresh_ms() -> u32 {
  30_000
}

fn default_user_name() -> String {
  "Guest".to_string()
}

fn default_category_key() -> String {
  DEFAULT_CATEGORY.to_string()
}

fn default_categories() -> Vec<Category> {
  CategoryRegistry::default()
    .iter()
    .cloned()
    .collect()
}

impl Default for NoticeConfig {
  fn default() -> Self {
    Self {
      timeout_ms:
        default_notice_timeout_ms()
    }
  }
}

impl Default for ClockConfig {
  fn default() -> Self {
    Self {
      refresh_ms:
        default_clock_refresh_ms()
    }
  }
}

impl Default for UserProfile {
  fn default() -> Self {
    Self {
      name:     default_user_name(),
      initials: String::new()
    }
  }
}

impl Default for TasksConfig {
  fn default() -> Self {
    Self {
      default_category:
        default_category_key(),
      sample:           true
    }
  }
}

impl Default for WidgetConfig {
  fn default() -> Self {
    let mut cfg = Self {
      version:      1,
      notice:       NoticeConfig::default(),
      clock:        ClockConfig::default(),
      user:         UserProfile::default(),
      tasks:        TasksConfig::default(),
      categories:   default_categories(),
      sample_tasks: vec![]
    };
    cfg.sanitize();
    cfg
  }
}

impl UserProfile {
  pub fn avatar_url(&self) -> String {
    let text: String =
      form_urlencoded::byte_serialize(
        self.initials.as_bytes()
      )
      .collect();
    format!(
      "{AVATAR_PLACEHOLDER_BASE}?text={text}"
    )
  }
}

impl WidgetConfig {
  #[tracing::instrument(skip(text))]
  pub fn from_toml_str(
    text: &str
  ) -> anyhow::Result<Self> {
    let mut cfg: WidgetConfig =
      toml::from_str(text).context(
        "failed to parse widget config"
      )?;
    cfg.sanitize();
    cfg.registry()?;
    Ok(cfg)
  }

  /// Parses the configuration compiled
  /// into the crate, falling back to the
  /// built-in defaults.
  pub fn load_bundled() -> Self {
    match Self::from_toml_str(
      BUNDLED_CONFIG_TOML
    ) {
      | Ok(cfg) => {
        info!(
          version = cfg.version,
          categories = cfg.categories.len(),
          sample_tasks = cfg.sample_tasks.len(),
          "loaded widget config"
        );
        cfg
      }
      | Err(err) => {
        let detail = format!("{err:#}");
        error!(error = %detail, "failed to load widget config; using defaults");
        Self::default()
      }
    }
  }

  fn sanitize(&mut self) {
    if self.notice.timeout_ms == 0 {
      warn!(
        "notice.timeout_ms must be \
         positive; using default"
      );
      self.notice.timeout_ms =
        default_notice_timeout_ms();
    }

    if self.clock.refresh_ms < 1_000 {
      warn!(
        refresh_ms = self.clock.refresh_ms,
        "clock.refresh_ms below one \
         second; using default"
      );
      self.clock.refresh_ms =
        default_clock_refresh_ms();
    }

    self.user.name =
      self.user.name.trim().to_string();
    if self.user.name.is_empty() {
      self.user.name = default_user_name();
    }

    self.user.initials = self
      .user
      .initials
      .trim()
      .to_uppercase();
    if self.user.initials.is_empty() {
      self.user.initials =
        initials_from_name(&self.user.name);
    }

    self.tasks.default_category = self
      .tasks
      .default_category
      .trim()
      .to_string();
  }

  /// Builds the category registry and
  /// checks that the default category is
  /// part of it.
  pub fn registry(
    &self
  ) -> anyhow::Result<CategoryRegistry> {
    let registry = CategoryRegistry::new(
      self.categories.clone()
    )?;
    if !registry
      .contains(&self.tasks.default_category)
    {
      bail!(
        "default category {:?} is not a \
         registered category",
        self.tasks.default_category
      );
    }
    Ok(registry)
  }

  /// Creates the session's store, seeded
  /// with the sample tasks when enabled.
  #[tracing::instrument(skip(self))]
  pub fn build_store(
    &self
  ) -> anyhow::Result<TaskStore> {
    let registry = self.registry()?;
    let mut store = TaskStore::new(
      registry,
      self.tasks.default_category.clone()
    )?;

    if self.tasks.sample {
      for (idx, sample) in
        self.sample_tasks.iter().enumerate()
      {
        store
          .insert(
            &sample.title,
            &sample.category,
            sample.date,
            sample.completed
          )
          .with_context(|| {
            format!(
              "invalid sample task #{}",
              idx + 1
            )
          })?;
      }
      debug!(
        seeded = store.len(),
        "seeded sample tasks"
      );
    }

    Ok(store)
  }

  #[tracing::instrument(skip(
    self, overrides
  ))]
  pub fn apply_overrides<I>(
    &mut self,
    overrides: I
  ) where
    I: IntoIterator<
      Item = (String, String)
    >
  {
    // Explicit initials win over the ones
    // derived from a name override.
    let mut initials = None;
    for (k, v) in overrides {
      let key = k
        .strip_prefix("rc.")
        .unwrap_or(&k)
        .to_string();
      let value = v.trim();
      debug!(key = %key, value = %value, "applying override");

      match key.as_str() {
        | "notice.timeout_ms" => {
          match value.parse::<u32>() {
            | Ok(ms) => {
              self.notice.timeout_ms = ms
            }
            | Err(_) => {
              warn!(key = %key, value = %value, "ignoring non-numeric override")
            }
          }
        }
        | "clock.refresh_ms" => {
          match value.parse::<u32>() {
            | Ok(ms) => {
              self.clock.refresh_ms = ms
            }
            | Err(_) => {
              warn!(key = %key, value = %value, "ignoring non-numeric override")
            }
          }
        }
        | "user.name" => {
          self.user.name = value.to_string();
          self.user.initials.clear();
        }
        | "user.initials" => {
          initials = Some(value.to_string());
        }
        | "tasks.default_category" => {
          self.tasks.default_category =
            value.to_string();
        }
        | "tasks.sample" => {
          self.tasks.sample =
            parse_bool(value);
        }
        | _ => {
          warn!(key = %key, "ignoring unknown override")
        }
      }
    }

    if let Some(initials) = initials {
      self.user.initials = initials;
    }
    self.sanitize();
  }
}

/// Collects `rc.`-prefixed pairs from a
/// page query string such as
/// `?rc.notice.timeout_ms=1000`, decoding
/// `+` and percent escapes.
pub fn parse_query_overrides(
  search: &str
) -> Vec<(String, String)> {
  form_urlencoded::parse(
    search.trim_start_matches('?').as_bytes()
  )
  .filter(|(key, _)| key.starts_with("rc."))
  .map(|(key, value)| {
    (key.into_owned(), value.into_owned())
  })
  .collect()
}

fn initials_from_name(
  name: &str
) -> String {
  name
    .split_whitespace()
    .filter_map(|word| word.chars().next())
    .take(2)
    .flat_map(char::to_uppercase)
    .collect()
}

fn parse_bool(s: &str) -> bool {
  matches!(
    s.trim()
      .to_ascii_lowercase()
      .as_str(),
    "1" | "y" | "yes" | "on" | "true"
  )
}

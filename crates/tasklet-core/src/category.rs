use anyhow::bail;
use serde::{
  Deserialize,
  Serialize
};

/// Styling token for a category. Maps
/// onto the stylesheet's `*-500` color
/// scale.
#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum Color {
  Slate,
  Red,
  Orange,
  Amber,
  Green,
  Teal,
  Sky,
  Blue,
  Indigo,
  Violet,
  Purple,
  Fuchsia,
  Pink,
  Rose
}

impl Color {
  pub fn token(self) -> &'static str {
    match self {
      | Color::Slate => "slate",
      | Color::Red => "red",
      | Color::Orange => "orange",
      | Color::Amber => "amber",
      | Color::Green => "green",
      | Color::Teal => "teal",
      | Color::Sky => "sky",
      | Color::Blue => "blue",
      | Color::Indigo => "indigo",
      | Color::Violet => "violet",
      | Color::Purple => "purple",
      | Color::Fuchsia => "fuchsia",
      | Color::Pink => "pink",
      | Color::Rose => "rose"
    }
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
pub struct Category {
  pub key:   String,
  pub color: Color
}

impl Category {
  pub fn new(
    key: impl Into<String>,
    color: Color
  ) -> Self {
    Self {
      key: key.into(),
      color
    }
  }

  /// Keys double as display names.
  pub fn name(&self) -> &str {
    &self.key
  }
}

/// Ordered, read-only set of categories.
/// Registry order is render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRegistry {
  categories: Vec<Category>
}

impl CategoryRegistry {
  pub fn new(
    categories: Vec<Category>
  ) -> anyhow::Result<Self> {
    for (idx, category) in
      categories.iter().enumerate()
    {
      if category.key.trim().is_empty() {
        bail!(
          "category #{} has an empty key",
          idx + 1
        );
      }

      if categories[..idx]
        .iter()
        .any(|prev| prev.key == category.key)
      {
        bail!(
          "duplicate category key: {}",
          category.key
        );
      }
    }

    Ok(Self {
      categories
    })
  }

  pub fn get(
    &self,
    key: &str
  ) -> Option<&Category> {
    self
      .categories
      .iter()
      .find(|category| category.key == key)
  }

  pub fn contains(
    &self,
    key: &str
  ) -> bool {
    self.get(key).is_some()
  }

  pub fn color_of(
    &self,
    key: &str
  ) -> Option<Color> {
    self.get(key).map(|category| category.color)
  }

  pub fn iter(
    &self
  ) -> impl Iterator<Item = &Category> {
    self.categories.iter()
  }

  pub fn len(&self) -> usize {
    self.categories.len()
  }

  pub fn is_empty(&self) -> bool {
    self.categories.is_empty()
  }
}

impl Default for CategoryRegistry {
  fn default() -> Self {
    Self {
      categories: vec![
        Category::new(
          "Business",
          Color::Fuchsia
        ),
        Category::new(
          "Personal",
          Color::Blue
        ),
      ]
    }
  }
}

#[cfg(test)]
mod tests {
  use super::{
    Category,
    CategoryRegistry,
    Color
  };

  #[test]
  fn default_registry_keeps_declared_order()
  {
    let registry =
      CategoryRegistry::default();
    let keys: Vec<&str> = registry
      .iter()
      .map(|category| category.name())
      .collect();
    assert_eq!(
      keys,
      vec!["Business", "Personal"]
    );
    assert_eq!(
      registry.color_of("Business"),
      Some(Color::Fuchsia)
    );
    assert!(!registry.contains("Work"));
  }

  #[test]
  fn rejects_duplicate_and_blank_keys() {
    let dup = CategoryRegistry::new(vec![
      Category::new("Home", Color::Green),
      Category::new("Home", Color::Red),
    ]);
    assert!(dup.is_err());

    let blank = CategoryRegistry::new(
      vec![Category::new(
        "  ",
        Color::Green
      )]
    );
    assert!(blank.is_err());
  }
}

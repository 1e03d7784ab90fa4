/// Per-category completion counts.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
)]
pub struct CategorySummary {
  pub total:     usize,
  pub completed: usize,
  pub percent:   f64
}

impl CategorySummary {
  pub fn from_counts(
    total: usize,
    completed: usize
  ) -> Self {
    let percent = if total > 0 {
      completed as f64 / total as f64
        * 100.0
    } else {
      0.0
    };

    Self {
      total,
      completed,
      percent
    }
  }
}

#[cfg(test)]
mod tests {
  use super::CategorySummary;

  #[test]
  fn percent_is_zero_without_tasks() {
    let summary =
      CategorySummary::from_counts(0, 0);
    assert_eq!(summary.percent, 0.0);
  }

  #[test]
  fn percent_is_completed_share() {
    let summary =
      CategorySummary::from_counts(4, 1);
    assert_eq!(summary.percent, 25.0);
  }
}

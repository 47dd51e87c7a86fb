// crates/domain/src/model/report.rs
use serde::{Deserialize, Serialize};

use crate::{model::FileOutcome, options::CountPolicy};

/// Outcomes of one batch, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn push(&mut self, outcome: FileOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.attempted() - self.succeeded()
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    pub fn is_clean(&self) -> bool {
        self.failed() == 0
    }

    /// The number reported by the summary line under `policy`.
    pub fn summary_count(&self, policy: CountPolicy) -> usize {
        match policy {
            CountPolicy::Attempted => self.attempted(),
            CountPolicy::Succeeded => self.succeeded(),
        }
    }
}

impl FromIterator<FileOutcome> for BatchReport {
    fn from_iter<I: IntoIterator<Item = FileOutcome>>(iter: I) -> Self {
        Self { outcomes: iter.into_iter().collect() }
    }
}

//! Progress counters derived from a roadmap walk
//!
//! Never persisted: every render recomputes them from the practice leaves.

/// Practice totals accumulated while walking the checklist
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgressCounters {
    pub total: usize,
    pub completed: usize,
}

impl ProgressCounters {
    pub fn new(total: usize, completed: usize) -> Self {
        Self { total, completed }
    }

    /// Count one practice leaf
    pub fn record(&mut self, completed: bool) {
        self.total += 1;
        if completed {
            self.completed += 1;
        }
    }

    /// Completion percentage in 0.0..=100.0 (0 when there is nothing to do)
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        100.0 * self.completed as f64 / self.total as f64
    }

    /// Caption printed over the progress bar
    pub fn caption(&self) -> String {
        format!(
            "Progresso Global: {} de {} Práticas ({:.1}%)",
            self.completed,
            self.total,
            self.percentage()
        )
    }
}

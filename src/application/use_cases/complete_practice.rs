//! CompletePracticeUseCase - mark a pending practice done, once per cooldown

use std::time::Duration;

use crate::application::ports::{CompletionLog, DocumentRepository};
use crate::domain::entities::RoadmapDocument;
use crate::domain::errors::DomainError;

use super::EditError;

/// Default wait between two completions
pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(4 * 60 * 60);

/// A completed practice and the updated document
#[derive(Debug)]
pub struct Completion {
    pub document: RoadmapDocument,
    /// `"[short module] subtopic -> practice"`
    pub label: String,
    /// Writing the cooldown timestamp; the completion stands either way
    pub recorded: std::io::Result<()>,
}

/// Use case for completing practices
pub struct CompletePracticeUseCase<'a, R, L>
where
    R: DocumentRepository + ?Sized,
    L: CompletionLog + ?Sized,
{
    repository: &'a R,
    completions: &'a L,
    cooldown: Duration,
}

impl<'a, R, L> CompletePracticeUseCase<'a, R, L>
where
    R: DocumentRepository + ?Sized,
    L: CompletionLog + ?Sized,
{
    pub fn new(repository: &'a R, completions: &'a L) -> Self {
        Self {
            repository,
            completions,
            cooldown: DEFAULT_COOLDOWN,
        }
    }

    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    /// Time left before another completion is allowed at `now` (Unix seconds)
    ///
    /// A timestamp so far ahead that the wait does not fit a `Duration` is
    /// treated as unreadable: no cooldown.
    pub fn cooldown_remaining(&self, now: f64) -> Option<Duration> {
        let last = self.completions.last_completion()?;
        let remaining = last + self.cooldown.as_secs_f64() - now;
        if remaining <= 0.0 {
            return None;
        }
        match Duration::try_from_secs_f64(remaining) {
            Ok(remaining) => Some(remaining),
            Err(_) => {
                crate::log!("Warning: ignoring completion timestamp {}", last);
                None
            }
        }
    }

    /// Complete the `number`-th pending practice (1-based) at time `now`
    ///
    /// Numbers follow [`RoadmapDocument::pending_practices`]. Once the document
    /// is saved the completion is final; a failure to write the timestamp is
    /// logged and returned in [`Completion::recorded`].
    pub fn execute(&self, number: usize, now: f64) -> Result<Completion, EditError> {
        if let Some(remaining) = self.cooldown_remaining(now) {
            return Err(DomainError::CooldownActive { remaining }.into());
        }

        let mut document = self.repository.load()?;
        let pending = document.pending_practices();
        if pending.is_empty() {
            return Err(DomainError::NothingPending.into());
        }

        let target = number
            .checked_sub(1)
            .and_then(|i| pending.get(i))
            .ok_or_else(|| {
                DomainError::NotFound(format!(
                    "pending practice #{} (1..={} available)",
                    number,
                    pending.len()
                ))
            })?;

        if let Some(practice) = document.practice_mut(target) {
            practice.completed = true;
        }
        self.repository.save(&document)?;
        crate::log!("Completed practice {}", target.label);

        let recorded = self.completions.record_completion(now);
        if let Err(e) = &recorded {
            crate::log!("Warning: completion time not recorded: {}", e);
        }

        Ok(Completion {
            document,
            label: target.label.clone(),
            recorded,
        })
    }
}

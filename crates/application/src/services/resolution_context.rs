use jsx_dns_domain::{RecordData, ResourceRecord};
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::ports::Resolution;

/// Accumulator shared by every branch of one top-level resolution.
///
/// Concurrent CNAME chase branches append to the same answer list, so the
/// relative order of records from different branches is unspecified. Each
/// branch's own records stay in order. The lock is never held across an
/// await point.
#[derive(Debug, Default)]
pub struct ResolutionContext {
    state: Mutex<ResolutionState>,
}

#[derive(Debug, Default)]
struct ResolutionState {
    visited: HashSet<String>,
    answers: Vec<ResourceRecord>,
    authorities: Option<Vec<ResourceRecord>>,
    resolved: Vec<RecordData>,
}

impl ResolutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when `name` was already visited by this resolution.
    pub fn mark_visited(&self, name: &str) -> bool {
        self.state().visited.insert(name.to_ascii_lowercase())
    }

    pub fn push_answer(&self, record: ResourceRecord) {
        self.state().answers.push(record);
    }

    pub fn extend_answers<I>(&self, records: I)
    where
        I: IntoIterator<Item = ResourceRecord>,
    {
        self.state().answers.extend(records);
    }

    pub fn set_authorities_if_absent<F>(&self, authorities: F)
    where
        F: FnOnce() -> Vec<ResourceRecord>,
    {
        self.state().authorities.get_or_insert_with(authorities);
    }

    pub fn replace_authorities(&self, authorities: Option<Vec<ResourceRecord>>) {
        self.state().authorities = authorities;
    }

    /// Claims every CNAME answer whose target has not been chased yet and
    /// returns the targets without their trailing root dot.
    pub fn take_unresolved_aliases(&self) -> Vec<String> {
        let mut state = self.state();
        let ResolutionState {
            answers, resolved, ..
        } = &mut *state;

        let mut targets = Vec::new();
        for record in answers.iter() {
            let Some(target) = record.data.cname_target() else {
                continue;
            };
            if resolved.contains(&record.data) {
                continue;
            }
            resolved.push(record.data.clone());
            targets.push(target.strip_suffix('.').unwrap_or(target).to_string());
        }
        targets
    }

    pub fn answer_count(&self) -> usize {
        self.state().answers.len()
    }

    pub fn into_resolution(self) -> Resolution {
        let state = self
            .state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        Resolution {
            answers: state.answers,
            authorities: state.authorities.unwrap_or_default(),
        }
    }

    fn state(&self) -> MutexGuard<'_, ResolutionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

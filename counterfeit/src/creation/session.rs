use std::collections::{HashMap, HashSet};

use crate::creation::ResolutionStrategy;
use crate::entities::TypeKey;

/// Terminal outcome of the resolution of a type within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// The type was resolved by this strategy, later requests go straight to it.
    Resolved(ResolutionStrategy),
    /// The type can't be resolved, it won't be attempted again in the session.
    Unresolvable,
}

/// State of one top level creation request.
///
/// Track the types currently being resolved, to break dependency cycles, and the terminal
/// outcome of every type already resolved: an unresolvable type is never attempted twice, and a
/// resolved type is built again with the strategy that worked, so each request of it gets its own
/// dummy. A session must never be shared between two requests.
#[derive(Debug, Default)]
pub struct DummyCreationSession {
    in_progress: HashSet<TypeKey>,
    outcomes: HashMap<TypeKey, ResolutionOutcome>,
}

impl DummyCreationSession {
    /// DummyCreationSession factory
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the type is currently being resolved.
    pub fn is_resolving(&self, type_key: &TypeKey) -> bool {
        self.in_progress.contains(type_key)
    }

    /// Terminal outcome of the type, if its resolution is over.
    pub fn outcome(&self, type_key: &TypeKey) -> Option<&ResolutionOutcome> {
        self.outcomes.get(type_key)
    }

    /// Mark the type as being resolved.
    ///
    /// Return false if it already is, meaning that the type depends on itself.
    pub fn try_begin_resolving(&mut self, type_key: &TypeKey) -> bool {
        self.in_progress.insert(type_key.clone())
    }

    /// End the resolution of the type and record its outcome.
    ///
    /// `strategy` is the one that resolved the type, `None` if every strategy failed.
    pub fn complete_resolution(
        &mut self,
        type_key: &TypeKey,
        strategy: Option<ResolutionStrategy>,
    ) {
        self.in_progress.remove(type_key);
        let outcome = match strategy {
            Some(strategy) => ResolutionOutcome::Resolved(strategy),
            None => ResolutionOutcome::Unresolvable,
        };
        self.outcomes.insert(type_key.clone(), outcome);
    }
}

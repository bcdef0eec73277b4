use std::sync::{Arc, RwLock};

use crate::StdResult;
use crate::entities::{TypeKey, Value};
use crate::fake::{FakeCall, FakeObjectCallRule};

/// Intercept the calls made on a fake and answer them with its rule chain.
///
/// Rules are evaluated in chain order, the first applicable rule answers. A call no rule applies
/// to returns nothing.
pub struct FakeManager {
    faked_type: TypeKey,
    rules: RwLock<Vec<Arc<dyn FakeObjectCallRule>>>,
}

impl FakeManager {
    /// FakeManager factory
    pub fn new(faked_type: TypeKey) -> Self {
        Self {
            faked_type,
            rules: RwLock::new(vec![]),
        }
    }

    /// Type the managed fake was created for.
    pub fn faked_type(&self) -> &TypeKey {
        &self.faked_type
    }

    /// Add a rule at the start of the chain, it will take precedence over every existing rule.
    pub fn add_rule_first(&self, rule: Arc<dyn FakeObjectCallRule>) {
        self.rules.write().unwrap().insert(0, rule);
    }

    /// Add a rule at the end of the chain.
    pub fn add_rule(&self, rule: Arc<dyn FakeObjectCallRule>) {
        self.rules.write().unwrap().push(rule);
    }

    /// Number of rules in the chain.
    pub fn rules_count(&self) -> usize {
        self.rules.read().unwrap().len()
    }

    /// Answer the call with the first applicable rule.
    pub fn intercept(&self, call: &FakeCall) -> StdResult<Option<Value>> {
        let rule = self
            .rules
            .read()
            .unwrap()
            .iter()
            .find(|rule| rule.is_applicable_to(call))
            .cloned();

        match rule {
            Some(rule) => rule.apply(call),
            None => Ok(None),
        }
    }
}

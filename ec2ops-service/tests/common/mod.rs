use std::sync::Mutex;

use async_trait::async_trait;

use ec2ops_contracts::{DesiredState, ElbTagRequest, ModuleError, TagStore};
use ec2ops_types::TagSet;

/// One call made against the mock store, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    Fetch,
    Add(Vec<(String, String)>),
    Remove(Vec<String>),
}

/// In-memory `TagStore` that records its call sequence and applies
/// mutations to a held tag set, so tests can assert both the wire-level
/// ordering and that handlers report the re-fetched state.
pub struct MockTagStore {
    known: bool,
    state: Mutex<TagSet>,
    calls: Mutex<Vec<StoreCall>>,
    side_effect: Option<(String, String)>,
    mutation_error: Option<ModuleError>,
}

impl MockTagStore {
    pub fn with_tags(state: TagSet) -> Self {
        Self {
            known: true,
            state: Mutex::new(state),
            calls: Mutex::new(Vec::new()),
            side_effect: None,
            mutation_error: None,
        }
    }

    pub fn unknown_balancer() -> Self {
        Self {
            known: false,
            ..Self::with_tags(TagSet::new())
        }
    }

    /// Also attach this pair on every add, standing in for server-side
    /// changes the handler can only observe by re-fetching.
    pub fn with_side_effect(mut self, key: &str, value: &str) -> Self {
        self.side_effect = Some((key.to_string(), value.to_string()));
        self
    }

    pub fn failing_mutations(mut self, error: ModuleError) -> Self {
        self.mutation_error = Some(error);
        self
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn state(&self) -> TagSet {
        self.state.lock().unwrap().clone()
    }
}

#[async_trait]
impl TagStore for MockTagStore {
    async fn fetch_tags(&self, name: &str) -> Result<TagSet, ModuleError> {
        self.calls.lock().unwrap().push(StoreCall::Fetch);
        if !self.known {
            return Err(ModuleError::not_found(format!("ELB {name} not found")));
        }
        Ok(self.state.lock().unwrap().clone())
    }

    async fn add_tags(&self, _name: &str, tags: &TagSet) -> Result<(), ModuleError> {
        self.calls.lock().unwrap().push(StoreCall::Add(
            tags.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        ));
        if let Some(error) = &self.mutation_error {
            return Err(error.clone());
        }

        let mut state = self.state.lock().unwrap();
        for (key, value) in tags.iter() {
            state.insert(key, value);
        }
        if let Some((key, value)) = &self.side_effect {
            state.insert(key.clone(), value.clone());
        }
        Ok(())
    }

    async fn remove_tags(&self, _name: &str, keys: &[String]) -> Result<(), ModuleError> {
        self.calls
            .lock()
            .unwrap()
            .push(StoreCall::Remove(keys.to_vec()));
        if let Some(error) = &self.mutation_error {
            return Err(error.clone());
        }

        let mut state = self.state.lock().unwrap();
        for key in keys {
            state.remove(key);
        }
        Ok(())
    }
}

pub fn tags(pairs: &[(&str, &str)]) -> TagSet {
    pairs.iter().copied().collect()
}

pub fn request(name: &str, state: DesiredState, desired: Option<TagSet>) -> ElbTagRequest {
    ElbTagRequest {
        name: name.to_string(),
        state,
        tags: desired,
        region: None,
        profile: None,
    }
}

use serde::Serialize;
use serde_json::Value;
use std::{
    borrow::Cow,
    collections::HashMap,
    ops::{Deref, DerefMut},
};

/**
A map of plain template data for a [`View`](crate::View). The values
can be any type that is serde serializable.

A view that stores request data in an `Assigns` and returns it from
[`View::assigns`](crate::View::assigns) gets variable resolution
without writing a [`View::var`](crate::View::var) accessor.
*/
#[derive(Default, Serialize, Debug, Clone)]
pub struct Assigns(HashMap<Cow<'static, str>, Value>);

impl Assigns {
    /// Constructs an empty `Assigns` map.
    pub fn new() -> Self {
        Self::default()
    }

    /**
    Serializes `value` and stores it under `key`, replacing any
    previous entry for that key. Panics if the value cannot be
    serialized.
    */
    pub fn set(&mut self, key: impl Into<Cow<'static, str>>, value: impl Serialize) {
        self.0.insert(
            key.into(),
            serde_json::to_value(value).expect("could not serialize assigns"),
        );
    }

    /// Chainable [`Assigns::set`].
    pub fn with(mut self, key: impl Into<Cow<'static, str>>, value: impl Serialize) -> Self {
        self.set(key, value);
        self
    }
}

impl Deref for Assigns {
    type Target = HashMap<Cow<'static, str>, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Assigns {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

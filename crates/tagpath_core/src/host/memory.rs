//! In-memory reference host.
//!
//! Values have copy semantics: `get` hands out clones, so a nested container
//! read from a parent is detached until it is `set` back. This matches hosts
//! whose nested containers are serialized snapshots.

use crate::host::TaggedContainer;
use crate::model::key::NamespacedKey;
use crate::model::value::{TagType, TagValue};
use std::collections::HashMap;
use std::convert::Infallible;
use std::hash::Hash;

/// Hash-map backed tagged container.
#[derive(Debug, Clone)]
pub struct MemoryContainer<K = NamespacedKey> {
    entries: HashMap<K, TagValue<MemoryContainer<K>>>,
}

impl<K> MemoryContainer<K> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over keys in unspecified order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }
}

impl<K: Eq + Hash> MemoryContainer<K> {
    /// Returns whether `key` holds a value of any tag.
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }
}

impl<K> Default for MemoryContainer<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> PartialEq for MemoryContainer<K> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq + Hash + Clone> TaggedContainer for MemoryContainer<K> {
    type Key = K;
    type Error = Infallible;

    fn has(&self, key: &K, tag: TagType) -> Result<bool, Infallible> {
        Ok(self
            .entries
            .get(key)
            .is_some_and(|value| value.tag() == tag))
    }

    fn get(&self, key: &K, tag: TagType) -> Result<Option<TagValue<Self>>, Infallible> {
        Ok(self
            .entries
            .get(key)
            .filter(|value| value.tag() == tag)
            .cloned())
    }

    fn set(&mut self, key: &K, value: TagValue<Self>) -> Result<(), Infallible> {
        self.entries.insert(key.clone(), value);
        Ok(())
    }

    fn remove(&mut self, key: &K) -> Result<(), Infallible> {
        self.entries.remove(key);
        Ok(())
    }

    fn new_empty(&self) -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryContainer;
    use crate::host::TaggedContainer;
    use crate::model::value::{TagType, TagValue};

    #[test]
    fn get_filters_by_tag() {
        let mut container = MemoryContainer::<&str>::new();
        container.set(&"hp", TagValue::Int(20)).expect("set");

        assert_eq!(
            container.get(&"hp", TagType::Int).expect("get"),
            Some(TagValue::Int(20))
        );
        assert_eq!(container.get(&"hp", TagType::Long).expect("get"), None);
        assert!(!container.has(&"hp", TagType::Container).expect("has"));
        assert!(container.contains_key(&"hp"));
        assert_eq!(container.keys().collect::<Vec<_>>(), vec![&"hp"]);
    }

    #[test]
    fn nested_reads_are_detached_copies() {
        let mut root = MemoryContainer::<&str>::new();
        root.set(&"inner", TagValue::Container(root.new_empty()))
            .expect("set");

        let mut inner = root
            .child_container(&"inner")
            .expect("read")
            .expect("inner exists");
        inner.set(&"x", TagValue::Byte(1)).expect("set");

        let stored = root
            .child_container(&"inner")
            .expect("read")
            .expect("inner exists");
        assert!(stored.is_empty());
        assert_eq!(inner.len(), 1);
    }

    #[test]
    fn get_or_default_falls_back_on_missing_or_mismatched_tag() {
        let mut container = MemoryContainer::<&str>::new();
        container.set(&"name", "steve".into()).expect("set");

        let value = container
            .get_or_default(&"name", TagType::Int, TagValue::Int(7))
            .expect("get");
        assert_eq!(value, TagValue::Int(7));

        container.remove(&"name").expect("remove");
        container.remove(&"name").expect("second remove is a no-op");
        assert!(container.is_empty());
    }
}

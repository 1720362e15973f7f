use std::fmt;

use log::{debug, trace};

use crate::config::HashMapConfig;
use crate::error::ConfigError;
use crate::hash;
use crate::linked_list::{self, ChainedList};

#[derive(Clone)]
struct Entry<V> {
    key: String,
    value: V,
}

type Bucket<V> = ChainedList<Entry<V>>;

/// String-keyed map that chains colliding entries in per-bucket lists.
///
/// A key lives in bucket `string_hash(key) mod capacity`. Before a new key is
/// added the map doubles its bucket array if the entry count would otherwise
/// exceed `load_factor * capacity`, so `length() / capacity()` never passes
/// the threshold once a call returns. Removal never shrinks the table.
///
/// Iteration visits buckets in index order and each chain in insertion
/// order. That order changes whenever the table grows.
#[derive(Clone)]
pub struct HashMap<V> {
    buckets: Vec<Bucket<V>>,
    size: usize,
    config: HashMapConfig,
}

impl<V> HashMap<V> {
    pub fn new() -> Self {
        Self::from_config(HashMapConfig::default())
    }

    /// Map with `capacity` buckets (at least one) and the default load factor.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_config(HashMapConfig::new().with_initial_capacity(capacity.max(1)))
    }

    pub fn with_config(config: HashMapConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: HashMapConfig) -> Self {
        HashMap {
            buckets: Self::empty_buckets(config.initial_capacity),
            size: 0,
            config,
        }
    }

    fn empty_buckets(capacity: usize) -> Vec<Bucket<V>> {
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, ChainedList::new);
        buckets
    }

    pub fn hash(&self, key: &str) -> i32 {
        hash::string_hash(key)
    }

    pub fn bucket_index(&self, key: &str) -> usize {
        hash::bucket_index(key, self.buckets.len())
    }

    /// Stores `value` under `key`, overwriting any value already there.
    pub fn set<K: Into<String>>(&mut self, key: K, value: V) {
        self.insert(key, value);
    }

    /// Like [`set`](Self::set) but hands back the value that was replaced.
    pub fn insert<K: Into<String>>(&mut self, key: K, value: V) -> Option<V> {
        let key = key.into();
        let index = self.bucket_index(&key);

        if let Some(entry) = self.buckets[index]
            .iter_mut()
            .find(|entry| entry.key == key)
        {
            return Some(std::mem::replace(&mut entry.value, value));
        }

        self.reserve_one();
        self.place(Entry { key, value });
        self.size += 1;
        None
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.buckets[self.bucket_index(key)]
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter_mut()
            .find(|entry| entry.key == key)
            .map(|entry| &mut entry.value)
    }

    pub fn has(&self, key: &str) -> bool {
        self.buckets[self.bucket_index(key)]
            .find_by(|entry| entry.key == key)
            .is_some()
    }

    /// Removes `key`, returning whether it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        self.remove_entry(key).is_some()
    }

    pub fn remove_entry(&mut self, key: &str) -> Option<(String, V)> {
        let index = self.bucket_index(key);
        let bucket = &mut self.buckets[index];
        let position = bucket.find_by(|entry| entry.key == key)?;
        let entry = bucket.remove_at(position)?;
        self.size -= 1;
        Some((entry.key, entry.value))
    }

    pub fn length(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.capacity() as f64
    }

    /// Load factor above which the table grows.
    pub fn threshold(&self) -> f64 {
        self.config.load_factor
    }

    pub fn config(&self) -> &HashMapConfig {
        &self.config
    }

    /// Drops every entry and returns to the initial bucket count.
    pub fn clear(&mut self) {
        trace!(
            "clearing {} entries, capacity {} -> {}",
            self.size,
            self.capacity(),
            self.config.initial_capacity
        );
        self.buckets = Self::empty_buckets(self.config.initial_capacity);
        self.size = 0;
    }

    pub fn keys(&self) -> Vec<&str> {
        self.iter().map(|(key, _)| key).collect()
    }

    pub fn values(&self) -> Vec<&V> {
        self.iter().map(|(_, value)| value).collect()
    }

    pub fn entries(&self) -> Vec<(&str, &V)> {
        self.iter().collect()
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            buckets: self.buckets.iter(),
            chain: None,
            remaining: self.size,
        }
    }

    /// Doubles the bucket count and redistributes every entry.
    pub fn rehash(&mut self) {
        let new_capacity = self.capacity().saturating_mul(2);
        self.resize(new_capacity);
    }

    // Grows until one more entry fits under the threshold.
    fn reserve_one(&mut self) {
        let mut new_capacity = self.capacity();
        while self.exceeds_threshold(self.size + 1, new_capacity) {
            match new_capacity.checked_mul(2) {
                Some(doubled) => new_capacity = doubled,
                None => break,
            }
        }
        if new_capacity != self.capacity() {
            self.resize(new_capacity);
        }
    }

    fn exceeds_threshold(&self, entries: usize, capacity: usize) -> bool {
        entries as f64 / capacity as f64 > self.config.load_factor
    }

    // Entries move through `place`, which never grows the table, so a
    // resize cannot start another one.
    fn resize(&mut self, new_capacity: usize) {
        debug!(
            "rehashing {} entries: {} -> {} buckets",
            self.size,
            self.capacity(),
            new_capacity
        );

        let old_buckets = std::mem::replace(&mut self.buckets, Self::empty_buckets(new_capacity));
        for bucket in old_buckets {
            for entry in bucket {
                self.place(entry);
            }
        }
    }

    // Appends without checking for an existing key or the load factor.
    fn place(&mut self, entry: Entry<V>) {
        let index = self.bucket_index(&entry.key);
        self.buckets[index].append(entry);
    }
}

impl<V> Default for HashMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for HashMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for HashMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = HashMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for HashMap<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

/// Entries of a [`HashMap`] in bucket-then-chain order.
pub struct Iter<'a, V> {
    buckets: std::slice::Iter<'a, Bucket<V>>,
    chain: Option<linked_list::Iter<'a, Entry<V>>>,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.as_mut().and_then(Iterator::next) {
                self.remaining -= 1;
                return Some((entry.key.as_str(), &entry.value));
            }
            self.chain = Some(self.buckets.next()?.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, V> IntoIterator for &'a HashMap<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//! Vertex map — a u64-keyed hash table with chained buckets.
//!
//! Keys land in bucket `key % bucket_count`. When the load factor
//! (`len / bucket_count`) reaches the configured maximum, the table doubles
//! (or jumps to [`INITIAL_BUCKET_COUNT`] on first insert) and every entry is
//! rehashed.
//!
//! Iteration borrows the map, so the compiler rejects any mutation while an
//! iterator is alive. Iteration order is unspecified and may change after
//! any insert or remove.

use std::fmt;

use crate::types::{GraphError, GraphResult, DEFAULT_MAX_LOAD_FACTOR, INITIAL_BUCKET_COUNT};

/// Callback run on every value the map still owns when it is destroyed.
pub type Releaser<V> = Box<dyn FnMut(V)>;

struct Entry<V> {
    key: u64,
    value: V,
}

/// Hash table from `u64` keys to owned values.
pub struct VertexMap<V> {
    buckets: Vec<Vec<Entry<V>>>,
    len: usize,
    max_load_factor: f32,
    releaser: Option<Releaser<V>>,
}

impl<V> VertexMap<V> {
    /// Create an empty map with no buckets allocated.
    pub fn new() -> Self {
        Self {
            buckets: Vec::new(),
            len: 0,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
            releaser: None,
        }
    }

    /// Create an empty map with `capacity` buckets.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Vec::new);
        Self {
            buckets,
            len: 0,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
            releaser: None,
        }
    }

    /// Create an empty map that hands every value still stored at
    /// destruction time to `releaser`.
    pub fn with_releaser(capacity: usize, releaser: impl FnMut(V) + 'static) -> Self {
        let mut map = Self::with_capacity(capacity);
        map.releaser = Some(Box::new(releaser));
        map
    }

    /// Set the load factor that triggers growth. Non-positive or NaN values
    /// are ignored.
    pub fn with_max_load_factor(mut self, max_load_factor: f32) -> Self {
        if max_load_factor > 0.0 {
            self.max_load_factor = max_load_factor;
        }
        self
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets currently allocated.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Current `len / bucket_count`, 0 when no buckets exist.
    pub fn load_factor(&self) -> f32 {
        if self.buckets.is_empty() {
            return 0.0;
        }
        self.len as f32 / self.buckets.len() as f32
    }

    /// The configured growth threshold.
    pub fn max_load_factor(&self) -> f32 {
        self.max_load_factor
    }

    /// Add `extra` buckets and rehash every entry. Reserving 0 is a no-op.
    ///
    /// If the new bucket table cannot be allocated the map is unchanged.
    pub fn reserve(&mut self, extra: usize) -> GraphResult<()> {
        if extra == 0 {
            return Ok(());
        }

        let new_count = self
            .buckets
            .len()
            .checked_add(extra)
            .ok_or_else(|| GraphError::Allocation("bucket count overflow".into()))?;

        let mut fresh: Vec<Vec<Entry<V>>> = Vec::new();
        fresh.try_reserve_exact(new_count)?;
        fresh.resize_with(new_count, Vec::new);

        for bucket in std::mem::take(&mut self.buckets) {
            for entry in bucket {
                let pos = (entry.key % new_count as u64) as usize;
                fresh[pos].push(entry);
            }
        }
        self.buckets = fresh;

        log::trace!(
            "VertexMap rehashed {} entries into {} buckets",
            self.len,
            new_count
        );
        Ok(())
    }

    /// Insert `value` under `key`, returning the value it replaced.
    pub fn insert(&mut self, key: u64, value: V) -> Option<V> {
        self.grow_if_needed();

        let pos = self.bucket_pos(key);
        let bucket = &mut self.buckets[pos];
        if let Some(entry) = bucket.iter_mut().find(|e| e.key == key) {
            return Some(std::mem::replace(&mut entry.value, value));
        }

        bucket.push(Entry { key, value });
        self.len += 1;
        None
    }

    /// Get the value stored under `key`.
    pub fn get(&self, key: u64) -> Option<&V> {
        if self.len == 0 {
            return None;
        }
        self.buckets[self.bucket_pos(key)]
            .iter()
            .find(|e| e.key == key)
            .map(|e| &e.value)
    }

    /// Get a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: u64) -> Option<&mut V> {
        if self.len == 0 {
            return None;
        }
        let pos = self.bucket_pos(key);
        self.buckets[pos]
            .iter_mut()
            .find(|e| e.key == key)
            .map(|e| &mut e.value)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: u64) -> bool {
        self.get(key).is_some()
    }

    /// Remove `key`, handing its value back to the caller. Absent keys are a
    /// no-op returning `None`.
    pub fn remove(&mut self, key: u64) -> Option<V> {
        if self.len == 0 {
            return None;
        }
        let pos = self.bucket_pos(key);
        let bucket = &mut self.buckets[pos];
        let idx = bucket.iter().position(|e| e.key == key)?;
        self.len -= 1;
        Some(bucket.swap_remove(idx).value)
    }

    /// Release every stored value and free the bucket table.
    ///
    /// Values go through the releaser, if one was given, exactly once each.
    /// The map stays usable: empty, with zero buckets.
    pub fn destroy(&mut self) {
        let buckets = std::mem::take(&mut self.buckets);
        self.len = 0;
        match self.releaser.as_mut() {
            Some(release) => {
                for entry in buckets.into_iter().flatten() {
                    release(entry.value);
                }
            }
            None => drop(buckets),
        }
    }

    /// Iterate over `(key, &value)` pairs.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            buckets: self.buckets.iter(),
            current: (&[] as &[Entry<V>]).iter(),
            remaining: self.len,
        }
    }

    /// Iterate over the keys.
    pub fn keys(&self) -> impl Iterator<Item = u64> + '_ {
        self.iter().map(|(k, _)| k)
    }

    /// Iterate over the values.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    fn bucket_pos(&self, key: u64) -> usize {
        (key % self.buckets.len() as u64) as usize
    }

    fn grow_if_needed(&mut self) {
        let count = self.buckets.len();
        let extra = if count == 0 {
            INITIAL_BUCKET_COUNT
        } else if self.load_factor() >= self.max_load_factor {
            count
        } else {
            return;
        };

        if let Err(e) = self.reserve(extra) {
            log::warn!("VertexMap growth to {} buckets failed: {}", count + extra, e);
            if self.buckets.is_empty() {
                self.buckets.push(Vec::new());
            }
        }
    }
}

impl<V> Default for VertexMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Drop for VertexMap<V> {
    fn drop(&mut self) {
        if self.releaser.is_some() {
            self.destroy();
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for VertexMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V> FromIterator<(u64, V)> for VertexMap<V> {
    fn from_iter<I: IntoIterator<Item = (u64, V)>>(iter: I) -> Self {
        let mut map = VertexMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// Borrowing iterator over a [`VertexMap`].
pub struct Iter<'a, V> {
    buckets: std::slice::Iter<'a, Vec<Entry<V>>>,
    current: std::slice::Iter<'a, Entry<V>>,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (u64, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.next() {
                self.remaining -= 1;
                return Some((entry.key, &entry.value));
            }
            if self.remaining == 0 {
                return None;
            }
            self.current = self.buckets.next()?.iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, V> IntoIterator for &'a VertexMap<V> {
    type Item = (u64, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over a [`VertexMap`]. Values move to the caller and
/// bypass the releaser.
pub struct IntoIter<V> {
    buckets: std::vec::IntoIter<Vec<Entry<V>>>,
    current: std::vec::IntoIter<Entry<V>>,
}

impl<V> Iterator for IntoIter<V> {
    type Item = (u64, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.next() {
                return Some((entry.key, entry.value));
            }
            self.current = self.buckets.next()?.into_iter();
        }
    }
}

impl<V> IntoIterator for VertexMap<V> {
    type Item = (u64, V);
    type IntoIter = IntoIter<V>;

    fn into_iter(mut self) -> Self::IntoIter {
        let buckets = std::mem::take(&mut self.buckets);
        self.len = 0;
        IntoIter {
            buckets: buckets.into_iter(),
            current: Vec::new().into_iter(),
        }
    }
}

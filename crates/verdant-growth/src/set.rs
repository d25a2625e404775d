//! Named collections of built profiles and an atomically swappable snapshot.
//!
//! A [`ProfileSet`] is never edited after it is published. Reloading builds a
//! fresh set and swaps it into the [`ProfileStore`]; resolve calls already
//! holding the previous snapshot keep using it undisturbed.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::profile::{GrowthProfile, normalize_name};

/// Profiles keyed by normalised name.
#[derive(Clone, Debug, Default)]
pub struct ProfileSet {
    profiles: HashMap<String, Arc<GrowthProfile>>,
}

impl ProfileSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a profile under its own name, returning the one it replaced.
    pub fn insert(&mut self, profile: GrowthProfile) -> Option<Arc<GrowthProfile>> {
        self.profiles
            .insert(profile.name().to_string(), Arc::new(profile))
    }

    /// Looks up a profile. `name` is normalised first, so `"RED_MUSHROOM"`
    /// finds `"red mushroom"`.
    pub fn get(&self, name: &str) -> Option<&Arc<GrowthProfile>> {
        self.profiles.get(&normalize_name(name))
    }

    /// Returns the number of profiles.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Returns `true` if the set holds no profiles.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Iterates over all profiles in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<GrowthProfile>> {
        self.profiles.values()
    }
}

/// Holds the current [`ProfileSet`] for concurrent readers.
#[derive(Debug, Default)]
pub struct ProfileStore {
    current: RwLock<Arc<ProfileSet>>,
}

impl ProfileStore {
    /// Creates a store publishing `set`.
    pub fn new(set: ProfileSet) -> Self {
        Self {
            current: RwLock::new(Arc::new(set)),
        }
    }

    /// Returns the currently published set.
    pub fn snapshot(&self) -> Arc<ProfileSet> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the published set wholesale, returning the previous one.
    pub fn publish(&self, set: ProfileSet) -> Arc<ProfileSet> {
        let next = Arc::new(set);
        tracing::info!(profiles = next.len(), "published growth profile set");
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *current, next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::GrowthCategory;

    #[test]
    fn test_lookup_normalises_name() {
        let mut set = ProfileSet::new();
        set.insert(GrowthProfile::make_default("RED_MUSHROOM", GrowthCategory::Plant));
        assert!(set.get("red mushroom").is_some());
        assert!(set.get("Red_Mushroom").is_some());
        assert!(set.get("brown mushroom").is_none());
    }

    #[test]
    fn test_insert_replaces() {
        let mut set = ProfileSet::new();
        assert!(set.insert(GrowthProfile::make_default("wheat", GrowthCategory::Plant)).is_none());
        let old = set.insert(GrowthProfile::make_default("wheat", GrowthCategory::Column));
        assert_eq!(old.unwrap().category(), GrowthCategory::Plant);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_publish_keeps_old_snapshot_alive() {
        let mut first = ProfileSet::new();
        first.insert(GrowthProfile::make_default("wheat", GrowthCategory::Plant));
        let store = ProfileStore::new(first);

        let held = store.snapshot();
        let mut second = ProfileSet::new();
        second.insert(GrowthProfile::make_default("cactus", GrowthCategory::Column));
        let previous = store.publish(second);

        assert!(Arc::ptr_eq(&held, &previous));
        assert!(held.get("wheat").is_some());
        assert!(store.snapshot().get("wheat").is_none());
        assert!(store.snapshot().get("cactus").is_some());
    }

    #[test]
    fn test_snapshot_across_threads() {
        let mut set = ProfileSet::new();
        set.insert(GrowthProfile::make_default("wheat", GrowthCategory::Plant));
        let store = Arc::new(ProfileStore::new(set));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.snapshot().len())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 1);
        }
    }
}

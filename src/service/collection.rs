//! Profile collection with a selected entry and scoped change observers.
//!
//! This is the owner that sits on top of the codec: it keeps the profile list,
//! guarantees at least one profile exists, and de-duplicates names after an
//! import (the codec itself does not know about other profiles).
//!
//! Observers are registered on a collection instance and only see events of
//! that instance.

use tracing::{debug, info};

use crate::config::MAX_NAME_CHARS;
use crate::core::profile::{presets, Profile};
use crate::error::Result;
use crate::protocol::share::ShareCodec;

/// Something that changed in a [`ProfileCollection`].
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionEvent {
    /// A profile was appended at `index`
    Added { index: usize, name: String },
    /// The profile at `index` was removed
    Removed { index: usize, name: String },
    /// The selected index changed
    Selected { index: usize },
    /// The profile at `index` was modified in place
    Updated { index: usize },
    /// All profiles were replaced by the preset pack
    Reset,
}

/// Handle returned by [`ProfileCollection::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&CollectionEvent) + Send>;

/// Ordered list of profiles with a current selection.
pub struct ProfileCollection {
    profiles: Vec<Profile>,
    selected: usize,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl std::fmt::Debug for ProfileCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileCollection")
            .field("profiles", &self.profiles)
            .field("selected", &self.selected)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for ProfileCollection {
    fn default() -> Self {
        Self::with_presets()
    }
}

impl ProfileCollection {
    /// A collection holding the built-in presets.
    pub fn with_presets() -> Self {
        Self::from_profiles(presets())
    }

    /// A collection holding `profiles`; falls back to the presets when empty.
    pub fn from_profiles(profiles: Vec<Profile>) -> Self {
        let profiles = if profiles.is_empty() { presets() } else { profiles };
        Self {
            profiles,
            selected: 0,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Always false: a collection keeps at least one profile.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> &Profile {
        &self.profiles[self.selected]
    }

    /// Mutate the selected profile in place and notify observers.
    pub fn update_selected<F>(&mut self, mutator: F)
    where
        F: FnOnce(&mut Profile),
    {
        mutator(&mut self.profiles[self.selected]);
        let index = self.selected;
        self.notify(&CollectionEvent::Updated { index });
    }

    /// Select the profile at `index`; out-of-range indices are clamped.
    pub fn select(&mut self, index: usize) {
        let index = index.min(self.profiles.len() - 1);
        if index != self.selected {
            self.selected = index;
            self.notify(&CollectionEvent::Selected { index });
        }
    }

    /// Select the next profile, wrapping around.
    pub fn select_next(&mut self) {
        let next = (self.selected + 1) % self.profiles.len();
        self.select(next);
    }

    /// Append a profile under a unique name, select it and return its index.
    pub fn add(&mut self, mut profile: Profile) -> usize {
        profile.name = self.unique_name(&profile.name);
        let name = profile.name.clone();
        self.profiles.push(profile);
        let index = self.profiles.len() - 1;
        self.notify(&CollectionEvent::Added { index, name });
        self.select(index);
        index
    }

    /// Append a copy of the selected profile named `"<name> Copy"`.
    pub fn duplicate_selected(&mut self) -> usize {
        let mut copy = self.selected().clone();
        copy.name = format!("{} Copy", copy.name);
        self.add(copy)
    }

    /// Remove the selected profile. Returns `None` when it is the last one.
    pub fn remove_selected(&mut self) -> Option<Profile> {
        if self.profiles.len() <= 1 {
            debug!("Refusing to remove the last profile");
            return None;
        }

        let index = self.selected;
        let removed = self.profiles.remove(index);
        self.notify(&CollectionEvent::Removed {
            index,
            name: removed.name.clone(),
        });

        self.selected = index.min(self.profiles.len() - 1);
        let selected = self.selected;
        self.notify(&CollectionEvent::Selected { index: selected });
        Some(removed)
    }

    /// Replace every profile with the preset pack and select the first.
    pub fn reset_presets(&mut self) {
        self.profiles = presets();
        self.selected = 0;
        self.notify(&CollectionEvent::Reset);
    }

    /// Share token of the selected profile.
    pub fn export_selected(&self, codec: &ShareCodec) -> String {
        codec.export(self.selected())
    }

    /// Import a token, de-duplicate its name, append and select it.
    ///
    /// # Errors
    /// Propagates every import error; the collection is left untouched.
    pub fn import_token(&mut self, codec: &ShareCodec, token: &str) -> Result<usize> {
        let profile = codec.import(token)?;
        let index = self.add(profile);
        info!(index, "Imported profile from share code");
        Ok(index)
    }

    /// `seed` if no profile uses it (case-insensitively), else `"seed 2"`,
    /// `"seed 3"`, ... The result never exceeds the name length limit.
    pub fn unique_name(&self, seed: &str) -> String {
        let taken = |candidate: &str| {
            self.profiles
                .iter()
                .any(|p| p.name.to_lowercase() == candidate.to_lowercase())
        };

        let seed = truncate_chars(seed, MAX_NAME_CHARS);
        if !taken(&seed) {
            return seed;
        }

        let mut n: u64 = 2;
        loop {
            let suffix = format!(" {n}");
            let stem = truncate_chars(&seed, MAX_NAME_CHARS - suffix.chars().count());
            let candidate = format!("{}{suffix}", stem.trim_end());
            if !taken(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    /// Register an observer for this collection's events.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&CollectionEvent) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    fn notify(&mut self, event: &CollectionEvent) {
        for (_, observer) in self.observers.iter_mut() {
            observer(event);
        }
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

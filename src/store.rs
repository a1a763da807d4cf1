use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::profile::{ImageRef, UserProfile};

/// The only ways [`UserProfile`] can change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileAction {
    SetInfo { name: String, surname: String },
    SetImage(ImageRef),
}

/// Applies `action` to `profile`.
pub fn reduce(profile: &mut UserProfile, action: ProfileAction) {
    match action {
        ProfileAction::SetInfo { name, surname } => {
            profile.name = name;
            profile.surname = surname;
        }
        ProfileAction::SetImage(image) => profile.image = Some(image),
    }
}

/// Read accessor and dispatch function, the part of the store
/// that screens get to see.
pub trait ProfileStore {
    fn profile(&self) -> UserProfile;
    fn dispatch(&self, action: ProfileAction);
}

/// Application-wide profile store. Clones share the same state.
#[derive(Clone, Debug)]
pub struct Store(Arc<watch::Sender<UserProfile>>);

impl Store {
    pub fn new(initial: UserProfile) -> Store {
        let (tx, _) = watch::channel(initial);
        Store(Arc::new(tx))
    }

    /// Receiver that is notified after every dispatch.
    pub fn subscribe(&self) -> watch::Receiver<UserProfile> {
        self.0.subscribe()
    }
}

impl Default for Store {
    fn default() -> Self {
        Store::new(UserProfile::default())
    }
}

impl ProfileStore for Store {
    fn profile(&self) -> UserProfile {
        self.0.borrow().clone()
    }

    fn dispatch(&self, action: ProfileAction) {
        debug!("Dispatching {:?}", action);
        self.0.send_modify(|profile| reduce(profile, action));
    }
}

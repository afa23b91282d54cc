//! In-memory registry of live view components, keyed by message.
//!
//! Interactions on a message are routed to its registered component. Each component sits
//! behind its own async mutex so concurrent interactions on the same dropdown are applied
//! one after another, while different dropdowns proceed independently.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::{Mutex, RwLock};

use crate::service::selection::RoleSelection;

pub type SharedSelection = Arc<Mutex<RoleSelection>>;

struct RegisteredView {
    guild_id: u64,
    channel_id: u64,
    selection: SharedSelection,
}

#[derive(Default)]
pub struct ViewRegistry {
    views: RwLock<HashMap<u64, RegisteredView>>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a component for its message, replacing any previous one.
    pub async fn register(&self, channel_id: u64, selection: RoleSelection) -> SharedSelection {
        let message_id = selection.message_id();
        let guild_id = selection.guild_id();
        let shared = Arc::new(Mutex::new(selection));

        self.views.write().await.insert(
            message_id,
            RegisteredView {
                guild_id,
                channel_id,
                selection: shared.clone(),
            },
        );

        shared
    }

    pub async fn get(&self, message_id: u64) -> Option<SharedSelection> {
        self.views
            .read()
            .await
            .get(&message_id)
            .map(|view| view.selection.clone())
    }

    /// Returns the message's component, registering the one built by `create` if none is.
    pub async fn get_or_register(
        &self,
        channel_id: u64,
        message_id: u64,
        create: impl FnOnce() -> RoleSelection,
    ) -> SharedSelection {
        if let Some(existing) = self.get(message_id).await {
            return existing;
        }

        let mut views = self.views.write().await;
        let view = views.entry(message_id).or_insert_with(|| {
            let selection = create();
            RegisteredView {
                guild_id: selection.guild_id(),
                channel_id,
                selection: Arc::new(Mutex::new(selection)),
            }
        });

        view.selection.clone()
    }

    /// Removes the message's component.
    ///
    /// # Returns
    /// - `true` if a component was registered for the message
    pub async fn unbind(&self, message_id: u64) -> bool {
        self.views.write().await.remove(&message_id).is_some()
    }

    /// Removes every component of a guild and returns how many were removed.
    pub async fn unbind_guild(&self, guild_id: u64) -> usize {
        self.unbind_where(|view| view.guild_id == guild_id).await
    }

    /// Removes every component posted in a channel and returns how many were removed.
    pub async fn unbind_channel(&self, channel_id: u64) -> usize {
        self.unbind_where(|view| view.channel_id == channel_id).await
    }

    async fn unbind_where(&self, matches: impl Fn(&RegisteredView) -> bool) -> usize {
        let mut views = self.views.write().await;
        let before = views.len();
        views.retain(|_, view| !matches(view));
        before - views.len()
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.views.read().await.len()
    }

    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.views.read().await.is_empty()
    }
}

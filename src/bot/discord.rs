//! Serenity implementation of the view collaborators.
//!
//! Guild, channel and role lookups read the gateway cache first and fall back to the
//! HTTP API when the cache has no entry. Message and member calls always go over HTTP.

use serenity::{
    all::{ChannelId, Context, CreateMessage, EditMessage, GuildId, MessageId, RoleId, UserId},
    async_trait,
    cache::Cache,
    http::Http,
};
use std::sync::Arc;

use crate::{
    bot::render,
    error::transport::TransportError,
    model::{role::GuildRole, selection::ViewMenu, view::ViewEmbed},
    service::transport::{Collaborators, GuildDirectory, MemberRoles, MessageTransport},
};

const ADD_ROLE_REASON: &str = "Role view selection - adding role";
const REMOVE_ROLE_REASON: &str = "Role view selection - removing role";

pub struct SerenityDiscord {
    http: Arc<Http>,
    cache: Arc<Cache>,
}

impl SerenityDiscord {
    pub fn new(http: Arc<Http>, cache: Arc<Cache>) -> Self {
        Self { http, cache }
    }

    /// Builds the collaborators for the services from an event context.
    pub fn collaborators(ctx: &Context) -> Collaborators {
        let discord = Arc::new(Self::new(ctx.http.clone(), ctx.cache.clone()));

        Collaborators {
            messages: discord.clone(),
            guilds: discord.clone(),
            members: discord,
        }
    }

    /// Reads the guild's roles from the cache, `None` when the guild is not cached.
    fn cached_roles(&self, guild_id: GuildId) -> Option<Vec<GuildRole>> {
        self.cache
            .guild(guild_id)
            .map(|guild| GuildRole::from_roles(guild.roles.values()))
    }

    /// Whether the cache knows the channel as one of the guild's channels or threads.
    fn cached_channel(&self, guild_id: GuildId, channel_id: ChannelId) -> Option<bool> {
        self.cache.guild(guild_id).map(|guild| {
            guild.channels.contains_key(&channel_id)
                || guild.threads.iter().any(|thread| thread.id == channel_id)
        })
    }
}

#[async_trait]
impl MessageTransport for SerenityDiscord {
    async fn send_embed(&self, channel_id: u64, embed: &ViewEmbed) -> Result<u64, TransportError> {
        let message = CreateMessage::new().embed(render::view_embed(embed));

        let sent = ChannelId::new(channel_id)
            .send_message(&self.http, message)
            .await?;

        Ok(sent.id.get())
    }

    async fn fetch_message(&self, channel_id: u64, message_id: u64) -> Result<(), TransportError> {
        self.http
            .get_message(ChannelId::new(channel_id), MessageId::new(message_id))
            .await?;

        Ok(())
    }

    async fn attach_menu(
        &self,
        channel_id: u64,
        message_id: u64,
        menu: &ViewMenu,
    ) -> Result<(), TransportError> {
        let edit_message = EditMessage::new().components(vec![render::select_menu_row(menu)]);

        self.http
            .edit_message(
                ChannelId::new(channel_id),
                MessageId::new(message_id),
                &edit_message,
                vec![],
            )
            .await?;

        Ok(())
    }

    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<(), TransportError> {
        self.http
            .delete_message(ChannelId::new(channel_id), MessageId::new(message_id), None)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl GuildDirectory for SerenityDiscord {
    async fn guild_exists(&self, guild_id: u64) -> Result<bool, TransportError> {
        let guild_id = GuildId::new(guild_id);

        if self.cache.guild(guild_id).is_some() {
            return Ok(true);
        }

        match self.http.get_guild(guild_id).await.map_err(TransportError::from) {
            Ok(_) => Ok(true),
            // Discord answers 403 for guilds the bot is no longer a member of.
            Err(TransportError::NotFound | TransportError::Forbidden) => Ok(false),
            Err(err) => Err(err),
        }
    }

    async fn channel_exists(&self, guild_id: u64, channel_id: u64) -> Result<bool, TransportError> {
        let guild_id = GuildId::new(guild_id);
        let channel_id = ChannelId::new(channel_id);

        if let Some(true) = self.cached_channel(guild_id, channel_id) {
            return Ok(true);
        }

        match self.http.get_channel(channel_id).await.map_err(TransportError::from) {
            Ok(channel) => Ok(channel
                .guild()
                .is_some_and(|channel| channel.guild_id == guild_id)),
            Err(TransportError::NotFound) => Ok(false),
            Err(err) => Err(err),
        }
    }

    async fn list_roles(&self, guild_id: u64) -> Result<Vec<GuildRole>, TransportError> {
        let guild_id = GuildId::new(guild_id);

        if let Some(roles) = self.cached_roles(guild_id) {
            return Ok(roles);
        }

        let roles = self.http.get_guild_roles(guild_id).await?;

        Ok(GuildRole::from_roles(roles.iter()))
    }
}

#[async_trait]
impl MemberRoles for SerenityDiscord {
    async fn add_roles(
        &self,
        guild_id: u64,
        member_id: u64,
        role_ids: &[u64],
    ) -> Result<(), TransportError> {
        for role_id in role_ids {
            self.http
                .add_member_role(
                    GuildId::new(guild_id),
                    UserId::new(member_id),
                    RoleId::new(*role_id),
                    Some(ADD_ROLE_REASON),
                )
                .await?;
        }

        Ok(())
    }

    async fn remove_roles(
        &self,
        guild_id: u64,
        member_id: u64,
        role_ids: &[u64],
    ) -> Result<(), TransportError> {
        for role_id in role_ids {
            self.http
                .remove_member_role(
                    GuildId::new(guild_id),
                    UserId::new(member_id),
                    RoleId::new(*role_id),
                    Some(REMOVE_ROLE_REASON),
                )
                .await?;
        }

        Ok(())
    }
}

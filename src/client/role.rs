use dioxus_logger::tracing;
use serenity::all::{GuildId, Role, RoleId};

use crate::{
    client::Client,
    error::{not_found::NotFoundError, AppError},
    session::Session,
};

impl<S: Session> Client<S> {
    /// Returns a role based on the specific guild and role IDs.
    ///
    /// Tries the local cache first. On a miss there is no single-role endpoint
    /// to call, so the guild's full role list is fetched and searched.
    ///
    /// # Returns
    /// - `Ok(Role)` - Role from the cache or from the fetched role list
    /// - `Err(AppError::NotFoundErr)` - The fetched role list has no role with this ID
    /// - `Err(AppError)` - Fetching the role list failed
    pub async fn role(&self, guild_id: GuildId, role_id: RoleId) -> Result<Role, AppError> {
        if let Some(role) = self.session.cached_role(guild_id, role_id) {
            return Ok(role);
        }

        tracing::debug!(
            "Role {} of guild {} not cached, fetching guild roles from API",
            role_id,
            guild_id
        );

        self.session
            .fetch_roles(guild_id)
            .await?
            .into_iter()
            .find(|role| role.id == role_id)
            .ok_or_else(|| NotFoundError::Role { guild_id, role_id }.into())
    }
}

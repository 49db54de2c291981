//! Role-based permission checks.

use serenity::all::{GuildId, Permissions, UserId};

use crate::{client::Client, error::AppError, session::Session};

impl<S: Session> Client<S> {
    /// Returns whether the user holds every permission in `required`.
    ///
    /// Returns `true` iff any of:
    /// - `guild_id` is `None` (a direct message)
    /// - any of the user's roles has the administrator permission
    /// - all the user's roles combined have every permission in `required`
    /// - the user is the owner of the guild
    ///
    /// Channel permission overwrites are not considered.
    ///
    /// # Arguments
    /// - `guild_id` - Guild to check in, `None` for a DM context
    /// - `user_id` - User whose roles are checked
    /// - `required` - Permissions the user must have
    ///
    /// # Returns
    /// - `Ok(bool)` - Whether the user is allowed
    /// - `Err(AppError)` - Member, role or guild lookup failed
    pub async fn member_allowed(
        &self,
        guild_id: Option<GuildId>,
        user_id: UserId,
        required: Permissions,
    ) -> Result<bool, AppError> {
        let Some(guild_id) = guild_id else {
            return Ok(true);
        };

        let member = self.member(guild_id, user_id).await?;

        // Checks each role on its own before combining, since members often
        // hold many roles and one of them usually suffices.
        let mut combined = Permissions::empty();
        for role_id in &member.roles {
            let role = self.role(guild_id, *role_id).await?;

            if role.permissions.contains(Permissions::ADMINISTRATOR) {
                return Ok(true);
            }
            if role.permissions.contains(required) {
                return Ok(true);
            }
            combined |= role.permissions;
        }

        if combined.contains(required) {
            return Ok(true);
        }

        let guild = self.guild(guild_id).await?;
        Ok(guild.owner_id() == user_id)
    }
}

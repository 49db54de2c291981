use dioxus_logger::tracing;
use serenity::all::{Channel, ChannelId};

use crate::{client::Client, error::AppError, session::Session};

impl<S: Session> Client<S> {
    /// Returns a channel based on the specific channel ID.
    ///
    /// Tries the local cache first, if that misses, makes an API call.
    pub async fn channel(&self, channel_id: ChannelId) -> Result<Channel, AppError> {
        if let Some(channel) = self.session.cached_channel(channel_id) {
            return Ok(channel);
        }

        tracing::debug!("Channel {} not cached, fetching from API", channel_id);

        self.session.fetch_channel(channel_id).await
    }
}

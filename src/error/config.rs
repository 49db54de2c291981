use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The bot requires this environment variable to be defined. Check the
    /// crate documentation for the list of required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// A voice join was requested but no Songbird manager is registered.
    ///
    /// The serenity client has to be built with `register_songbird()` before
    /// sessions created from its context can join voice channels.
    #[error("Voice manager is not registered with the Discord client")]
    VoiceNotRegistered,
}

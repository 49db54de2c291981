use super::*;

/// Tests that a cached role is returned without fetching the role list.
///
/// Expected: Ok(role) from the cache, zero API calls
#[tokio::test]
async fn returns_cached_role() {
    let session = TestSession::new().cache_role(
        GUILD_ID,
        create_test_role(10, "Moderator", Permissions::KICK_MEMBERS),
    );
    let client = Client::new(session);

    let role = client
        .role(GuildId::new(GUILD_ID), RoleId::new(10))
        .await
        .unwrap();

    assert_eq!(role.name, "Moderator");
    assert_eq!(role.permissions, Permissions::KICK_MEMBERS);
    assert_eq!(client.session().api_calls(), 0);
}

/// Tests finding an uncached role in the guild's fetched role list.
///
/// Expected: Ok(role) matching the requested ID, one API call
#[tokio::test]
async fn finds_uncached_role_in_fetched_list() {
    let session = TestSession::new().remote_roles(
        GUILD_ID,
        vec![
            create_test_role(10, "Moderator", Permissions::KICK_MEMBERS),
            create_test_role(11, "Voice", Permissions::CONNECT),
        ],
    );
    let client = Client::new(session);

    let role = client
        .role(GuildId::new(GUILD_ID), RoleId::new(11))
        .await
        .unwrap();

    assert_eq!(role.id, RoleId::new(11));
    assert_eq!(role.name, "Voice");
    assert_eq!(client.session().api_calls(), 1);
}

/// Tests the not-found error when the fetched role list lacks the role.
///
/// Expected: Err(NotFoundError::Role)
#[tokio::test]
async fn returns_not_found_for_missing_role() {
    let session = TestSession::new().remote_roles(
        GUILD_ID,
        vec![create_test_role(10, "Moderator", Permissions::KICK_MEMBERS)],
    );
    let client = Client::new(session);

    let result = client.role(GuildId::new(GUILD_ID), RoleId::new(99)).await;

    assert!(matches!(
        result,
        Err(AppError::NotFoundErr(NotFoundError::Role { guild_id, role_id }))
            if guild_id == GuildId::new(GUILD_ID) && role_id == RoleId::new(99)
    ));
}

/// Tests that a failed role list fetch is returned unchanged.
///
/// Expected: Err(AppError::DiscordErr)
#[tokio::test]
async fn propagates_api_error() {
    let client = Client::new(TestSession::new());

    let result = client.role(GuildId::new(GUILD_ID), RoleId::new(10)).await;

    assert!(is_api_error(&result.unwrap_err()));
}

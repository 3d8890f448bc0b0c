//! Role store behavior: seeding, core-role protection, validation, ordering.

mod common;

use cms_access::Capability;
use cms_access::db::models::{RoleCreate, RoleUpdate};
use cms_access::db::repository::{RepoError, role};
use common::test_pool;

fn new_role(name: &str, display_name: &str, caps: &[&str]) -> RoleCreate {
    RoleCreate {
        name: name.to_string(),
        display_name: display_name.to_string(),
        description: String::new(),
        capabilities: caps.iter().map(|s| s.to_string()).collect(),
        member_dashboard_access: true,
    }
}

#[tokio::test]
async fn seeding_is_idempotent() {
    let pool = test_pool().await;

    role::seed_defaults(&pool).await.unwrap();
    role::seed_defaults(&pool).await.unwrap();

    let roles = role::find_all(&pool).await.unwrap();
    assert_eq!(roles.len(), 6);

    let names: Vec<&str> = roles.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        ["admin", "editor", "member", "moderator", "contributor", "viewer"]
    );
}

#[tokio::test]
async fn seeding_never_overwrites_customizations() {
    let pool = test_pool().await;
    role::seed_defaults(&pool).await.unwrap();

    let editor = role::find_by_name(&pool, "editor").await.unwrap().unwrap();
    role::update(
        &pool,
        editor.id,
        RoleUpdate {
            display_name: "Chief Editor".into(),
            description: editor.description.clone(),
            capabilities: vec!["manage_posts".into()],
            member_dashboard_access: true,
        },
    )
    .await
    .unwrap();

    role::seed_defaults(&pool).await.unwrap();

    let editor = role::find_by_name(&pool, "editor").await.unwrap().unwrap();
    assert_eq!(editor.display_name, "Chief Editor");
    assert_eq!(editor.capabilities, vec![Capability::ManagePosts]);

    let roles = role::find_all(&pool).await.unwrap();
    assert_eq!(roles.len(), 6);
}

#[tokio::test]
async fn seeded_defaults_match_catalog() {
    let pool = test_pool().await;
    role::seed_defaults(&pool).await.unwrap();

    let admin = role::find_by_name(&pool, "admin").await.unwrap().unwrap();
    assert_eq!(admin.capabilities, Capability::ALL.to_vec());
    assert!(admin.member_dashboard_access);

    let viewer = role::find_by_name(&pool, "viewer").await.unwrap().unwrap();
    assert!(viewer.capabilities.is_empty());
    assert!(!viewer.member_dashboard_access);
}

#[tokio::test]
async fn create_validates_name_and_display_name() {
    let pool = test_pool().await;

    let err = role::create(&pool, new_role("", "Empty", &[]))
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    let err = role::create(&pool, new_role("support", "", &[]))
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    let err = role::create(&pool, new_role("Support Team!", "Support", &[]))
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}

#[tokio::test]
async fn core_names_are_reserved_not_conflicting() {
    let pool = test_pool().await;
    role::seed_defaults(&pool).await.unwrap();

    for name in ["admin", "editor", "member"] {
        let err = role::create(&pool, new_role(name, "Imposter", &[]))
            .await
            .unwrap_err();
        assert!(
            matches!(err, RepoError::Protected(_)),
            "{name} should be Protected, got {err:?}"
        );
    }
}

#[tokio::test]
async fn duplicate_name_is_conflict() {
    let pool = test_pool().await;

    role::create(&pool, new_role("support", "Support", &[]))
        .await
        .unwrap();
    let err = role::create(&pool, new_role("support", "Support 2", &[]))
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Conflict(_)));
}

#[tokio::test]
async fn create_sanitizes_capabilities_and_appends_sort_order() {
    let pool = test_pool().await;
    role::seed_defaults(&pool).await.unwrap();

    let r = role::create(
        &pool,
        new_role("support", "Support", &["manage_posts", "not_a_real_cap"]),
    )
    .await
    .unwrap();

    assert_eq!(r.capabilities, vec![Capability::ManagePosts]);
    assert!(r.member_dashboard_access, "new known roles default open");
    assert_eq!(r.sort_order, 7, "appended after the six seeded roles");
}

#[tokio::test]
async fn update_rejects_missing_role_and_empty_display_name() {
    let pool = test_pool().await;

    let payload = RoleUpdate {
        display_name: "X".into(),
        description: String::new(),
        capabilities: vec![],
        member_dashboard_access: true,
    };
    let err = role::update(&pool, 9999, payload.clone()).await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));

    let r = role::create(&pool, new_role("support", "Support", &[]))
        .await
        .unwrap();
    let err = role::update(
        &pool,
        r.id,
        RoleUpdate {
            display_name: "  ".into(),
            ..payload
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}

#[tokio::test]
async fn update_keeps_name_and_sanitizes_capabilities() {
    let pool = test_pool().await;

    let r = role::create(&pool, new_role("support", "Support", &[]))
        .await
        .unwrap();
    let updated = role::update(
        &pool,
        r.id,
        RoleUpdate {
            display_name: "Support Desk".into(),
            description: "Handles tickets".into(),
            capabilities: vec!["view_analytics".into(), "bogus".into()],
            member_dashboard_access: false,
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.name, "support");
    assert_eq!(updated.display_name, "Support Desk");
    assert_eq!(updated.capabilities, vec![Capability::ViewAnalytics]);
    assert!(!updated.member_dashboard_access);
}

#[tokio::test]
async fn delete_protects_core_roles() {
    let pool = test_pool().await;
    role::seed_defaults(&pool).await.unwrap();

    for name in ["admin", "editor", "member"] {
        let r = role::find_by_name(&pool, name).await.unwrap().unwrap();
        let err = role::delete(&pool, r.id).await.unwrap_err();
        assert!(matches!(err, RepoError::Protected(_)));
    }

    // Non-core seeded roles are deletable
    let viewer = role::find_by_name(&pool, "viewer").await.unwrap().unwrap();
    role::delete(&pool, viewer.id).await.unwrap();
    assert!(role::find_by_name(&pool, "viewer").await.unwrap().is_none());

    let err = role::delete(&pool, 9999).await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[tokio::test]
async fn invalid_stored_capability_never_surfaces() {
    let pool = test_pool().await;

    // Simulate a legacy row written before the catalog was closed
    sqlx::query(
        "INSERT INTO roles (name, display_name, capabilities, created_at, updated_at) \
         VALUES ('legacy', 'Legacy', '[\"manage_posts\",\"manage_everything\"]', 0, 0)",
    )
    .execute(&pool)
    .await
    .unwrap();

    let r = role::find_by_name(&pool, "legacy").await.unwrap().unwrap();
    assert_eq!(r.capabilities, vec![Capability::ManagePosts]);
}

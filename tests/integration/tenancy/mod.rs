//! Tenant isolation tests
//!
//! Templates of other teams behave exactly like missing templates.

use axum::http::StatusCode;
use sendportal_auth::AuthRole;
use sendportal_templates::api::routes::{edit_path, index_path, member_path};

use crate::common::{fake_name, TestApp};

#[tokio::test]
async fn test_index_only_lists_current_team_templates() {
    let app = TestApp::new();
    let alice = app.create_user_with_team().await;
    let bob = app.create_user_with_team().await;
    let mine = app.create_template(alice.team_id).await;
    let theirs = app.create_template(bob.team_id).await;

    let response = app.get(&index_path(), Some(&app.login(&alice))).await;

    response.assert_ok();
    response.assert_see(&mine.name);
    response.assert_dont_see(&theirs.name);
}

#[tokio::test]
async fn test_cannot_edit_another_teams_template() {
    let app = TestApp::new();
    let alice = app.create_user_with_team().await;
    let bob = app.create_user_with_team().await;
    let theirs = app.create_template(bob.team_id).await;

    let response = app.get(&edit_path(theirs.id), Some(&app.login(&alice))).await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_dont_see(&theirs.content);
}

#[tokio::test]
async fn test_cannot_update_another_teams_template() {
    let app = TestApp::new();
    let alice = app.create_user_with_team().await;
    let bob = app.create_user_with_team().await;
    let theirs = app.create_template(bob.team_id).await;

    let response = app
        .put_form(
            &member_path(theirs.id),
            &[("name", "Hijacked"), ("content", "Hijacked")],
            Some(&app.login(&alice)),
        )
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(app.templates.get(theirs.id).await, Some(theirs));
}

#[tokio::test]
async fn test_cannot_delete_another_teams_template() {
    let app = TestApp::new();
    let alice = app.create_user_with_team().await;
    let bob = app.create_user_with_team().await;
    let theirs = app.create_template(bob.team_id).await;

    let response = app.delete(&member_path(theirs.id), Some(&app.login(&alice))).await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert!(app.templates.get(theirs.id).await.is_some());
}

#[tokio::test]
async fn test_names_may_repeat_across_teams() {
    let app = TestApp::new();
    let alice = app.create_user_with_team().await;
    let bob = app.create_user_with_team().await;
    let theirs = app.create_template(bob.team_id).await;

    let response = app
        .post_form(
            &index_path(),
            &[("name", &theirs.name), ("content", "Mine")],
            Some(&app.login(&alice)),
        )
        .await;

    response.assert_redirect(&index_path());
    assert_eq!(app.templates.count().await, 2);
}

#[tokio::test]
async fn test_switching_team_changes_visible_templates() {
    let app = TestApp::new();
    let user = app.create_user_with_team().await;
    let first = app.create_template(user.team_id).await;
    let other_team = app
        .identities
        .create_team(user.identity.id, "Zeta", AuthRole::Member)
        .await;
    let second = app.create_template(other_team).await;
    let cookie = app.login(&user);

    let response = app.get(&index_path(), Some(&cookie)).await;
    response.assert_see(&second.name);
    response.assert_dont_see(&first.name);

    app.identities.switch_team(user.identity.id, user.team_id).await;

    let response = app.get(&index_path(), Some(&cookie)).await;
    response.assert_see(&first.name);
    response.assert_dont_see(&second.name);
}

#[tokio::test]
async fn test_user_without_team_is_forbidden() {
    let app = TestApp::new();
    let loner = app.identities.create_user("loner@sendportal.test").await;
    let user = crate::common::TestUser {
        identity: loner,
        team_id: uuid::Uuid::nil(),
    };

    let response = app
        .post_form(
            &index_path(),
            &[("name", &fake_name()), ("content", "x")],
            Some(&app.login(&user)),
        )
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(app.templates.count().await, 0);
}

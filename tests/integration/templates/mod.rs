//! Templates resource integration tests
//!
//! - GET /templates - List
//! - GET /templates/create - Create form
//! - POST /templates - Store
//! - GET /templates/{id}/edit - Edit form
//! - PUT /templates/{id} - Update
//! - DELETE /templates/{id} - Destroy

use axum::http::StatusCode;
use sendportal_templates::api::routes::{create_path, edit_path, index_path, member_path};

use crate::common::{fake_name, fake_sentence, TestApp};

mod test_index {
    use super::*;

    #[tokio::test]
    async fn test_guest_cannot_see_the_index() {
        let app = TestApp::new();

        let response = app.get(&index_path(), None).await;

        response.assert_redirect("/login");
    }

    #[tokio::test]
    async fn test_logged_in_user_can_see_the_index() {
        let app = TestApp::new();
        let user = app.create_user_with_team().await;
        let cookie = app.login(&user);

        let response = app.get(&index_path(), Some(&cookie)).await;

        response.assert_ok();
        response.assert_see("You have not created any templates");
    }

    #[tokio::test]
    async fn test_index_lists_existing_templates() {
        let app = TestApp::new();
        let user = app.create_user_with_team().await;
        let cookie = app.login(&user);
        let template = app.create_template(user.team_id).await;

        let response = app.get(&index_path(), Some(&cookie)).await;

        response.assert_ok();
        response.assert_see(&template.name);
        response.assert_see(&edit_path(template.id));
    }

    #[tokio::test]
    async fn test_index_is_paginated() {
        let app = TestApp::new();
        let user = app.create_user_with_team().await;
        let cookie = app.login(&user);
        for _ in 0..26 {
            app.create_template(user.team_id).await;
        }

        let first = app.get("/templates", Some(&cookie)).await;
        first.assert_ok();
        first.assert_see("Page 1 of 2");
        first.assert_see("href=\"/templates?page=2\"");

        let second = app.get("/templates?page=2", Some(&cookie)).await;
        second.assert_ok();
        second.assert_see("Page 2 of 2");
        second.assert_see("href=\"/templates?page=1\"");
        assert_eq!(second.body.matches("data-template-id=").count(), 1);
    }

    #[tokio::test]
    async fn test_page_past_the_end_links_back() {
        let app = TestApp::new();
        let user = app.create_user_with_team().await;
        let cookie = app.login(&user);
        app.create_template(user.team_id).await;

        let response = app.get("/templates?page=5", Some(&cookie)).await;

        response.assert_ok();
        response.assert_dont_see("You have not created any templates");
        response.assert_see("There are no templates on this page.");
        response.assert_see("href=\"/templates?page=1\"");
    }

    #[tokio::test]
    async fn test_non_numeric_page_shows_first_page() {
        let app = TestApp::new();
        let user = app.create_user_with_team().await;
        let cookie = app.login(&user);
        let template = app.create_template(user.team_id).await;

        let response = app.get("/templates?page=abc", Some(&cookie)).await;

        response.assert_ok();
        response.assert_see("Page 1 of 1");
        response.assert_see(&template.name);
    }

    #[tokio::test]
    async fn test_template_names_are_escaped() {
        let app = TestApp::new();
        let user = app.create_user_with_team().await;
        let cookie = app.login(&user);

        app.post_form(
            &index_path(),
            &[("name", "<script>alert(1)</script>"), ("content", "x")],
            Some(&cookie),
        )
        .await
        .assert_redirect("/templates");

        let response = app.get(&index_path(), Some(&cookie)).await;
        response.assert_dont_see("<script>alert(1)</script>");
        response.assert_see("&lt;script&gt;");
    }
}

mod test_create {
    use super::*;

    #[tokio::test]
    async fn test_guest_cannot_see_the_create_form() {
        let app = TestApp::new();

        let response = app.get(&create_path(), None).await;

        response.assert_redirect("/login");
    }

    #[tokio::test]
    async fn test_logged_in_user_can_see_the_create_form() {
        let app = TestApp::new();
        let user = app.create_user_with_team().await;
        let cookie = app.login(&user);

        let response = app.get(&create_path(), Some(&cookie)).await;

        response.assert_ok();
        response.assert_see("New Template");
        response.assert_see("Template Name");
        response.assert_see("Content");
    }
}

mod test_store {
    use super::*;

    #[tokio::test]
    async fn test_guest_cannot_store_a_new_template() {
        let app = TestApp::new();
        let (name, content) = (fake_name(), fake_sentence());

        let response = app
            .post_form(&index_path(), &[("name", &name), ("content", &content)], None)
            .await;

        response.assert_redirect("/login");
        assert_eq!(app.templates.count().await, 0);
    }

    #[tokio::test]
    async fn test_logged_in_user_can_store_a_new_template() {
        let app = TestApp::new();
        let user = app.create_user_with_team().await;
        let cookie = app.login(&user);
        let (name, content) = (fake_name(), fake_sentence());

        let response = app
            .post_form(
                &index_path(),
                &[("name", &name), ("content", &content)],
                Some(&cookie),
            )
            .await;

        response.assert_redirect(&index_path());

        let stored = app.templates.all().await;
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name, name);
        assert_eq!(stored[0].content, content);
        assert_eq!(stored[0].team_id, user.team_id);
    }

    #[tokio::test]
    async fn test_storing_requires_content() {
        let app = TestApp::new();
        let user = app.create_user_with_team().await;
        let cookie = app.login(&user);
        let name = fake_name();

        let response = app
            .post_form(&index_path(), &[("name", &name)], Some(&cookie))
            .await;

        response.assert_has_error("content");
        response.assert_see("The content field is required.");
        response.assert_see(&format!("value=\"{}\"", name));
        assert_eq!(app.templates.count().await, 0);
    }

    #[tokio::test]
    async fn test_storing_requires_name() {
        let app = TestApp::new();
        let user = app.create_user_with_team().await;
        let cookie = app.login(&user);

        let response = app
            .post_form(&index_path(), &[("content", &fake_sentence())], Some(&cookie))
            .await;

        response.assert_has_error("name");
        response.assert_see("The name field is required.");
        assert_eq!(app.templates.count().await, 0);
    }

    #[tokio::test]
    async fn test_blank_fields_are_treated_as_missing() {
        let app = TestApp::new();
        let user = app.create_user_with_team().await;
        let cookie = app.login(&user);

        let response = app
            .post_form(&index_path(), &[("name", "   "), ("content", "")], Some(&cookie))
            .await;

        response.assert_has_error("name");
        response.assert_has_error("content");
        assert_eq!(app.templates.count().await, 0);
    }

    #[tokio::test]
    async fn test_name_longer_than_255_characters_is_rejected() {
        let app = TestApp::new();
        let user = app.create_user_with_team().await;
        let cookie = app.login(&user);
        let name = "a".repeat(256);

        let response = app
            .post_form(&index_path(), &[("name", &name), ("content", "x")], Some(&cookie))
            .await;

        response.assert_has_error("name");
        response.assert_see("The name may not be greater than 255 characters.");
        assert_eq!(app.templates.count().await, 0);
    }

    #[tokio::test]
    async fn test_name_must_be_unique_within_team() {
        let app = TestApp::new();
        let user = app.create_user_with_team().await;
        let cookie = app.login(&user);
        let existing = app.create_template(user.team_id).await;

        let response = app
            .post_form(
                &index_path(),
                &[("name", &existing.name), ("content", "x")],
                Some(&cookie),
            )
            .await;

        response.assert_has_error("name");
        response.assert_see("The name has already been taken.");
        assert_eq!(app.templates.count().await, 1);
    }
}

mod test_edit {
    use super::*;

    #[tokio::test]
    async fn test_guest_cannot_see_the_edit_form() {
        let app = TestApp::new();
        let template = app.create_foreign_template().await;

        let response = app.get(&edit_path(template.id), None).await;

        response.assert_redirect("/login");
    }

    #[tokio::test]
    async fn test_logged_in_user_can_see_the_edit_form() {
        let app = TestApp::new();
        let user = app.create_user_with_team().await;
        let cookie = app.login(&user);
        let template = app.create_template(user.team_id).await;

        let response = app.get(&edit_path(template.id), Some(&cookie)).await;

        response.assert_ok();
        response.assert_see(&template.name);
        response.assert_see(&template.content);
        response.assert_see(&member_path(template.id));
    }

    #[tokio::test]
    async fn test_unknown_template_is_not_found() {
        let app = TestApp::new();
        let user = app.create_user_with_team().await;
        let cookie = app.login(&user);

        let response = app.get(&edit_path(uuid::Uuid::new_v4()), Some(&cookie)).await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}

mod test_update {
    use super::*;

    #[tokio::test]
    async fn test_guest_cannot_update_a_template() {
        let app = TestApp::new();
        let template = app.create_foreign_template().await;
        let (name, content) = (fake_name(), fake_sentence());

        let response = app
            .put_form(
                &member_path(template.id),
                &[("name", &name), ("content", &content)],
                None,
            )
            .await;

        response.assert_redirect("/login");
        assert_eq!(app.templates.get(template.id).await, Some(template));
    }

    #[tokio::test]
    async fn test_logged_in_user_can_update_a_template() {
        let app = TestApp::new();
        let user = app.create_user_with_team().await;
        let cookie = app.login(&user);
        let template = app.create_template(user.team_id).await;
        let (name, content) = (fake_name(), fake_sentence());

        let response = app
            .put_form(
                &member_path(template.id),
                &[("name", &name), ("content", &content)],
                Some(&cookie),
            )
            .await;

        response.assert_redirect(&index_path());

        let updated = app.templates.get(template.id).await.unwrap();
        assert_eq!(updated.id, template.id);
        assert_eq!(updated.team_id, user.team_id);
        assert_eq!(updated.name, name);
        assert_eq!(updated.content, content);
        assert_eq!(app.templates.count().await, 1);
    }

    #[tokio::test]
    async fn test_patch_is_accepted_for_update() {
        let app = TestApp::new();
        let user = app.create_user_with_team().await;
        let cookie = app.login(&user);
        let template = app.create_template(user.team_id).await;

        let response = app
            .post_form(
                &member_path(template.id),
                &[("_method", "PATCH"), ("name", "Patched"), ("content", "Body")],
                Some(&cookie),
            )
            .await;

        response.assert_redirect(&index_path());
        assert_eq!(app.templates.get(template.id).await.unwrap().name, "Patched");
    }

    #[tokio::test]
    async fn test_updating_requires_content() {
        let app = TestApp::new();
        let user = app.create_user_with_team().await;
        let cookie = app.login(&user);
        let template = app.create_template(user.team_id).await;

        let response = app
            .put_form(&member_path(template.id), &[("name", &fake_name())], Some(&cookie))
            .await;

        response.assert_has_error("content");
        assert_eq!(app.templates.get(template.id).await, Some(template));
    }

    #[tokio::test]
    async fn test_updating_requires_name() {
        let app = TestApp::new();
        let user = app.create_user_with_team().await;
        let cookie = app.login(&user);
        let template = app.create_template(user.team_id).await;

        let response = app
            .put_form(
                &member_path(template.id),
                &[("content", &fake_sentence())],
                Some(&cookie),
            )
            .await;

        response.assert_has_error("name");
        response.assert_see("name=\"_method\" value=\"PUT\"");
        assert_eq!(app.templates.get(template.id).await, Some(template));
    }

    #[tokio::test]
    async fn test_template_may_keep_its_own_name() {
        let app = TestApp::new();
        let user = app.create_user_with_team().await;
        let cookie = app.login(&user);
        let template = app.create_template(user.team_id).await;

        let response = app
            .put_form(
                &member_path(template.id),
                &[("name", &template.name), ("content", "New body")],
                Some(&cookie),
            )
            .await;

        response.assert_redirect(&index_path());
        assert_eq!(
            app.templates.get(template.id).await.unwrap().content,
            "New body"
        );
    }

    #[tokio::test]
    async fn test_cannot_rename_onto_another_template() {
        let app = TestApp::new();
        let user = app.create_user_with_team().await;
        let cookie = app.login(&user);
        let first = app.create_template(user.team_id).await;
        let second = app.create_template(user.team_id).await;

        let response = app
            .put_form(
                &member_path(second.id),
                &[("name", &first.name), ("content", "x")],
                Some(&cookie),
            )
            .await;

        response.assert_has_error("name");
        response.assert_see("The name has already been taken.");
        assert_eq!(app.templates.get(second.id).await, Some(second));
    }
}

mod test_destroy {
    use super::*;

    #[tokio::test]
    async fn test_guest_cannot_delete_a_template() {
        let app = TestApp::new();
        let template = app.create_foreign_template().await;

        let response = app.delete(&member_path(template.id), None).await;

        response.assert_redirect("/login");
        assert!(app.templates.get(template.id).await.is_some());
    }

    #[tokio::test]
    async fn test_logged_in_user_can_delete_a_template() {
        let app = TestApp::new();
        let user = app.create_user_with_team().await;
        let cookie = app.login(&user);
        let template = app.create_template(user.team_id).await;

        let response = app.delete(&member_path(template.id), Some(&cookie)).await;

        response.assert_redirect(&index_path());
        assert!(app.templates.get(template.id).await.is_none());
    }

    #[tokio::test]
    async fn test_deleting_twice_is_not_found() {
        let app = TestApp::new();
        let user = app.create_user_with_team().await;
        let cookie = app.login(&user);
        let template = app.create_template(user.team_id).await;

        app.delete(&member_path(template.id), Some(&cookie))
            .await
            .assert_redirect(&index_path());
        let response = app.delete(&member_path(template.id), Some(&cookie)).await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}

mod test_workflow {
    use super::*;

    #[tokio::test]
    async fn test_create_edit_and_delete_a_template() {
        let app = TestApp::new();
        let user = app.create_user_with_team().await;
        let cookie = app.login(&user);

        app.post_form(
            &index_path(),
            &[("name", "Welcome"), ("content", "Hi there")],
            Some(&cookie),
        )
        .await
        .assert_redirect(&index_path());

        let listing = app.get(&index_path(), Some(&cookie)).await;
        listing.assert_ok();
        listing.assert_see("Welcome");

        let template = app.templates.all().await.remove(0);
        assert_eq!(template.team_id, user.team_id);

        app.put_form(
            &member_path(template.id),
            &[("name", "Welcome2"), ("content", "Hi there 2")],
            Some(&cookie),
        )
        .await
        .assert_redirect(&index_path());

        let listing = app.get(&index_path(), Some(&cookie)).await;
        listing.assert_see("Welcome2");
        let updated = app.templates.get(template.id).await.unwrap();
        assert_eq!(updated.name, "Welcome2");
        assert_eq!(updated.content, "Hi there 2");

        app.delete(&member_path(template.id), Some(&cookie))
            .await
            .assert_redirect(&index_path());

        assert!(app.templates.get(template.id).await.is_none());
        assert_eq!(app.templates.count().await, 0);
    }
}

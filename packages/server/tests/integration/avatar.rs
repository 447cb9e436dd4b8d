use serde_json::json;

use crate::common::{TestApp, routes};

const USER: i32 = 123;

mod catalog {
    use super::*;

    #[tokio::test]
    async fn lists_seeded_catalog_in_id_order() {
        let app = TestApp::spawn().await;

        let res = app.get_without_token(routes::AVATARS).await;
        assert_eq!(res.status, 200, "catalog failed: {}", res.text);
        let items = res.body.as_array().unwrap();
        assert!(!items.is_empty());

        let ids: Vec<i64> = items
            .iter()
            .map(|a| a["avatar_id"].as_i64().unwrap())
            .collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(
            items.iter().filter(|a| a["is_default"] == true).count(),
            1
        );
    }

    #[tokio::test]
    async fn store_catalog_matches_api() {
        let app = TestApp::spawn().await;

        let from_store = app.avatars.list_catalog().await.unwrap();
        let res = app.get_without_token(routes::AVATARS).await;
        assert_eq!(res.body.as_array().unwrap().len(), from_store.len());
        assert_eq!(res.body[0]["avatar_name"], from_store[0].avatar_name);
    }
}

mod assignment {
    use super::*;

    #[tokio::test]
    async fn unassigned_user_gets_default() {
        let app = TestApp::spawn().await;

        let avatar = app.avatars.get_assignment(USER).await.unwrap();
        assert!(avatar.is_default);
        assert_eq!(app.count_user_avatars(USER).await, 0);
    }

    #[tokio::test]
    async fn set_then_get_and_unknown_avatar_keeps_previous() {
        let app = TestApp::spawn().await;

        let set = app.avatars.set_assignment(USER, 5).await.unwrap();
        assert_eq!(set.avatar_id, 5);
        assert_eq!(app.avatars.get_assignment(USER).await.unwrap(), set);

        let err = app.avatars.set_assignment(USER, 999).await.unwrap_err();
        assert!(
            matches!(err, media_server::store::StoreError::NotFound(_)),
            "got {err:?}"
        );
        assert_eq!(app.avatars.get_assignment(USER).await.unwrap().avatar_id, 5);
        assert_eq!(app.count_user_avatars(USER).await, 1);
    }

    #[tokio::test]
    async fn reassigning_keeps_one_row_per_user() {
        let app = TestApp::spawn().await;

        app.avatars.set_assignment(USER, 2).await.unwrap();
        app.avatars.set_assignment(USER, 3).await.unwrap();
        app.avatars.set_assignment(USER + 1, 4).await.unwrap();

        assert_eq!(app.count_user_avatars(USER).await, 1);
        assert_eq!(app.avatars.get_assignment(USER).await.unwrap().avatar_id, 3);
        assert_eq!(
            app.avatars.get_assignment(USER + 1).await.unwrap().avatar_id,
            4
        );
    }
}

mod http_endpoints {
    use super::*;

    #[tokio::test]
    async fn put_and_get_own_avatar() {
        let app = TestApp::spawn().await;
        let token = app.token_for(USER);

        let res = app
            .put_with_token(&routes::user_avatar(USER), &json!({ "avatar_id": 5 }), &token)
            .await;
        assert_eq!(res.status, 200, "set failed: {}", res.text);
        assert_eq!(res.body["avatar_id"], 5);

        let res = app.get_with_token(&routes::user_avatar(USER), &token).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body["avatar_id"], 5);
    }

    #[tokio::test]
    async fn unknown_avatar_is_not_found() {
        let app = TestApp::spawn().await;
        let token = app.token_for(USER);

        let res = app
            .put_with_token(&routes::user_avatar(USER), &json!({ "avatar_id": 999 }), &token)
            .await;
        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
        assert_eq!(app.count_user_avatars(USER).await, 0);
    }

    #[tokio::test]
    async fn invalid_avatar_id_is_rejected() {
        let app = TestApp::spawn().await;
        let token = app.token_for(USER);

        let res = app
            .put_with_token(&routes::user_avatar(USER), &json!({ "avatar_id": 0 }), &token)
            .await;
        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");

        let res = app
            .put_with_token(&routes::user_avatar(USER), &json!({ "avatar": 5 }), &token)
            .await;
        assert_eq!(res.status, 400);
    }

    #[tokio::test]
    async fn cannot_touch_another_users_avatar() {
        let app = TestApp::spawn().await;
        let token = app.token_for(USER + 1);

        let res = app
            .put_with_token(&routes::user_avatar(USER), &json!({ "avatar_id": 5 }), &token)
            .await;
        assert_eq!(res.status, 403);
        assert_eq!(res.body["code"], "PERMISSION_DENIED");

        let res = app.get_without_token(&routes::user_avatar(USER)).await;
        assert_eq!(res.status, 401);
    }
}

#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{json, Value};
use common::bearer;

const OWNER: &str = "owner@bookvillage.com";
const OTHER: &str = "other@bookvillage.com";

macro_rules! create_community {
    ($app:expr, $token:expr, $body:expr) => {{
        let req = test::TestRequest::post()
            .uri("/v1/communities")
            .insert_header(bearer(&$token))
            .set_json($body)
            .to_request();
        let resp = test::call_service(&$app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        body["data"].clone()
    }};
}

#[actix_web::test]
async fn test_create_community_echoes_fields() {
    let app = init_app!(common::context());
    let token = access_token!(app, OWNER, "책벌레");

    let created = create_community!(
        app,
        token,
        json!({ "type": "free", "title": "title1", "content": "content1" })
    );

    assert!(created["communityId"].as_i64().unwrap() > 0);
    assert_eq!(created["type"], "free");
    assert_eq!(created["title"], "title1");
    assert_eq!(created["content"], "content1");
    assert_eq!(created["displayName"], "책벌레");
    assert!(created["createdAt"].is_string());
    assert_eq!(created["createdAt"], created["modifiedAt"]);
}

#[actix_web::test]
async fn test_create_community_ignores_requested_display_name() {
    let app = init_app!(common::context());
    let token = access_token!(app, OWNER, "책벌레");

    let created = create_community!(
        app,
        token,
        json!({ "type": "study", "title": "t", "content": "c", "displayName": "someone-else" })
    );

    assert_eq!(created["displayName"], "책벌레");
}

#[actix_web::test]
async fn test_create_community_requires_token() {
    let app = init_app!(common::context());

    let req = test::TestRequest::post()
        .uri("/v1/communities")
        .set_json(json!({ "type": "free", "title": "title1", "content": "content1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().starts_with("Authentication error"));
}

#[actix_web::test]
async fn test_create_community_rejects_invalid_body() {
    let app = init_app!(common::context());
    let token = access_token!(app, OWNER, "책벌레");

    for body in [
        json!({ "type": "qna", "title": "title1", "content": "content1" }),
        json!({ "type": "free", "title": "", "content": "content1" }),
        json!({ "type": "free", "content": "content1" }),
    ] {
        let req = test::TestRequest::post()
            .uri("/v1/communities")
            .insert_header(bearer(&token))
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}

#[actix_web::test]
async fn test_patch_title_only_keeps_other_fields() {
    let app = init_app!(common::context());
    let token = access_token!(app, OWNER, "책벌레");
    let created = create_community!(
        app,
        token,
        json!({ "type": "recommend", "title": "title1", "content": "content1" })
    );
    let id = created["communityId"].as_i64().unwrap();

    let req = test::TestRequest::patch()
        .uri(&format!("/v1/communities/{}", id))
        .insert_header(bearer(&token))
        .set_json(json!({ "communityId": 999, "title": "title2" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let updated = &body["data"];
    assert_eq!(updated["communityId"], id);
    assert_eq!(updated["title"], "title2");
    assert_eq!(updated["type"], "recommend");
    assert_eq!(updated["content"], "content1");
    assert_eq!(updated["displayName"], "책벌레");
    assert_eq!(updated["createdAt"], created["createdAt"]);
}

#[actix_web::test]
async fn test_non_owner_cannot_patch_or_delete() {
    let app = init_app!(common::context());
    let owner_token = access_token!(app, OWNER, "책벌레");
    let other_token = access_token!(app, OTHER, "독서왕");
    let created = create_community!(
        app,
        owner_token,
        json!({ "type": "free", "title": "title1", "content": "content1" })
    );
    let uri = format!("/v1/communities/{}", created["communityId"]);

    let req = test::TestRequest::patch()
        .uri(&uri)
        .insert_header(bearer(&other_token))
        .set_json(json!({ "title": "hijacked" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::delete()
        .uri(&uri)
        .insert_header(bearer(&other_token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::get().uri(&uri).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["title"], "title1");
}

#[actix_web::test]
async fn test_patch_missing_community_is_not_found() {
    let app = init_app!(common::context());
    let token = access_token!(app, OWNER, "책벌레");

    let req = test::TestRequest::patch()
        .uri("/v1/communities/12345")
        .insert_header(bearer(&token))
        .set_json(json!({ "title": "title2" }))
        .to_request();

    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_delete_then_get_is_not_found() {
    let app = init_app!(common::context());
    let token = access_token!(app, OWNER, "책벌레");
    let created = create_community!(
        app,
        token,
        json!({ "type": "notice", "title": "title1", "content": "content1" })
    );
    let uri = format!("/v1/communities/{}", created["communityId"]);

    let req = test::TestRequest::delete()
        .uri(&uri)
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn test_list_is_paginated() {
    let app = init_app!(common::context());
    let token = access_token!(app, OWNER, "책벌레");
    for i in 0..12 {
        create_community!(
            app,
            token,
            json!({ "type": "free", "title": format!("title{}", i), "content": "content" })
        );
    }

    let req = test::TestRequest::get().uri("/v1/communities?page=0&size=10").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"].as_array().unwrap().len(), 10);
    assert_eq!(
        body["pageInfo"],
        json!({
            "currentPage": 0,
            "totalPage": 2,
            "totalElements": 12,
            "pageSize": 10,
            "first": true,
            "last": false,
            "currentElements": 10
        })
    );
    // 기본 정렬은 최신 글 먼저
    assert_eq!(body["data"][0]["title"], "title11");

    let req = test::TestRequest::get().uri("/v1/communities?page=1&size=10").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["pageInfo"]["last"], true);
    assert_eq!(body["pageInfo"]["first"], false);
}

#[actix_web::test]
async fn test_list_defaults_and_sort() {
    let app = init_app!(common::context());
    let token = access_token!(app, OWNER, "책벌레");
    for title in ["banana", "apple", "cherry"] {
        create_community!(app, token, json!({ "type": "free", "title": title, "content": "c" }));
    }

    let req = test::TestRequest::get().uri("/v1/communities").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["pageInfo"]["pageSize"], 10);
    assert_eq!(body["pageInfo"]["totalElements"], 3);

    let req = test::TestRequest::get().uri("/v1/communities?sort=title,asc").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let titles: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["apple", "banana", "cherry"]);
}

#[actix_web::test]
async fn test_list_rejects_invalid_query() {
    let app = init_app!(common::context());

    for uri in ["/v1/communities?size=0", "/v1/communities?size=101", "/v1/communities?page=-1"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST, "{}", uri);
    }
}

#[actix_web::test]
async fn test_huge_page_number() {
    let app = init_app!(common::context());
    let token = access_token!(app, OWNER, "책벌레");
    create_community!(
        app,
        token,
        json!({ "type": "free", "title": "only post", "content": "content" })
    );

    let req = test::TestRequest::get()
        .uri("/v1/communities?page=18446744073709551615&size=10")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().starts_with("Validation error"));

    let req = test::TestRequest::get()
        .uri("/v1/communities?page=1000000&size=100")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"], json!([]));
    assert_eq!(body["pageInfo"]["currentPage"], 1000000);
    assert_eq!(body["pageInfo"]["totalElements"], 1);
    assert_eq!(body["pageInfo"]["last"], true);
}

#[actix_web::test]
async fn test_invalid_path_id_is_bad_request() {
    let app = init_app!(common::context());

    let req = test::TestRequest::get().uri("/v1/communities/abc").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_mine_lists_only_own_communities() {
    let app = init_app!(common::context());
    let owner_token = access_token!(app, OWNER, "책벌레");
    let other_token = access_token!(app, OTHER, "독서왕");
    create_community!(app, owner_token, json!({ "type": "free", "title": "mine", "content": "c" }));
    create_community!(app, other_token, json!({ "type": "free", "title": "theirs", "content": "c" }));

    let req = test::TestRequest::get()
        .uri("/v1/communities/mine")
        .insert_header(bearer(&owner_token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["pageInfo"]["totalElements"], 1);
    assert_eq!(body["data"][0]["title"], "mine");

    let req = test::TestRequest::get().uri("/v1/communities/mine").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);
}

//! Post handlers.

use actix_web::{HttpResponse, web};

use board_core::domain::{Post, PostDraft, PostId};
use board_shared::dto::{DeletePostRequest, PostRequest, PostResponse, SuccessResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        author: post.author,
        created_at: post.timestamps.created_at,
        modified_at: post.timestamps.modified_at,
    }
}

fn to_draft(req: PostRequest) -> PostDraft {
    PostDraft::new(req.title, req.content, req.author, req.password)
}

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts: Vec<PostResponse> = state
        .posts
        .list()
        .await?
        .into_iter()
        .map(to_response)
        .collect();

    Ok(HttpResponse::Ok().json(posts))
}

/// POST /api/post
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let post = state.posts.create(to_draft(body.into_inner())).await?;
    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// GET /api/post/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// PUT /api/post/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .update(path.into_inner(), to_draft(body.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// DELETE /api/post/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
    body: web::Json<DeletePostRequest>,
) -> AppResult<HttpResponse> {
    let success = state
        .posts
        .delete(path.into_inner(), &body.password)
        .await?;
    Ok(HttpResponse::Ok().json(SuccessResponse { success }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, http::StatusCode, test};
    use board_infra::PlainTextPasswordService;
    use serde_json::{Value, json};

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    macro_rules! board_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(actix_web::web::Data::new(AppState::in_memory(Arc::new(
                        PlainTextPasswordService,
                    ))))
                    .configure(configure_routes),
            )
            .await
        };
    }

    fn hello() -> Value {
        json!({"title": "Hello", "content": "World", "author": "alice", "password": "pw1"})
    }

    #[actix_web::test]
    async fn test_create_and_get_post() {
        let app = board_app!();

        let req = test::TestRequest::post()
            .uri("/api/post")
            .set_json(hello())
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(created["id"], 1);
        assert_eq!(created["title"], "Hello");
        assert_eq!(created["createdAt"], created["modifiedAt"]);
        assert!(created.get("password").is_none());

        let req = test::TestRequest::get().uri("/api/post/1").to_request();
        let fetched: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, created);
    }

    #[actix_web::test]
    async fn test_list_posts_newest_modification_first() {
        let app = board_app!();

        for title in ["first", "second"] {
            let mut body = hello();
            body["title"] = json!(title);
            let req = test::TestRequest::post()
                .uri("/api/post")
                .set_json(body)
                .to_request();
            test::call_service(&app, req).await;
        }

        let req = test::TestRequest::put()
            .uri("/api/post/1")
            .set_json(json!({"title": "first, edited", "content": "World", "author": "alice", "password": "pw1"}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let posts: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0]["title"], "first, edited");
        assert!(posts.iter().all(|p| p.get("password").is_none()));
    }

    #[actix_web::test]
    async fn test_update_with_wrong_password_is_unauthorized() {
        let app = board_app!();
        let req = test::TestRequest::post()
            .uri("/api/post")
            .set_json(hello())
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::put()
            .uri("/api/post/1")
            .set_json(json!({"title": "Hi", "content": "World", "author": "alice", "password": "wrong"}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let problem: Value = test::read_body_json(res).await;
        assert_eq!(problem["status"], 401);
        assert_eq!(problem["detail"], "Password does not match");

        let req = test::TestRequest::get().uri("/api/post/1").to_request();
        let fetched: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched["title"], "Hello");
    }

    #[actix_web::test]
    async fn test_delete_flow() {
        let app = board_app!();
        let req = test::TestRequest::post()
            .uri("/api/post")
            .set_json(hello())
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::delete()
            .uri("/api/post/1")
            .set_json(json!({"password": "nope"}))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::UNAUTHORIZED
        );

        let req = test::TestRequest::delete()
            .uri("/api/post/1")
            .set_json(json!({"password": "pw1"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({"success": true}));

        let req = test::TestRequest::get().uri("/api/post/1").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let problem: Value = test::read_body_json(res).await;
        assert_eq!(problem["title"], "Not Found");
    }

    #[actix_web::test]
    async fn test_missing_post_is_not_found_for_every_verb() {
        let app = board_app!();

        let req = test::TestRequest::put()
            .uri("/api/post/77")
            .set_json(hello())
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::delete()
            .uri("/api/post/77")
            .set_json(json!({"password": "pw1"}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_bad_input_is_bad_request() {
        let app = board_app!();

        let mut blank = hello();
        blank["author"] = json!("");
        let req = test::TestRequest::post()
            .uri("/api/post")
            .set_json(blank)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/post")
            .set_json(json!({"title": "only a title"}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let problem: Value = test::read_body_json(res).await;
        assert_eq!(problem["status"], 400);

        let req = test::TestRequest::get().uri("/api/post/abc").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
    }
}

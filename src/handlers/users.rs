//! # User CRUD HTTP Handlers
//!
//! 사용자 리소스의 CRUD 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/users` | 전체 목록 조회 (비어 있으면 안내 문자열) |
//! | `POST` | `/users` | 검증 후 생성 |
//! | `GET` | `/users/{id}` | ID로 조회 |
//! | `PUT`/`PATCH` | `/users/{id}` | ID로 수정 (upsert) |
//! | `DELETE` | `/users/{id}` | ID로 삭제, 삭제된 레코드 반환 |
//!
//! 모든 응답은 HTTP 200이며, 결과는 `{status, results}` 봉투로 감싸집니다.

use actix_web::{delete, get, post, route, web, HttpResponse};
use validator::Validate;

use crate::domain::dto::envelope::Envelope;
use crate::domain::dto::users::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::errors::{validation_message, AppError};
use crate::repositories::UserStore;

/// ID 키 불일치 시 노출되는 메시지
fn user_not_found(id: &str) -> AppError {
    AppError::NotFound(format!("User with an ID of {} does not exist.", id))
}

/// 사용자 목록 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /users`
///
/// 컬렉션이 비어 있으면 빈 배열 대신 안내 문자열
/// `"There are no users."`를 `results`에 담아 반환합니다.
#[get("")]
pub async fn list_users(store: web::Data<dyn UserStore>) -> Result<HttpResponse, AppError> {
    let users = store.list_all().await?;

    if users.is_empty() {
        return Ok(HttpResponse::Ok().json(Envelope::success("There are no users.")));
    }

    let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

    Ok(HttpResponse::Ok().json(Envelope::success(users)))
}

/// 사용자 생성 핸들러
///
/// # 엔드포인트
///
/// `POST /users`
///
/// # 요청 본문
///
/// ```json
/// { "name": "Johnny", "favoriteMonsters": ["Destroyah"] }
/// ```
///
/// `name`이 누락되면 ``Path `name` is required.`` 메시지를 담은 에러
/// 봉투로 응답합니다. 성공 시 ID와 타임스탬프가 채워진 레코드를
/// 반환합니다.
#[post("")]
pub async fn create_user(
    store: web::Data<dyn UserStore>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::Validation(validation_message(&e)))?;

    let created = store.create(payload.into_inner().into_entity()).await?;

    Ok(HttpResponse::Ok().json(Envelope::success(UserResponse::from(created))))
}

/// 사용자 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /users/{user_id}`
///
/// 일치하는 레코드가 없거나 ID 형식이 잘못된 경우 ID를 포함한
/// not-found 메시지를 담은 에러 봉투로 응답합니다.
#[get("/{user_id}")]
pub async fn get_user(
    store: web::Data<dyn UserStore>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = store
        .find_by_id(&user_id)
        .await?
        .ok_or_else(|| user_not_found(&user_id))?;

    Ok(HttpResponse::Ok().json(Envelope::success(UserResponse::from(user))))
}

/// 사용자 수정 핸들러 (upsert)
///
/// # 엔드포인트
///
/// `PUT /users/{user_id}` / `PATCH /users/{user_id}`
///
/// 패치에 포함된 필드만 덮어쓰고, 갱신 이후의 레코드를 반환합니다.
/// 일치하는 레코드가 없으면 패치 내용으로 새 레코드를 생성합니다.
#[route("/{user_id}", method = "PUT", method = "PATCH")]
pub async fn update_user(
    store: web::Data<dyn UserStore>,
    user_id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(validation_message(&e)))?;

    let updated = store
        .update_by_id(&user_id, payload.into_inner().into_patch())
        .await?
        .ok_or_else(|| user_not_found(&user_id))?;

    Ok(HttpResponse::Ok().json(Envelope::success(UserResponse::from(updated))))
}

/// 사용자 삭제 핸들러
///
/// # 엔드포인트
///
/// `DELETE /users/{user_id}`
///
/// 물리적 삭제(Hard Delete)이며, 삭제된 레코드를 그대로 반환합니다.
#[delete("/{user_id}")]
pub async fn delete_user(
    store: web::Data<dyn UserStore>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let removed = store
        .remove_by_id(&user_id)
        .await?
        .ok_or_else(|| user_not_found(&user_id))?;

    Ok(HttpResponse::Ok().json(Envelope::success(UserResponse::from(removed))))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{test, web, App};
    use mongodb::bson::oid::ObjectId;
    use serde_json::{json, Value};

    use crate::errors::json_error_handler;
    use crate::repositories::memory::InMemoryUserStore;
    use crate::repositories::UserStore;
    use crate::routes::configure_user_routes;

    macro_rules! user_app {
        () => {{
            let store: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new());
            test::init_service(
                App::new()
                    .app_data(web::Data::from(store))
                    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                    .configure(configure_user_routes),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn test_get_on_empty_collection_returns_sentinel_string() {
        let app = user_app!();

        let req = test::TestRequest::get().uri("/users").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["results"], "There are no users.");
    }

    #[actix_web::test]
    async fn test_post_creates_user_with_generated_fields() {
        let app = user_app!();

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": "Johnny" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["results"]["name"], "Johnny");
        assert_eq!(body["results"]["favoriteMonsters"], json!([]));
        assert!(!body["results"]["id"].as_str().unwrap().is_empty());
        assert!(body["results"]["createdAt"].is_string());
        assert!(body["results"]["updatedAt"].is_string());
    }

    #[actix_web::test]
    async fn test_post_without_name_returns_required_message() {
        let app = user_app!();

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "favoriteMonsters": ["Mothra"] }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["results"], "Path `name` is required.");
    }

    #[actix_web::test]
    async fn test_post_then_get_round_trips() {
        let app = user_app!();

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": "Johnny", "favoriteMonsters": ["Mothra"] }))
            .to_request();
        let created: Value = test::read_body_json(test::call_service(&app, req).await).await;
        let id = created["results"]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::get()
            .uri(&format!("/users/{}", id))
            .to_request();
        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;

        assert_eq!(body["status"], "success");
        assert_eq!(body["results"]["id"], id.as_str());
        assert_eq!(body["results"]["name"], "Johnny");
        assert_eq!(body["results"]["favoriteMonsters"], json!(["Mothra"]));
        assert_eq!(body["results"]["createdAt"], created["results"]["createdAt"]);
    }

    #[actix_web::test]
    async fn test_get_unknown_id_returns_not_found_envelope() {
        let app = user_app!();
        let id = ObjectId::new().to_hex();

        let req = test::TestRequest::get()
            .uri(&format!("/users/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "error");
        assert_eq!(
            body["results"],
            format!("User with an ID of {} does not exist.", id)
        );
    }

    #[actix_web::test]
    async fn test_put_coerces_scalar_favorite_monster_to_list() {
        let app = user_app!();

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": "Johnny" }))
            .to_request();
        let created: Value = test::read_body_json(test::call_service(&app, req).await).await;
        let id = created["results"]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::put()
            .uri(&format!("/users/{}", id))
            .set_json(json!({ "favoriteMonsters": "Destroyah" }))
            .to_request();
        let updated: Value = test::read_body_json(test::call_service(&app, req).await).await;
        assert_eq!(updated["status"], "success");

        let req = test::TestRequest::get()
            .uri(&format!("/users/{}", id))
            .to_request();
        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
        assert_eq!(body["results"]["favoriteMonsters"], json!(["Destroyah"]));
        assert_eq!(body["results"]["name"], "Johnny");
    }

    #[actix_web::test]
    async fn test_patch_on_missing_id_upserts_instead_of_failing() {
        let app = user_app!();
        let id = ObjectId::new().to_hex();

        let req = test::TestRequest::patch()
            .uri(&format!("/users/{}", id))
            .set_json(json!({ "name": "Johnny" }))
            .to_request();
        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;

        assert_eq!(body["status"], "success");
        assert_eq!(body["results"]["id"], id.as_str());
        assert_eq!(body["results"]["name"], "Johnny");
    }

    #[actix_web::test]
    async fn test_delete_then_get_returns_not_found_envelope() {
        let app = user_app!();

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": "Johnny" }))
            .to_request();
        let created: Value = test::read_body_json(test::call_service(&app, req).await).await;
        let id = created["results"]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::delete()
            .uri(&format!("/users/{}", id))
            .to_request();
        let deleted: Value = test::read_body_json(test::call_service(&app, req).await).await;
        assert_eq!(deleted["status"], "success");
        assert_eq!(deleted["results"]["name"], "Johnny");

        let req = test::TestRequest::get()
            .uri(&format!("/users/{}", id))
            .to_request();
        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
        assert_eq!(body["status"], "error");
        assert_eq!(
            body["results"],
            format!("User with an ID of {} does not exist.", id)
        );
    }

    #[actix_web::test]
    async fn test_malformed_json_body_is_flattened_to_error_envelope() {
        let app = user_app!();

        let req = test::TestRequest::post()
            .uri("/users")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "error");
        assert!(body["results"].is_string());
    }
}

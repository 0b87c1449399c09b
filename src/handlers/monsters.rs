//! # Monster CRUD HTTP Handlers
//!
//! 몬스터 리소스의 CRUD 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 사용자와 달리 경로의 키가 ObjectId가 아닌 몬스터 이름입니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/monsters` | 전체 목록 조회 |
//! | `POST` | `/monsters` | 검증 후 생성 |
//! | `GET` | `/monsters/totalDestruction` | `citiesRazed` 합계 |
//! | `GET` | `/monsters/{name}` | 이름으로 조회 |
//! | `PUT`/`PATCH` | `/monsters/{name}` | 이름으로 수정 (upsert) |
//! | `DELETE` | `/monsters/{name}` | 이름으로 삭제 |

use actix_web::{delete, get, post, route, web, HttpResponse};
use validator::Validate;

use crate::domain::dto::envelope::Envelope;
use crate::domain::dto::monsters::{
    CreateMonsterRequest, MonsterResponse, UpdateMonsterRequest,
};
use crate::errors::{validation_message, AppError};
use crate::repositories::MonsterStore;

/// 이름 키 불일치 시 노출되는 메시지
fn monster_not_found(name: &str) -> AppError {
    AppError::NotFound(format!("Monster with a name of {} does not exist.", name))
}

/// 몬스터 목록 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /monsters`
///
/// 컬렉션이 비어 있으면 안내 문자열 `"There are no monsters."`를
/// 반환합니다.
#[get("")]
pub async fn list_monsters(store: web::Data<dyn MonsterStore>) -> Result<HttpResponse, AppError> {
    let monsters = store.list_all().await?;

    if monsters.is_empty() {
        return Ok(HttpResponse::Ok().json(Envelope::success("There are no monsters.")));
    }

    let monsters: Vec<MonsterResponse> =
        monsters.into_iter().map(MonsterResponse::from).collect();

    Ok(HttpResponse::Ok().json(Envelope::success(monsters)))
}

/// 몬스터 생성 핸들러
///
/// # 엔드포인트
///
/// `POST /monsters`
///
/// # 요청 본문
///
/// ```json
/// { "name": "Mothra", "citiesRazed": 25 }
/// ```
///
/// `name` 누락 또는 음수 `citiesRazed`는 해당 검증 메시지를 담은
/// 에러 봉투로 응답합니다.
#[post("")]
pub async fn create_monster(
    store: web::Data<dyn MonsterStore>,
    payload: web::Json<CreateMonsterRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::Validation(validation_message(&e)))?;

    let created = store.create(payload.into_inner().into_entity()).await?;

    Ok(HttpResponse::Ok().json(Envelope::success(MonsterResponse::from(created))))
}

/// 전체 파괴 도시 수 집계 핸들러
///
/// # 엔드포인트
///
/// `GET /monsters/totalDestruction`
///
/// 모든 몬스터의 `citiesRazed` 합을 숫자 하나로 반환합니다.
/// `{name}` 경로보다 먼저 등록되어야 리터럴 세그먼트가 우선합니다.
#[get("/totalDestruction")]
pub async fn total_destruction(
    store: web::Data<dyn MonsterStore>,
) -> Result<HttpResponse, AppError> {
    let total = store.total_destruction().await?;

    Ok(HttpResponse::Ok().json(Envelope::success(total)))
}

/// 몬스터 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /monsters/{name}`
#[get("/{name}")]
pub async fn get_monster(
    store: web::Data<dyn MonsterStore>,
    name: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let monster = store
        .find_by_name(&name)
        .await?
        .ok_or_else(|| monster_not_found(&name))?;

    Ok(HttpResponse::Ok().json(Envelope::success(MonsterResponse::from(monster))))
}

/// 몬스터 수정 핸들러 (upsert)
///
/// # 엔드포인트
///
/// `PUT /monsters/{name}` / `PATCH /monsters/{name}`
///
/// 일치하는 이름이 없으면 패치 내용으로 새 몬스터를 생성합니다.
#[route("/{name}", method = "PUT", method = "PATCH")]
pub async fn update_monster(
    store: web::Data<dyn MonsterStore>,
    name: web::Path<String>,
    payload: web::Json<UpdateMonsterRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(validation_message(&e)))?;

    let updated = store
        .update_by_name(&name, payload.into_inner().into_patch())
        .await?
        .ok_or_else(|| monster_not_found(&name))?;

    Ok(HttpResponse::Ok().json(Envelope::success(MonsterResponse::from(updated))))
}

/// 몬스터 삭제 핸들러
///
/// # 엔드포인트
///
/// `DELETE /monsters/{name}`
#[delete("/{name}")]
pub async fn delete_monster(
    store: web::Data<dyn MonsterStore>,
    name: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let removed = store
        .remove_by_name(&name)
        .await?
        .ok_or_else(|| monster_not_found(&name))?;

    Ok(HttpResponse::Ok().json(Envelope::success(MonsterResponse::from(removed))))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{test, web, App};
    use serde_json::{json, Value};

    use crate::errors::json_error_handler;
    use crate::repositories::memory::InMemoryMonsterStore;
    use crate::repositories::MonsterStore;
    use crate::routes::configure_monster_routes;

    macro_rules! monster_app {
        () => {{
            let store: Arc<dyn MonsterStore> = Arc::new(InMemoryMonsterStore::new());
            test::init_service(
                App::new()
                    .app_data(web::Data::from(store))
                    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                    .configure(configure_monster_routes),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn test_get_on_empty_collection_returns_sentinel_string() {
        let app = monster_app!();

        let req = test::TestRequest::get().uri("/monsters").to_request();
        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;

        assert_eq!(body["status"], "success");
        assert_eq!(body["results"], "There are no monsters.");
    }

    #[actix_web::test]
    async fn test_post_with_negative_cities_razed_returns_message() {
        let app = monster_app!();

        let req = test::TestRequest::post()
            .uri("/monsters")
            .set_json(json!({ "name": "negMon", "citiesRazed": -1 }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["results"], "citiesRazed cannot be a negative value");
    }

    #[actix_web::test]
    async fn test_post_without_name_returns_required_message() {
        let app = monster_app!();

        let req = test::TestRequest::post()
            .uri("/monsters")
            .set_json(json!({ "citiesRazed": 10 }))
            .to_request();
        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;

        assert_eq!(body["status"], "error");
        assert_eq!(body["results"], "Path `name` is required.");
    }

    #[actix_web::test]
    async fn test_total_destruction_sums_all_monsters() {
        let app = monster_app!();

        for (name, cities) in [("Mothra", 25), ("Destroyah", 50)] {
            let req = test::TestRequest::post()
                .uri("/monsters")
                .set_json(json!({ "name": name, "citiesRazed": cities }))
                .to_request();
            let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
            assert_eq!(body["status"], "success");
        }

        let req = test::TestRequest::get()
            .uri("/monsters/totalDestruction")
            .to_request();
        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;

        assert_eq!(body["status"], "success");
        assert_eq!(body["results"], 75);
    }

    #[actix_web::test]
    async fn test_get_by_name_round_trips() {
        let app = monster_app!();

        let req = test::TestRequest::post()
            .uri("/monsters")
            .set_json(json!({ "name": "Mothra", "citiesRazed": 25 }))
            .to_request();
        let created: Value = test::read_body_json(test::call_service(&app, req).await).await;

        let req = test::TestRequest::get().uri("/monsters/Mothra").to_request();
        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;

        assert_eq!(body["status"], "success");
        assert_eq!(body["results"]["name"], "Mothra");
        assert_eq!(body["results"]["citiesRazed"], 25);
        assert_eq!(body["results"]["id"], created["results"]["id"]);
    }

    #[actix_web::test]
    async fn test_get_unknown_name_returns_not_found_envelope() {
        let app = monster_app!();

        let req = test::TestRequest::get().uri("/monsters/Rodan").to_request();
        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;

        assert_eq!(body["status"], "error");
        assert_eq!(
            body["results"],
            "Monster with a name of Rodan does not exist."
        );
    }

    #[actix_web::test]
    async fn test_put_on_missing_name_upserts() {
        let app = monster_app!();

        let req = test::TestRequest::put()
            .uri("/monsters/Rodan")
            .set_json(json!({ "citiesRazed": 3 }))
            .to_request();
        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;

        assert_eq!(body["status"], "success");
        assert_eq!(body["results"]["name"], "Rodan");
        assert_eq!(body["results"]["citiesRazed"], 3);
    }

    #[actix_web::test]
    async fn test_update_rejects_negative_cities_razed() {
        let app = monster_app!();

        let req = test::TestRequest::put()
            .uri("/monsters/Mothra")
            .set_json(json!({ "citiesRazed": -10 }))
            .to_request();
        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;

        assert_eq!(body["status"], "error");
        assert_eq!(body["results"], "citiesRazed cannot be a negative value");
    }

    #[actix_web::test]
    async fn test_delete_returns_removed_record() {
        let app = monster_app!();

        let req = test::TestRequest::post()
            .uri("/monsters")
            .set_json(json!({ "name": "Mothra", "citiesRazed": 25 }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::delete()
            .uri("/monsters/Mothra")
            .to_request();
        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["results"]["name"], "Mothra");

        let req = test::TestRequest::get().uri("/monsters").to_request();
        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
        assert_eq!(body["results"], "There are no monsters.");
    }
}

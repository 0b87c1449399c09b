//! API 라우트 설정 모듈
//!
//! REST 엔드포인트들을 리소스별로 그룹화하여 제공합니다.
//!
//! # Features
//!
//! - 사용자 CRUD API 엔드포인트 (`/users`)
//! - 몬스터 CRUD + 집계 API 엔드포인트 (`/monsters`)
//! - 헬스체크 엔드포인트 (`/health`)
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use actix_web::web;
use serde_json::json;

use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// 리소스별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Resource-specific routes
    configure_user_routes(cfg);
    configure_monster_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// # Routes
///
/// - `GET /users` - 전체 목록 조회
/// - `POST /users` - 사용자 생성
/// - `GET /users/{id}` - ID로 조회
/// - `PUT|PATCH /users/{id}` - ID로 수정 (upsert)
/// - `DELETE /users/{id}` - ID로 삭제
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::users::list_users)
            .service(handlers::users::create_user)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

/// 몬스터 관련 라우트를 설정합니다
///
/// `totalDestruction`은 리터럴 경로이므로 `{name}` 라우트보다 먼저
/// 등록합니다.
///
/// # Routes
///
/// - `GET /monsters` - 전체 목록 조회
/// - `POST /monsters` - 몬스터 생성
/// - `GET /monsters/totalDestruction` - `citiesRazed` 합계
/// - `GET /monsters/{name}` - 이름으로 조회
/// - `PUT|PATCH /monsters/{name}` - 이름으로 수정 (upsert)
/// - `DELETE /monsters/{name}` - 이름으로 삭제
pub fn configure_monster_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/monsters")
            .service(handlers::monsters::list_monsters)
            .service(handlers::monsters::create_monster)
            .service(handlers::monsters::total_destruction)
            .service(handlers::monsters::get_monster)
            .service(handlers::monsters::update_monster)
            .service(handlers::monsters::delete_monster),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8000/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "monster_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

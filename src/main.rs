//! 몬스터 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! MongoDB 연결을 설정하고 사용자/몬스터 CRUD REST API를 제공합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::info;

use monster_service_backend::config::{DataConfig, ServerConfig};
use monster_service_backend::db::Database;
use monster_service_backend::errors::json_error_handler;
use monster_service_backend::repositories::monsters::MongoMonsterRepository;
use monster_service_backend::repositories::users::MongoUserRepository;
use monster_service_backend::repositories::{MonsterStore, UserStore};
use monster_service_backend::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    dotenv().ok();
    init_logging();

    info!("🚀 몬스터 서비스 시작중...");

    // 데이터 스토어 초기화 후 핸들러 계층에 명시적으로 주입
    let (user_store, monster_store) = initialize_stores().await;

    start_http_server(user_store, monster_store).await
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
/// 기본값은 info 레벨이며, actix_web은 debug 레벨로 설정됩니다.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// MongoDB 연결과 리소스별 저장소를 초기화합니다
///
/// 단일 공유 커넥션을 생성하고 trait 객체로 래핑된 저장소 쌍을
/// 반환합니다. 연결 실패 시 애플리케이션이 종료됩니다.
///
/// # Panics
///
/// * MongoDB 연결 실패 시
async fn initialize_stores() -> (Arc<dyn UserStore>, Arc<dyn MonsterStore>) {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::connect(&DataConfig::db_uri(), &DataConfig::database_name())
        .await
        .expect("데이터베이스 연결 실패");

    let user_store: Arc<dyn UserStore> = Arc::new(MongoUserRepository::new(&database));
    let monster_store: Arc<dyn MonsterStore> = Arc::new(MongoMonsterRepository::new(&database));

    (user_store, monster_store)
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함하며, JSON 본문 파싱 실패도
/// 공통 에러 봉투로 변환되도록 JsonConfig를 등록합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    user_store: Arc<dyn UserStore>,
    monster_store: Arc<dyn MonsterStore>,
) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        let cors = configure_cors();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            // 저장소 주입 (테스트에서는 인메모리 구현으로 교체됨)
            .app_data(web::Data::from(user_store.clone()))
            .app_data(web::Data::from(monster_store.clone()))
            // JSON 파싱 실패를 에러 봉투로 변환
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}

/// CORS 설정을 구성합니다
///
/// 개발환경에서 로컬호스트 간 통신을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8000")
        .allowed_origin("http://127.0.0.1:8000")
        .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}

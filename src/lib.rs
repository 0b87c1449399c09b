//! 몬스터 서비스 백엔드
//!
//! MongoDB 기반의 사용자/몬스터 CRUD REST 서비스입니다.
//! 모든 응답은 `{status, results}` 형태의 통일된 JSON 봉투로 감싸지며,
//! 성공/실패 여부는 HTTP 상태 코드가 아닌 봉투의 `status` 필드로 전달됩니다.
//!
//! # Features
//!
//! - **사용자 관리**: ObjectId 키 기반의 CRUD (upsert 지원)
//! - **몬스터 관리**: 이름 키 기반의 CRUD + 파괴 도시 수 집계
//! - **입력 검증**: DTO 계층에서의 선언적 검증 (validator)
//! - **명시적 DI**: 저장소 trait을 `web::Data`로 주입하여 테스트 교체 가능
//! - **MongoDB**: 단일 공유 커넥션, 단일 문서 원자성에만 의존
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 검증 + 봉투 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 저장소 trait (Mongo / In-memory)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod repositories;
pub mod routes;

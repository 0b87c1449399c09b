//! 저장소 계층
//!
//! 리소스별 CRUD 연산을 trait으로 추상화하고, MongoDB 구현과 테스트용
//! 인메모리 구현을 제공합니다. 핸들러는 trait 객체(`web::Data<dyn ...>`)만
//! 바라보므로 저장소를 자유롭게 교체할 수 있습니다.
//!
//! # 키 규약
//!
//! - 사용자: MongoDB ObjectId의 16진수 문자열
//! - 몬스터: `name` 필드
//!
//! 조회/수정/삭제 연산은 키가 형식상 유효하지 않거나 일치하는 레코드가
//! 없으면 `Ok(None)`을 반환하고, 저장소 오류만 `Err`로 전달합니다.
//! 수정 연산은 upsert 의미론을 가지므로 유효한 키에 대해서는 항상
//! 레코드를 반환합니다.

pub mod memory;
pub mod monsters;
pub mod users;

use async_trait::async_trait;

use crate::domain::entities::{Monster, MonsterPatch, User, UserPatch};
use crate::errors::AppResult;

/// 사용자 저장소 연산
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 모든 사용자를 조회합니다.
    async fn list_all(&self) -> AppResult<Vec<User>>;

    /// 새 사용자를 저장하고 ID가 채워진 레코드를 반환합니다.
    async fn create(&self, user: User) -> AppResult<User>;

    /// ID로 사용자를 조회합니다.
    ///
    /// ID가 유효한 ObjectId 16진수가 아니면 `Ok(None)`을 반환합니다.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// ID로 사용자를 수정합니다 (upsert).
    ///
    /// 일치하는 레코드가 없으면 패치 내용으로 새 레코드를 생성합니다.
    /// 패치에 포함된 필드만 덮어쓰며, `updatedAt`은 항상 갱신됩니다.
    async fn update_by_id(&self, id: &str, patch: UserPatch) -> AppResult<Option<User>>;

    /// ID로 사용자를 삭제하고, 삭제된 레코드를 반환합니다.
    async fn remove_by_id(&self, id: &str) -> AppResult<Option<User>>;
}

/// 몬스터 저장소 연산
///
/// 몬스터는 ObjectId 대신 `name`을 조회 키로 사용합니다.
#[async_trait]
pub trait MonsterStore: Send + Sync {
    /// 모든 몬스터를 조회합니다.
    async fn list_all(&self) -> AppResult<Vec<Monster>>;

    /// 새 몬스터를 저장하고 ID가 채워진 레코드를 반환합니다.
    async fn create(&self, monster: Monster) -> AppResult<Monster>;

    /// 이름으로 몬스터를 조회합니다.
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Monster>>;

    /// 이름으로 몬스터를 수정합니다 (upsert).
    async fn update_by_name(&self, name: &str, patch: MonsterPatch) -> AppResult<Option<Monster>>;

    /// 이름으로 몬스터를 삭제하고, 삭제된 레코드를 반환합니다.
    async fn remove_by_name(&self, name: &str) -> AppResult<Option<Monster>>;

    /// 전체 몬스터의 `citiesRazed` 합계를 반환합니다.
    async fn total_destruction(&self) -> AppResult<i64>;
}

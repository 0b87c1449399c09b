//! 사용자 요청/응답 DTO
//!
//! 사용자 CRUD를 위한 HTTP 데이터 구조를 정의합니다.
//! 클라이언트 입력 데이터의 검증과 타입 안전성을 보장합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::StringOrVec;
use crate::domain::entities::{User, UserPatch};

/// 사용자 생성 요청 DTO
///
/// `name`은 필수이며, 누락 시 검증 단계에서 거부됩니다.
/// `favoriteMonsters`는 생략 가능하고 기본값은 빈 목록입니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// 사용자 이름 (필수)
    #[validate(required(message = "Path `name` is required."))]
    pub name: Option<String>,

    /// 좋아하는 몬스터 목록 (문자열 하나도 허용)
    pub favorite_monsters: Option<StringOrVec>,
}

impl CreateUserRequest {
    /// 검증을 통과한 요청을 영속 엔티티로 변환합니다.
    ///
    /// `validate()`가 성공한 이후에만 호출해야 합니다.
    pub fn into_entity(self) -> User {
        User::new(
            self.name.unwrap_or_default(),
            self.favorite_monsters.map(Vec::from).unwrap_or_default(),
        )
    }
}

/// 사용자 수정 요청 DTO
///
/// 모든 필드가 선택적이며, 포함된 필드만 덮어씁니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub favorite_monsters: Option<StringOrVec>,
}

impl UpdateUserRequest {
    /// 저장소 계층이 사용하는 패치로 변환합니다.
    pub fn into_patch(self) -> UserPatch {
        UserPatch {
            name: self.name,
            favorite_monsters: self.favorite_monsters.map(Vec::from),
        }
    }
}

/// 사용자 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub favorite_monsters: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            favorite_monsters,
            created_at,
            updated_at,
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            favorite_monsters,
            created_at: created_at.to_chrono(),
            updated_at: updated_at.to_chrono(),
        }
    }
}

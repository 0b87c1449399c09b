//! 몬스터 요청/응답 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Monster, MonsterPatch};

/// 몬스터 생성 요청 DTO
///
/// `name`은 필수, `citiesRazed`는 생략 가능하며 기본값은 0입니다.
/// 음수 `citiesRazed`는 검증 단계에서 거부됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMonsterRequest {
    /// 몬스터 이름 (필수, 조회 키)
    #[validate(required(message = "Path `name` is required."))]
    pub name: Option<String>,

    /// 파괴한 도시 수 (0 이상)
    #[validate(range(min = 0, message = "citiesRazed cannot be a negative value"))]
    pub cities_razed: Option<i64>,
}

impl CreateMonsterRequest {
    /// 검증을 통과한 요청을 영속 엔티티로 변환합니다.
    ///
    /// `validate()`가 성공한 이후에만 호출해야 합니다.
    pub fn into_entity(self) -> Monster {
        Monster::new(self.name.unwrap_or_default(), self.cities_razed.unwrap_or(0))
    }
}

/// 몬스터 수정 요청 DTO
///
/// 포함된 필드만 검증하고 덮어씁니다. 수정에서도 음수 `citiesRazed`는
/// 거부됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMonsterRequest {
    pub name: Option<String>,

    #[validate(range(min = 0, message = "citiesRazed cannot be a negative value"))]
    pub cities_razed: Option<i64>,
}

impl UpdateMonsterRequest {
    /// 저장소 계층이 사용하는 패치로 변환합니다.
    pub fn into_patch(self) -> MonsterPatch {
        MonsterPatch {
            name: self.name,
            cities_razed: self.cities_razed,
        }
    }
}

/// 몬스터 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonsterResponse {
    pub id: String,
    pub name: String,
    pub cities_razed: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Monster> for MonsterResponse {
    fn from(monster: Monster) -> Self {
        let Monster {
            id,
            name,
            cities_razed,
            created_at,
            updated_at,
        } = monster;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            cities_razed,
            created_at: created_at.to_chrono(),
            updated_at: updated_at.to_chrono(),
        }
    }
}

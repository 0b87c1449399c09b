//! Monster Entity Implementation
//!
//! 몬스터 엔티티의 핵심 구현체입니다.
//! 몬스터는 ObjectId가 아닌 `name` 필드를 조회 키로 사용합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 몬스터 엔티티
///
/// 이름과 파괴한 도시 수를 가진 레코드입니다.
/// `cities_razed`는 음수가 될 수 없습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Monster {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 몬스터 이름 (필수, 조회 키)
    #[serde(default)]
    pub name: String,
    /// 파괴한 도시 수 (기본값: 0, 음수 불가)
    #[serde(default)]
    pub cities_razed: i64,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Monster {
    /// 새 몬스터 생성
    pub fn new(name: String, cities_razed: i64) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            cities_razed,
            created_at: now,
            updated_at: now,
        }
    }
}

/// 몬스터 부분 수정 패치
#[derive(Debug, Clone, Default)]
pub struct MonsterPatch {
    pub name: Option<String>,
    pub cities_razed: Option<i64>,
}

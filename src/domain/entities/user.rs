//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! `users` 컬렉션에 저장되는 문서의 형태를 그대로 표현합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 이름과 좋아하는 몬스터 목록을 가진 레코드입니다.
/// `id`는 저장 시점에 MongoDB가 할당하며 이후 변경되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름 (필수)
    #[serde(default)]
    pub name: String,
    /// 좋아하는 몬스터 목록 (기본값: 빈 목록)
    #[serde(default)]
    pub favorite_monsters: Vec<String>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 생성
    ///
    /// 생성/수정 시간이 현재 시각으로 채워진 엔티티를 반환합니다.
    /// ID는 저장 시점에 할당됩니다.
    pub fn new(name: String, favorite_monsters: Vec<String>) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            favorite_monsters,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

/// 사용자 부분 수정 패치
///
/// PUT/PATCH 요청에 포함된 필드만 `Some`으로 채워집니다.
/// 저장소 구현은 `Some`인 필드만 덮어씁니다.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub favorite_monsters: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_no_id_and_equal_timestamps() {
        let user = User::new("Johnny".to_string(), vec![]);

        assert!(user.id.is_none());
        assert!(user.id_string().is_none());
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_user_bson_field_names() {
        let user = User::new("Johnny".to_string(), vec!["Destroyah".to_string()]);
        let value = serde_json::to_value(&user).unwrap();

        assert!(value.get("favoriteMonsters").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        // ID가 없는 동안에는 _id 필드가 직렬화되지 않아야 함
        assert!(value.get("_id").is_none());
    }
}

//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 MongoDB 리포지토리입니다.
//!
//! ## 특징
//!
//! - **컬렉션명**: `users`
//! - **조회 키**: MongoDB ObjectId의 16진수 문자열
//! - **upsert**: 수정 연산은 `findOneAndUpdate` + upsert로 처리하며,
//!   갱신 이후의 문서를 반환합니다
//!
//! ## 에러 처리
//!
//! 모든 메서드는 `AppResult<T>`를 반환하며, MongoDB 드라이버 오류는
//! `AppError::Database`로 변환됩니다. 잘못된 형식의 ID는 오류가 아니라
//! "일치하는 레코드 없음"(`Ok(None)`)으로 취급합니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime},
    options::{FindOneAndUpdateOptions, ReturnDocument},
    Collection,
};

use crate::db::Database;
use crate::domain::entities::{User, UserPatch};
use crate::errors::{AppError, AppResult};
use crate::repositories::UserStore;

/// 사용자 데이터 액세스 리포지토리
///
/// `users` 컬렉션에 대한 모든 MongoDB 연산을 담당합니다.
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    /// 공유 데이터베이스 연결로부터 리포지토리를 생성합니다.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<User>("users"),
        }
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn list_all(&self) -> AppResult<Vec<User>> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        let result = self
            .collection
            .insert_one(&user)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        user.id = result.inserted_id.as_object_id();

        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn update_by_id(&self, id: &str, patch: UserPatch) -> AppResult<Option<User>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let now = DateTime::now();

        // 패치에 포함된 필드만 $set으로 덮어쓴다
        let mut set = doc! { "updatedAt": now };
        let has_monsters = patch.favorite_monsters.is_some();

        if let Some(name) = patch.name {
            set.insert("name", name);
        }
        if let Some(monsters) = patch.favorite_monsters {
            set.insert("favoriteMonsters", monsters);
        }

        // upsert로 새 문서가 생길 때만 적용되는 기본값들
        let mut set_on_insert = doc! { "createdAt": now };
        if !has_monsters {
            set_on_insert.insert("favoriteMonsters", Vec::<String>::new());
        }

        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": set, "$setOnInsert": set_on_insert },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn remove_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        self.collection
            .find_one_and_delete(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}

//! # 몬스터 리포지토리 구현
//!
//! 몬스터 엔티티의 데이터 액세스 계층을 담당하는 MongoDB 리포지토리입니다.
//! 조회 키로 ObjectId 대신 `name` 필드를 사용하며, 전체 파괴 도시 수를
//! 집계하는 연산을 추가로 제공합니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, Bson, DateTime},
    options::{FindOneAndUpdateOptions, ReturnDocument},
    Collection,
};

use crate::db::Database;
use crate::domain::entities::{Monster, MonsterPatch};
use crate::errors::{AppError, AppResult};
use crate::repositories::MonsterStore;

/// 몬스터 데이터 액세스 리포지토리
///
/// `monsters` 컬렉션에 대한 모든 MongoDB 연산을 담당합니다.
pub struct MongoMonsterRepository {
    collection: Collection<Monster>,
}

impl MongoMonsterRepository {
    /// 공유 데이터베이스 연결로부터 리포지토리를 생성합니다.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<Monster>("monsters"),
        }
    }
}

#[async_trait]
impl MonsterStore for MongoMonsterRepository {
    async fn list_all(&self) -> AppResult<Vec<Monster>> {
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

    async fn create(&self, mut monster: Monster) -> AppResult<Monster> {
        let result = self
            .collection
            .insert_one(&monster)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        monster.id = result.inserted_id.as_object_id();

        Ok(monster)
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Monster>> {
        self.collection
            .find_one(doc! { "name": name })
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn update_by_name(&self, name: &str, patch: MonsterPatch) -> AppResult<Option<Monster>> {
        let now = DateTime::now();

        let mut set = doc! { "updatedAt": now };
        let has_cities = patch.cities_razed.is_some();

        if let Some(new_name) = patch.name {
            set.insert("name", new_name);
        }
        if let Some(cities) = patch.cities_razed {
            set.insert("citiesRazed", cities);
        }

        // upsert로 새 문서가 생길 때 name은 필터에서, 나머지는 여기서 채워진다
        let mut set_on_insert = doc! { "createdAt": now };
        if !has_cities {
            set_on_insert.insert("citiesRazed", 0i64);
        }

        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(
                doc! { "name": name },
                doc! { "$set": set, "$setOnInsert": set_on_insert },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn remove_by_name(&self, name: &str) -> AppResult<Option<Monster>> {
        self.collection
            .find_one_and_delete(doc! { "name": name })
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn total_destruction(&self) -> AppResult<i64> {
        let pipeline = vec![doc! {
            "$group": { "_id": null, "total": { "$sum": "$citiesRazed" } }
        }];

        let mut cursor = self
            .collection
            .aggregate(pipeline)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        let group = cursor
            .try_next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        // 컬렉션이 비어 있으면 $group이 문서를 내보내지 않는다
        let total = match group.as_ref().and_then(|doc| doc.get("total")) {
            Some(Bson::Int64(value)) => *value,
            Some(Bson::Int32(value)) => i64::from(*value),
            Some(Bson::Double(value)) => *value as i64,
            _ => 0,
        };

        Ok(total)
    }
}

//! 인메모리 저장소 구현
//!
//! MongoDB 없이 동작하는 `UserStore`/`MonsterStore` 구현입니다.
//! 핸들러 테스트와 로컬 실험에서 실제 리포지토리 대신 주입합니다.
//! 단일 Mutex로 보호되는 Vec이므로 삽입 순서가 유지됩니다.

use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};

use crate::domain::entities::{Monster, MonsterPatch, User, UserPatch};
use crate::errors::{AppError, AppResult};
use crate::repositories::{MonsterStore, UserStore};

/// 인메모리 사용자 저장소
#[derive(Default)]
pub struct InMemoryUserStore {
    records: Mutex<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, Vec<User>>> {
        self.records
            .lock()
            .map_err(|_| AppError::Database("user store lock poisoned".to_string()))
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn list_all(&self) -> AppResult<Vec<User>> {
        Ok(self.lock()?.clone())
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        user.id = Some(ObjectId::new());
        self.lock()?.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        Ok(self
            .lock()?
            .iter()
            .find(|user| user.id == Some(object_id))
            .cloned())
    }

    async fn update_by_id(&self, id: &str, patch: UserPatch) -> AppResult<Option<User>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let mut records = self.lock()?;
        let now = DateTime::now();

        if let Some(user) = records.iter_mut().find(|user| user.id == Some(object_id)) {
            if let Some(name) = patch.name {
                user.name = name;
            }
            if let Some(monsters) = patch.favorite_monsters {
                user.favorite_monsters = monsters;
            }
            user.updated_at = now;

            return Ok(Some(user.clone()));
        }

        // 일치하는 레코드가 없으면 패치 내용으로 새로 생성한다 (upsert)
        let user = User {
            id: Some(object_id),
            name: patch.name.unwrap_or_default(),
            favorite_monsters: patch.favorite_monsters.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        records.push(user.clone());

        Ok(Some(user))
    }

    async fn remove_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let mut records = self.lock()?;
        let position = records.iter().position(|user| user.id == Some(object_id));

        Ok(position.map(|index| records.remove(index)))
    }
}

/// 인메모리 몬스터 저장소
#[derive(Default)]
pub struct InMemoryMonsterStore {
    records: Mutex<Vec<Monster>>,
}

impl InMemoryMonsterStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, Vec<Monster>>> {
        self.records
            .lock()
            .map_err(|_| AppError::Database("monster store lock poisoned".to_string()))
    }
}

#[async_trait]
impl MonsterStore for InMemoryMonsterStore {
    async fn list_all(&self) -> AppResult<Vec<Monster>> {
        Ok(self.lock()?.clone())
    }

    async fn create(&self, mut monster: Monster) -> AppResult<Monster> {
        monster.id = Some(ObjectId::new());
        self.lock()?.push(monster.clone());
        Ok(monster)
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Monster>> {
        Ok(self
            .lock()?
            .iter()
            .find(|monster| monster.name == name)
            .cloned())
    }

    async fn update_by_name(&self, name: &str, patch: MonsterPatch) -> AppResult<Option<Monster>> {
        let mut records = self.lock()?;
        let now = DateTime::now();

        if let Some(monster) = records.iter_mut().find(|monster| monster.name == name) {
            if let Some(new_name) = patch.name {
                monster.name = new_name;
            }
            if let Some(cities) = patch.cities_razed {
                monster.cities_razed = cities;
            }
            monster.updated_at = now;

            return Ok(Some(monster.clone()));
        }

        let monster = Monster {
            id: Some(ObjectId::new()),
            name: patch.name.unwrap_or_else(|| name.to_string()),
            cities_razed: patch.cities_razed.unwrap_or(0),
            created_at: now,
            updated_at: now,
        };
        records.push(monster.clone());

        Ok(Some(monster))
    }

    async fn remove_by_name(&self, name: &str) -> AppResult<Option<Monster>> {
        let mut records = self.lock()?;
        let position = records.iter().position(|monster| monster.name == name);

        Ok(position.map(|index| records.remove(index)))
    }

    async fn total_destruction(&self) -> AppResult<i64> {
        Ok(self.lock()?.iter().map(|monster| monster.cities_razed).sum())
    }
}

pub mod monster_repo;

pub use monster_repo::MongoMonsterRepository;

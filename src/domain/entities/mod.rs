//! 영속 엔티티 정의

pub mod monster;
pub mod user;

pub use monster::{Monster, MonsterPatch};
pub use user::{User, UserPatch};

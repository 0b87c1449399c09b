//! HTTP 요청/응답 DTO
//!
//! 클라이언트와의 JSON 계약을 정의합니다. 요청 DTO는 `validator` 파생으로
//! 입력 검증 규칙을 선언하고, 응답 DTO는 ObjectId를 16진수 문자열로,
//! 시간을 RFC3339 문자열로 변환하여 노출합니다.

pub mod envelope;
pub mod monsters;
pub mod users;

use serde::{Deserialize, Serialize};

/// 문자열 하나 또는 문자열 목록을 모두 받아들이는 입력 타입
///
/// 원조 문서 저장소 ORM들이 스칼라 값을 단일 원소 배열로 캐스팅하듯,
/// `"Destroyah"`와 `["Destroyah"]`를 같은 의미로 취급합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringOrVec {
    One(String),
    Many(Vec<String>),
}

impl From<StringOrVec> for Vec<String> {
    fn from(value: StringOrVec) -> Self {
        match value {
            StringOrVec::One(item) => vec![item],
            StringOrVec::Many(items) => items,
        }
    }
}

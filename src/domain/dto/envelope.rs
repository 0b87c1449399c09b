//! 공통 응답 봉투
//!
//! 모든 엔드포인트는 성공/실패와 무관하게 HTTP 200으로 응답하며,
//! 논리적 결과는 이 봉투의 `status` 필드로만 구분됩니다.
//! 실패 시 `results`에는 사람이 읽을 수 있는 메시지 문자열이 담깁니다.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 봉투의 논리적 상태 플래그
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// 통일된 응답 봉투
///
/// ```json
/// { "status": "success", "results": { ... } }
/// { "status": "error",   "results": "User with an ID of ... does not exist." }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub status: Status,
    pub results: Value,
}

impl Envelope {
    /// 성공 봉투를 생성합니다.
    ///
    /// `results`에는 레코드, 레코드 목록, 집계 값 또는 안내 문자열이
    /// 올 수 있습니다.
    pub fn success(results: impl Serialize) -> Self {
        Self {
            status: Status::Success,
            results: serde_json::to_value(results).unwrap_or(Value::Null),
        }
    }

    /// 실패 봉투를 생성합니다.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            results: Value::String(message.into()),
        }
    }
}

//! # Application Error Handling System
//!
//! 서비스 전역의 통합 에러 처리 시스템입니다.
//!
//! ## 설계 철학
//!
//! 핸들러 내부에서는 `Result<T, AppError>`로 실패 원인을 타입으로 구분하고,
//! HTTP 경계에서만 문자열로 평탄화합니다. 와이어 계약은 다음과 같습니다:
//!
//! - 모든 실패는 `{status:"error", results:<사람이 읽는 메시지>}` 봉투로 응답
//! - HTTP 상태 코드는 실패 여부와 무관하게 항상 200
//! - 기계가 읽을 수 있는 에러 코드는 노출하지 않음
//!
//! 상태 코드를 200으로 고정하는 것은 이 API의 관측된 계약입니다. 표준
//! 상태 코드(400/404)로 바꾸려면 `ResponseError` 구현만 수정하면 됩니다.
//!
//! ## 에러 분류
//!
//! | AppError | 발생 시나리오 |
//! |----------|---------------|
//! | `Validation` | 필수 필드 누락, 음수 값 등 쓰기 전 검증 실패 |
//! | `NotFound` | 키에 해당하는 레코드 없음 |
//! | `Database` | MongoDB 연결/쿼리 오류 |

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::dto::envelope::Envelope;

/// 애플리케이션 전역 에러 타입
///
/// 발생할 수 있는 모든 실패를 포괄하는 열거형입니다. `thiserror`로
/// `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
/// HTTP 응답(항상 200 + 에러 봉투)으로 자동 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러
    ///
    /// 클라이언트가 제공한 데이터가 스키마 규칙을 만족하지 않을 때
    /// 발생합니다. 메시지는 검증 규칙이 정의한 문자열 그대로 노출됩니다.
    #[error("{0}")]
    Validation(String),

    /// 리소스 찾을 수 없음 에러
    ///
    /// 요청된 키에 해당하는 레코드가 존재하지 않을 때 발생합니다.
    /// 메시지에는 조회에 사용된 키가 포함됩니다.
    #[error("{0}")]
    NotFound(String),

    /// 데이터베이스 관련 에러
    ///
    /// MongoDB 연산 중 발생하는 연결/쿼리 오류를 나타냅니다.
    #[error("Database error: {0}")]
    Database(String),
}

impl actix_web::ResponseError for AppError {
    /// 모든 에러는 HTTP 200으로 응답합니다.
    ///
    /// 실패 신호는 응답 본문의 `status` 필드로만 전달됩니다.
    fn status_code(&self) -> actix_web::http::StatusCode {
        actix_web::http::StatusCode::OK
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 `AppError` 변형을 통일된 에러 봉투로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::Ok().json(Envelope::error(self.to_string()))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 검증 실패를 단일 메시지 문자열로 평탄화합니다.
///
/// `validator`의 필드별 에러 맵에서 메시지들을 모아 하나의 문자열로
/// 합칩니다. 맵 순회 순서가 비결정적이므로 정렬하여 안정적인 출력을
/// 보장합니다.
///
/// # Examples
///
/// ```rust,ignore
/// payload
///     .validate()
///     .map_err(|e| AppError::Validation(validation_message(&e)))?;
/// ```
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .values()
        .flat_map(|field_errors| field_errors.iter())
        .map(|error| {
            error
                .message
                .as_ref()
                .map(|message| message.to_string())
                .unwrap_or_else(|| error.code.to_string())
        })
        .collect();

    messages.sort();
    messages.join(" ")
}

/// JSON 본문 파싱 실패를 에러 봉투로 변환하는 핸들러
///
/// actix의 기본 동작(HTTP 400)을 대신하여, 역직렬화 실패도 다른 실패와
/// 동일한 200 + 에러 봉투 계약을 따르게 합니다.
/// `web::JsonConfig::default().error_handler(...)`에 등록합니다.
pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    AppError::Validation(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_every_error_responds_with_http_200() {
        let errors = [
            AppError::Validation("Path `name` is required.".to_string()),
            AppError::NotFound("User with an ID of 123 does not exist.".to_string()),
            AppError::Database("connection reset".to_string()),
        ];

        for error in errors {
            assert_eq!(
                error.error_response().status(),
                actix_web::http::StatusCode::OK
            );
        }
    }

    #[test]
    fn test_validation_error_display_is_bare_message() {
        let error = AppError::Validation("Path `name` is required.".to_string());

        assert_eq!(error.to_string(), "Path `name` is required.");
    }

    #[test]
    fn test_database_error_display_is_prefixed() {
        let error = AppError::Database("timeout".to_string());

        assert_eq!(error.to_string(), "Database error: timeout");
    }
}

//! HTTP 핸들러 계층
//!
//! 엔드포인트 하나당 저장소 연산 하나를 호출하고, 결과를 공통 응답
//! 봉투로 변환합니다. 핸들러는 `Result<HttpResponse, AppError>`를
//! 반환하며, 에러는 `ResponseError` 구현을 통해 자동으로 200 + 에러
//! 봉투로 렌더링됩니다.
//!
//! # 처리 순서
//!
//! 1. 요청 DTO 검증 (`validator`)
//! 2. 저장소 연산 호출 (`web::Data<dyn ...Store>`)
//! 3. 결과를 응답 DTO로 변환 후 봉투에 포장
//!
//! 검증 실패, 키 불일치, 저장소 오류는 모두 같은 에러 봉투 형태로
//! 평탄화됩니다.

pub mod monsters;
pub mod users;

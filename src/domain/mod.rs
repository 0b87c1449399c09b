//! 도메인 모델 계층
//!
//! 서비스의 핵심 데이터 구조를 정의합니다.
//!
//! - `entities`: MongoDB에 저장되는 레코드 타입 (User, Monster)
//! - `dto`: HTTP 요청/응답 데이터 구조와 공통 응답 봉투
//!
//! 엔티티는 BSON 직렬화 형태(camelCase 필드, `_id`)를 따르고,
//! DTO는 클라이언트와의 JSON 계약을 따릅니다. 두 표현 사이의 변환은
//! `From` 구현으로 처리합니다.

pub mod dto;
pub mod entities;

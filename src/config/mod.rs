//! 서버 및 데이터 설정 관리 모듈
//!
//! 환경 변수 기반의 설정을 관리합니다. 모든 값은 서버 기동 시점에 한 번
//! 읽히며, 이후에는 재검증하지 않습니다.

use std::env;

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Returns
    ///
    /// 포트 번호. 기본값: 8000
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .unwrap_or(8000)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Returns
    ///
    /// 호스트 주소. 기본값: "localhost"
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "localhost".to_string())
    }
}

/// 데이터 저장소 설정
pub struct DataConfig;

impl DataConfig {
    /// MongoDB 연결 URI를 반환합니다.
    ///
    /// # Returns
    ///
    /// 연결 URI. 기본값: "mongodb://localhost:27017"
    ///
    /// # Environment Variables
    ///
    /// - `DB_URI`: MongoDB 연결 문자열
    pub fn db_uri() -> String {
        env::var("DB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// 사용할 데이터베이스 이름을 반환합니다.
    ///
    /// # Returns
    ///
    /// 데이터베이스 이름. 기본값: "hapi"
    ///
    /// # Environment Variables
    ///
    /// - `DATABASE_NAME`: 데이터베이스 이름
    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "hapi".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8000);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "localhost");
        }
    }

    #[test]
    fn test_data_config_defaults() {
        if env::var("DB_URI").is_err() {
            assert_eq!(DataConfig::db_uri(), "mongodb://localhost:27017");
        }

        if env::var("DATABASE_NAME").is_err() {
            assert_eq!(DataConfig::database_name(), "hapi");
        }
    }
}

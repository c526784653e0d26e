//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 연결 풀링과 부팅 시점의 연결 검증을 제공합니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::db::Database;
//! use crate::core::registry::ServiceLocator;
//!
//! #[actix_web::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let database = Database::new().await?;
//!     ServiceLocator::set(std::sync::Arc::new(database));
//!     ServiceLocator::initialize_all().await?;
//!     Ok(())
//! }
//! ```

use mongodb::{Client, options::ClientOptions};
use log::info;

use crate::config::DatabaseConfig;

/// MongoDB 데이터베이스 연결 래퍼
///
/// MongoDB 클라이언트와 데이터베이스 연결을 관리하며,
/// 리포지토리 계층에서 데이터베이스 작업을 위한 기본 인터페이스를 제공합니다.
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 새 MongoDB 데이터베이스 연결을 생성합니다.
    ///
    /// [`DatabaseConfig`]에서 연결 정보를 읽어와 MongoDB 클라이언트를 초기화하고,
    /// `ping` 커맨드로 연결 상태를 검증한 후 Database 인스턴스를 반환합니다.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let mongodb_uri = DatabaseConfig::mongodb_uri();
        let database_name = DatabaseConfig::database_name();

        let mut client_options = ClientOptions::parse(&mongodb_uri).await?;

        // 애플리케이션 이름 설정 (모니터링 및 로깅에 유용)
        client_options.app_name = Some("backoffice_service".to_string());

        let client = Client::with_options(client_options)?;

        // 연결 테스트
        client
            .database(&database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name,
        })
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    ///
    /// 리포지토리에서 컬렉션에 접근할 때 사용됩니다.
    ///
    /// ```rust,ignore
    /// let invoices = database.get_database().collection::<Invoice>("invoices");
    /// ```
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// MongoDB 클라이언트 인스턴스를 반환합니다.
    ///
    /// 세션 관리나 트랜잭션 등 클라이언트 레벨의 작업이 필요한 경우 사용됩니다.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}

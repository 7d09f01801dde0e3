//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`users::UserRepository`] 트레이트로 저장소 계약을 정의하고,
//! MongoDB 구현과 테스트용 인메모리 구현을 함께 제공합니다.
//! 서비스 계층은 트레이트에만 의존하므로 테스트에서 저장소를 교체할 수 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{UserRepository, MongoUserRepository};
//!
//! let user_repo: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(&database));
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

pub mod users;

//! 애플리케이션 에러 타입과 변환 모듈
//!
//! [`AppError`](errors::AppError)와 [`AppResult`](errors::AppResult),
//! 저장소 에러 변환용 [`StoreErrorExt`](errors::StoreErrorExt)를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::errors::{AppError, AppResult, StoreErrorExt};
//!
//! async fn find_user(id: &str) -> AppResult<User> {
//!     repo.find_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
//! }
//! ```

pub mod errors;

pub use errors::*;

//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티들을 정의하는 모듈입니다.
//! 소프트 삭제 플래그와 닫힌 역할 열거형을 갖는 User 엔티티를 포함합니다.
//!
//! # 주요 구성 요소
//!
//! ### User Entity
//! - **역할**: `student` / `instructor` / `admin` 닫힌 열거형
//! - **소프트 삭제**: `is_deleted` 플래그 전환, 물리 삭제 없음
//! - **비밀번호**: 해시만 저장, 평문은 저장소에 도달하지 않음
//!
//! ### UserSummary
//! - 검색 결과용 축소 뷰 (비밀번호 해시 필드 자체가 없음)
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::{User, UserRole};
//!
//! let user = User::new(
//!     "John Doe".to_string(),
//!     "john@example.com".to_string(),
//!     password_hash,
//!     UserRole::Student,
//! );
//! ```

pub mod user;

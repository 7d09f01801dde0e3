//! 사용자 관리 서비스 모듈
//!
//! 사용자 생명주기와 관련된 비즈니스 로직을 담당하는 서비스를 제공합니다.
//! 목록/검색/단건 조회, 생성, 부분 수정, 소프트 삭제를 구현합니다.
//!
//! # Features
//!
//! - 사용자 목록 조회 및 페이지네이션 검색
//! - 사용자 생성 (이메일 중복 거부, 빈 비밀번호 거부)
//! - 부분 수정 및 소프트 삭제
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱 (리포지토리 생성/수정 경로에서 수행)
//! - 이메일 중복 방지 (생성 경로)
//! - 입력값 검증
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::user_service::UserService;
//! use crate::domain::dto::users::request::CreateUserRequest;
//!
//! let user_service = UserService::new(user_repo);
//! let request = CreateUserRequest { /* ... */ };
//! let response = user_service.create_user(request).await?;
//! ```

pub mod user_service;

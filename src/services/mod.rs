//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 핸들러와 리포지토리 사이에서 비즈니스 규칙을 적용하는 서비스들을 제공합니다.
//! 서비스는 `main`에서 명시적으로 조립되어 `actix_web::web::Data`로 공유되며,
//! 도메인별로 사용자 관리와 인증 기능을 담당합니다.
//!
//! # Features
//!
//! - 사용자 생명주기 관리 (생성, 조회, 검색, 수정, 소프트 삭제)
//! - 이메일/비밀번호 회원가입 및 로그인
//! - 리포지토리 트레잇(`Arc<dyn UserRepository>`) 기반의 명시적 의존성 주입
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::{users::user_service::UserService, auth::AuthService};
//!
//! let user_service = UserService::new(user_repo.clone());
//! let auth_service = AuthService::new(user_repo);
//! ```

pub mod users;
pub mod auth;

//! 인증 서비스 모듈
//!
//! 이메일/비밀번호 기반의 회원가입과 로그인을 담당하는 서비스를 제공합니다.
//!
//! # Features
//!
//! - 회원가입 (역할 생략 시 `student`)
//! - 로그인 (bcrypt 해시 검증, 플레이스홀더 토큰 반환)
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱
//! - 실패 원인을 구분할 수 없는 단일 로그인 실패 메시지
//! - 더미 해시 비교로 타이밍 차이 제거
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::AuthService;
//!
//! let auth_service = AuthService::new(user_repo);
//! let response = auth_service.login(request).await?;
//! println!("token: {}", response.token);
//! ```

pub mod auth_service;

pub use auth_service::*;

//! 사용자 계정 서비스 백엔드
//!
//! Rust 기반의 사용자 계정 관리 서비스입니다.
//! 사용자 CRUD + 검색, 소프트 삭제, 그리고 이메일/비밀번호 기반의
//! 최소 인증(회원가입/로그인)을 제공합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 계정 생성, 조회, 검색, 부분 수정
//! - **소프트 삭제**: 레코드를 지우지 않고 `is_deleted` 플래그로 관리
//! - **검색**: 이름/이메일 부분 일치, 역할/삭제 플래그 필터, 페이지네이션
//! - **인증**: bcrypt 해시 검증 기반 회원가입/로그인
//! - **명시적 DI**: `main`에서 조립해 `web::Data`로 공유
//! - **MongoDB**: 사용자 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스 (trait + Mongo/인메모리 구현)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use account_service_backend::db::Database;
//! use account_service_backend::repositories::users::{MongoUserRepository, UserRepository};
//! use account_service_backend::services::users::user_service::UserService;
//! use account_service_backend::services::auth::AuthService;
//!
//! // 저장소와 서비스를 명시적으로 조립
//! let database = Database::new().await?;
//! let user_repo: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(&database));
//!
//! let user_service = UserService::new(user_repo.clone());
//! let auth_service = AuthService::new(user_repo);
//!
//! // 사용자 생성 및 로그인
//! let user = user_service.create_user(request).await?;
//! let login = auth_service.login(login_request).await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod seed;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;

//! # Domain Entities Module
//!
//! 이 모듈은 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! Spring Framework의 JPA Entity와 유사한 역할을 하며, MongoDB 문서와 직접 매핑되는
//! 데이터 구조체들을 포함합니다.
//!
//! ## 주요 역할
//!
//! - **도메인 모델링**: 비즈니스 도메인의 핵심 개념들을 Rust 구조체로 표현
//! - **데이터베이스 매핑**: MongoDB `users` 컬렉션과 1:1 대응되는 문서 구조 정의
//! - **타입 안전성**: 컴파일 타임에 데이터 일관성 보장
//! - **직렬화/역직렬화**: BSON ↔ Rust 구조체 변환 지원
//!
//! ## 아키텍처 특징
//!
//! ### 계층 구조
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (핵심 비즈니스 엔티티)
//! └── dto/          ← 데이터 전송 객체
//! ```
//!
//! ### MongoDB 통합
//! 모든 엔티티는 다음 특징을 가집니다:
//! - **BSON 직렬화**: `serde`와 `bson` 크레이트를 통한 자동 변환
//! - **ObjectId 지원**: MongoDB의 `_id` 필드와 매핑
//! - **스키마 진화**: `#[serde(default)]`로 레거시 문서 호환성 유지
//!
//! ## Spring Framework와의 비교
//!
//! | Spring JPA Entity | Rust Domain Entity |
//! |------------------|-------------------|
//! | `@Entity` | `#[derive(Serialize, Deserialize)]` |
//! | `@Id` | `#[serde(rename = "_id")]` |
//! | `@Enumerated(EnumType.STRING)` | `#[serde(rename_all = "lowercase")]` enum |
//! | `@CreatedDate` | `created_at: DateTime` |
//! | `@SQLDelete` (soft delete) | `is_deleted` 플래그 + `mark_deleted()` |
//! | Bean Validation | validator crate (DTO 계층) |
//!
//! ## 엔티티 설계 원칙
//!
//! ### 1. 소프트 삭제
//! 삭제는 항상 플래그 전환입니다. 물리 삭제 경로는 존재하지 않으며,
//! 삭제된 레코드도 ID 조회에는 그대로 반환됩니다.
//!
//! ### 2. 스키마 진화
//! ```rust,ignore
//! #[derive(Serialize, Deserialize)]
//! pub struct User {
//!     // is_deleted 필드가 없는 기존 문서는 false로 역직렬화
//!     #[serde(default)]
//!     pub is_deleted: bool,
//! }
//! ```
//!
//! ### 3. 비즈니스 규칙 캡슐화
//! 상태 전이는 메서드로만 수행합니다 (`User::new`, `mark_deleted`).
//! 검증 규칙은 DTO 계층에, 해싱은 리포지토리 계층에 둡니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! entities/
//! ├── mod.rs          ← 이 파일 (전체 엔티티 모듈 문서)
//! └── users/          ← 사용자 관련 엔티티
//!     ├── mod.rs
//!     └── user.rs     ← User 엔티티, UserRole, UserSummary
//! ```
//!
//! ## 주의사항
//!
//! - **순환 참조 금지**: 엔티티 간 직접 참조보다는 ID 참조 사용
//! - **민감 정보**: `password_hash`는 엔티티에만 존재하고 DTO 변환에서 제거
//! - **인덱스 설계**: 이메일 조회와 생성일 정렬 인덱스는 시작 시점에 생성

pub mod users;

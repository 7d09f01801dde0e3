//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 비즈니스 객체와 API 계약을 담당합니다.
//! Spring Framework의 Domain Layer와 동일한 역할을 수행하며,
//! Domain-Driven Design (DDD) 원칙에 따라 설계되었습니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 핵심 비즈니스 객체 (JPA Entity와 유사)
//! └── DTOs          - 데이터 전송 객체 (Request/Response)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@Entity` | `entities` 모듈 | 비즈니스 핵심 객체 |
//! | `@RequestBody` / `@ResponseBody` | `dto` 모듈 | API 계약 정의 |
//! | `@Embeddable` | Struct 컴포지션 | 값 객체 표현 |
//! | `@Valid` | `validator` 검증 | 데이터 유효성 검사 |
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! 비즈니스의 핵심 개념을 나타내는 영속 가능한 객체들입니다.
//! Spring JPA의 `@Entity` 클래스와 동일한 역할을 수행합니다.
//!
//! #### 특징:
//! - **영속성**: MongoDB `users` 컬렉션에 저장되는 도메인 객체
//! - **비즈니스 규칙**: 소프트 삭제, 타임스탬프 갱신 등 상태 전이 메서드
//! - **식별성**: 저장소가 할당하는 `ObjectId`를 통한 객체 식별
//!
//! #### 예제:
//! ```rust,ignore
//! use serde::{Deserialize, Serialize};
//! use mongodb::bson::{DateTime, oid::ObjectId};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct User {
//!     #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
//!     pub id: Option<ObjectId>,
//!     pub name: String,
//!     pub email: String,
//!     pub password_hash: String,
//!     pub role: UserRole,
//!     #[serde(default)]
//!     pub is_deleted: bool,
//!     pub created_at: DateTime,
//!     pub updated_at: DateTime,
//! }
//!
//! impl User {
//!     /// 도메인 비즈니스 로직: 소프트 삭제
//!     pub fn mark_deleted(&mut self) {
//!         self.is_deleted = true;
//!         self.updated_at = DateTime::now();
//!     }
//! }
//! ```
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! API 경계의 요청/응답 구조를 정의합니다. 엔티티와 분리되어 있어
//! 내부 저장 구조 변경이 API 계약에 영향을 주지 않습니다.
//!
//! #### 특징:
//! - **검증 내장**: validator derive로 형식 규칙 선언
//! - **네이밍 변환**: 저장소 snake_case ↔ API camelCase
//! - **보안**: 비밀번호 해시는 응답 타입에 필드 자체가 없음
//!
//! ## 자주 발생하는 문제
//!
//! #### 1. 레거시 문서 역직렬화 실패
//! ```text
//! Error: missing field `is_deleted`
//! 해결: #[serde(default)] 또는 Option<T> 사용
//! ```
//!
//! #### 2. ObjectId 문자열 변환
//! ```text
//! Error: invalid ObjectId string
//! 해결: 조회 경로에서는 형식 오류를 "없음"(None)으로 취급
//! ```
//!
//! #### 3. 타입 변환 오류
//! ```text
//! Error: the trait `From<X>` is not implemented for `Y`
//! 해결: 적절한 From/Into trait 구현
//! ```
//!
//! ## 베스트 프랙티스
//!
//! 1. **작은 인터페이스**: 각 DTO는 특정 용도에만 최적화
//! 2. **불변성 우선**: 상태 전이는 명시적 메서드로만 수행
//! 3. **명시적 변환**: From/Into trait을 통한 타입 변환
//! 4. **문서화**: 각 필드와 메서드에 명확한 문서 제공
//! 5. **테스트 작성**: 도메인 로직에 대한 충분한 단위 테스트

pub mod dto;
pub mod entities;

pub use dto::*;
pub use entities::*;

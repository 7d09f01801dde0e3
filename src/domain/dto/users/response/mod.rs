//! # 사용자 관련 응답 DTO 모듈
//!
//! 이 모듈은 사용자 도메인과 관련된 HTTP 응답 데이터 전송 객체(DTO)들을 정의합니다.
//! Spring Boot의 `@ResponseBody`와 유사한 역할을 하며, 비즈니스 로직 처리 결과를
//! 클라이언트에게 안전하고 일관된 형태로 전달하는 역할을 담당합니다.
//!
//! ## 설계 철학
//!
//! - **데이터 은닉**: 비밀번호 해시는 어떤 응답에도 포함되지 않음
//! - **일관성**: 모든 응답이 camelCase 네이밍 컨벤션을 따름
//! - **확장성**: 새로운 필드 추가 시 하위 호환성 유지
//! - **타입 안전성**: 컴파일 타임에 응답 구조 검증
//!
//! ## 응답 DTO 계층 구조
//!
//! ### 기본 사용자 응답
//! - `UserResponse` - 표준 사용자 정보 응답
//! - 단건 조회, 생성, 수정, 삭제 결과에서 사용
//!
//! ### 검색 응답
//! - `UserSummaryResponse` - 축소 필드 집합의 검색 결과 항목
//! - `SearchUsersResponse` - 페이지 정보를 포함한 검색 결과
//!
//! ### 인증 관련 응답
//! - `LoginResponse` - 토큰을 포함한 로그인 응답
//!
//! ## JSON 응답 예제
//!
//! ### 표준 사용자 응답
//! ```json
//! {
//!   "id": "507f1f77bcf86cd799439011",
//!   "name": "John Doe",
//!   "email": "john.doe@example.com",
//!   "role": "student",
//!   "isDeleted": false,
//!   "createdAt": "2024-06-01T10:00:00Z",
//!   "updatedAt": "2024-06-07T12:00:00Z"
//! }
//! ```
//!
//! ### 검색 응답
//! ```json
//! {
//!   "totalCount": 25,
//!   "totalPages": 3,
//!   "page": 1,
//!   "limit": 10,
//!   "data": [ /* UserSummaryResponse 객체 배열 */ ]
//! }
//! ```
//!
//! ## 보안 고려사항
//!
//! - **비밀번호 제외**: 엔티티 → DTO 변환 단계에서 해시 제거
//! - **검색 프로젝션**: 검색 경로는 저장소 프로젝션 단계에서 이미 해시 제외
//! - **로그 안전**: 민감한 정보는 로그에 출력되지 않도록 `Debug` 구현 주의

pub mod user_response;

pub use user_response::{LoginResponse, SearchUsersResponse, UserResponse, UserSummaryResponse};

//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 부팅 과정에서 사용되는 터미널 출력 함수들을 제공합니다.
//! 박스 형태의 제목, 진행 단계 표시, 하위 작업 상태를 시각적으로 표현합니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// Unicode 박스 문자를 사용하여 시각적으로 눈에 띄는 제목을 출력합니다.
/// 텍스트는 자동으로 중앙 정렬됩니다.
///
/// # Arguments
///
/// * `title` - 출력할 제목 문자열
///
/// # Examples
///
/// ```rust,ignore
/// use crate::utils::display_terminal::print_boxed_title;
///
/// print_boxed_title("Account Service Started");
/// ```
///
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║              Account Service Started             ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);  // ^49로 49칸 중앙 정렬
    println!("╚{}╝", border);
}

/// 진행 단계 시작을 표시합니다
///
/// 부팅 단계가 시작되었음을 화살표 기호와 함께 출력합니다.
///
/// # Arguments
///
/// * `step` - 단계 번호 (1부터 시작)
/// * `description` - 단계 설명
///
/// # Examples
///
/// ```rust,ignore
/// use crate::utils::display_terminal::print_step_start;
///
/// print_step_start(1, "Connecting to MongoDB");
/// ```
///
/// Output:
/// ```text
/// → Step 1: Connecting to MongoDB
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 표시합니다
///
/// 부팅 단계가 완료되었음을 체크 표시와 함께 출력합니다.
///
/// # Arguments
///
/// * `step` - 완료된 단계 번호
/// * `description` - 단계 설명
///
/// # Examples
///
/// ```rust,ignore
/// use crate::utils::display_terminal::print_step_complete;
///
/// print_step_complete(1, "MongoDB connected");
/// ```
///
/// Output:
/// ```text
/// ✓ Step 1: MongoDB connected
/// ```
pub fn print_step_complete(step: u8, description: &str) {
    println!("✓ Step {}: {}", step, description);
}

/// 하위 작업의 상태를 표시합니다
///
/// 들여쓰기된 트리 구조로 하위 작업의 진행 상황을 출력합니다.
///
/// # Arguments
///
/// * `name` - 하위 작업의 이름
/// * `status` - 현재 상태 또는 결과
///
/// # Examples
///
/// ```rust,ignore
/// use crate::utils::display_terminal::print_sub_task;
///
/// print_sub_task("users 컬렉션 인덱스", "OK");
/// print_sub_task("시드 데이터", "Skipped");
/// ```
///
/// Output:
/// ```text
///    ├─ users 컬렉션 인덱스: OK
///    ├─ 시드 데이터: Skipped
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

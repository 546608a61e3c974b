//! 기동 로그 포맷팅 유틸리티
//!
//! 서비스 레지스트리 초기화와 마이그레이션 실행 과정을 눈에 띄게 출력합니다.
//! 모든 출력은 `log` 매크로를 거치므로 `RUST_LOG` 설정을 따릅니다.

use log::info;

const BOX_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                🔄 SERVICE REGISTRY                ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    let border = "═".repeat(BOX_WIDTH);
    info!("╔{}╗", border);
    info!("║{:^width$}║", title, width = BOX_WIDTH - 1);
    info!("╚{}╝", border);
}

/// 컴포넌트 하나의 상태를 트리 형태로 출력합니다
///
/// ```text
///    ├─ integration_repository: created
/// ```
pub fn print_component(name: &str, status: &str) {
    info!("   ├─ {}: {}", name, status);
}

/// 레지스트리 초기화 요약
pub fn print_registry_summary(repositories: usize, services: usize) {
    info!("   📦 Repositories: {}", repositories);
    info!("   🔧 Services: {}", services);
    info!("   🚀 Total Components: {}", repositories + services);
}

/// 마이그레이션 한 건의 적용 결과
pub fn print_migration_step(version: &str, description: &str, applied: bool) {
    let mark = if applied { "✓" } else { "·" };
    info!("   {} {} {}", mark, version, description);
}

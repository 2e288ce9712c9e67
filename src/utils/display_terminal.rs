//! 터미널 출력 포맷팅 유틸리티
//!
//! 부팅 과정(컴포넌트 초기화, 서버 시작)에서 사용하는 출력 함수들입니다.

const BOX_WIDTH: usize = 50;

pub fn print_boxed_title(title: &str) {
    let border = "═".repeat(BOX_WIDTH);

    println!("╔{}╗", border);
    println!("║{:^width$}║", title, width = BOX_WIDTH - 1);
    println!("╚{}╝", border);
}

pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

pub fn print_final_summary(repositories: usize, services: usize) {
    println!();
    print_boxed_title("🎉 COMPONENTS READY");
    println!("   📦 Repositories: {}", repositories);
    println!("   🔧 Services: {}", services);
    println!();
}

/// 서버 바인딩 정보
pub fn print_server_banner(bind_address: &str, storage: &str, workers: usize) {
    print_boxed_title("📚 BOOK VILLAGE SERVER");
    println!("   🌐 Listening: http://{}", bind_address);
    println!("   💾 Storage: {}", storage);
    println!("   🧵 Workers: {}", workers);
    println!("   📍 Health check: http://{}/health", bind_address);
    println!();
}

//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 기동 시 배너와 엔드포인트 목록을 출력합니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║              SSOJet Gallery Backend              ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    for line in boxed_title_lines(title) {
        println!("{}", line);
    }
}

fn boxed_title_lines(title: &str) -> [String; 3] {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    [
        format!("╔{}╗", border),
        format!("║{:^50}║", title),
        format!("╚{}╝", border),
    ]
}

/// `(메서드, 경로, 설명)` 목록을 정렬된 표로 만듭니다.
pub fn format_route_table(base_url: &str, routes: &[(&str, &str, &str)]) -> Vec<String> {
    let method_width = routes.iter().map(|(m, _, _)| m.len()).max().unwrap_or(0);
    let path_width = routes
        .iter()
        .map(|(_, p, _)| base_url.len() + p.len())
        .max()
        .unwrap_or(0);

    routes
        .iter()
        .map(|(method, path, description)| {
            format!(
                "  {:<mw$}  {:<pw$}  {}",
                method,
                format!("{}{}", base_url, path),
                description,
                mw = method_width,
                pw = path_width
            )
        })
        .collect()
}

/// 엔드포인트 목록을 출력합니다.
pub fn print_route_table(base_url: &str, routes: &[(&str, &str, &str)]) {
    for line in format_route_table(base_url, routes) {
        println!("{}", line);
    }
}

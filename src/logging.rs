// ==========================================
// 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 评分引擎的逐条计分细节挂在 debug 级别,
// 默认只放行本 crate 的 info 及以上
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 默认过滤器: 外部依赖 warn,本引擎 info
const DEFAULT_FILTER: &str = "warn,perf_scoring_engine=info";

/// 初始化日志系统
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器（默认: warn,perf_scoring_engine=info）
///   例如: RUST_LOG=perf_scoring_engine=debug 查看模式选择与退化场景日志
///
/// # 示例
/// ```no_run
/// use perf_scoring_engine::logging;
/// logging::init();
/// ```
pub fn init() {
    // 从环境变量读取日志级别，默认只放行本 crate 的 info
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // 配置日志格式
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// 初始化测试环境的日志系统
///
/// 放开本 crate 的 debug 级别，便于核对计分分支
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("perf_scoring_engine=debug"))
        .with_test_writer()
        .try_init();
}

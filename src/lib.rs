// ==========================================
// 战略绩效管理系统 - 绩效评分引擎核心库
// ==========================================
// 职责: 将周期测量录入换算为指标达成百分比,
//       并沿 指标 → 目标 → 战略目标 两级层级按权重上卷
// 红线: 引擎不取数、不缓存、不落库; 权重违规只上报不拦截
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 计分业务规则
pub mod engine;

// 快照装载 - 宿主侧输入
pub mod snapshot;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    CalculationMethod, ContributionWeight, EntryStatus, MeasurementFrequency, ProgressBand,
};

// 领域实体
pub use domain::{DataEntry, Goal, Indicator, Objective};

// 引擎
pub use engine::{
    ContributionWeightValidator, GoalAggregator, IndicatorScorer, ObjectiveAggregator,
    ProgressClassifier, WeightValidation,
};

// 快照
pub use snapshot::{PlanSnapshot, SnapshotError};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "战略绩效管理系统";

// ==========================================
// 战略绩效管理系统 - 领域模型层
// ==========================================
// 依据: Perf_Engine_Design_v1.2.md - 1. 数据模型
// ==========================================
// 职责: 定义领域实体与类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod indicator;
pub mod plan;
pub mod types;

// 重导出核心类型
pub use indicator::{DataEntry, Indicator};
pub use plan::{Goal, Objective};
pub use types::{
    CalculationMethod, ContributionWeight, EntryStatus, MeasurementFrequency, ProgressBand,
};

// ==========================================
// 战略绩效管理系统 - 规划层级实体
// ==========================================
// 依据: Perf_Engine_Design_v1.2.md - 1. 数据模型
// 层级: 战略目标 (Objective) → 目标 (Goal) → 指标 (Indicator)
// 归属关系用外键字段表达,由引擎按需过滤
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Goal - 目标
// ==========================================
// 一组指标的战略分组,可对指标声明贡献权重
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// 目标标识
    pub goal_id: String,

    /// 所属战略目标标识
    pub objective_id: String,

    /// 目标名称
    pub name: String,
}

// ==========================================
// Objective - 战略目标
// ==========================================
// 规划层级顶层,聚合若干目标; 该层级不存在权重
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Objective {
    /// 战略目标标识
    pub objective_id: String,

    /// 战略目标名称
    pub name: String,
}

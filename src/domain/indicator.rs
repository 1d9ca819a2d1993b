// ==========================================
// 战略绩效管理系统 - 指标与数据录入实体
// ==========================================
// 依据: Perf_Engine_Design_v1.2.md - 1. 数据模型
// 职责: 定义指标主数据与周期测量录入
// 红线: 实体只承载快照数据,不含引擎逻辑
// ==========================================

use crate::domain::types::{
    CalculationMethod, ContributionWeight, EntryStatus, MeasurementFrequency,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// Indicator - 指标主数据
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Indicator {
    /// 指标标识
    pub indicator_id: String,

    /// 所属目标标识
    pub goal_id: String,

    /// 指标名称
    pub name: String,

    /// 基准值（测量起点,缺省视为0）
    pub baseline_value: Option<f64>,

    /// 组织级目标值
    pub target_value: Option<f64>,

    /// 年度目标值覆写,存在时优先于 target_value 参与计分
    pub yearly_target: Option<f64>,

    /// 计算方式
    pub calculation_method: CalculationMethod,

    /// 测量频率（仅百分比类公式使用）
    #[serde(default)]
    pub measurement_frequency: MeasurementFrequency,

    /// 贡献权重 - 本指标在所属目标得分中的声明份额 (0-100)
    #[serde(default)]
    pub contribution_weight: ContributionWeight,
}

impl Indicator {
    /// 解析计分用目标值: 年度覆写优先,缺失或为0视为无目标
    ///
    /// 注意: 年度覆写显式为0时同样判定为无目标,
    /// 不回退到组织级目标值（覆写语义优先）
    pub fn effective_target(&self) -> Option<f64> {
        let target = self.yearly_target.or(self.target_value)?;
        if target == 0.0 {
            None
        } else {
            Some(target)
        }
    }

    /// 计分用基准值,缺省为0
    pub fn baseline(&self) -> f64 {
        self.baseline_value.unwrap_or(0.0)
    }
}

// ==========================================
// DataEntry - 周期测量录入
// ==========================================
// 一条录入 = 一个测量期的一个数值 + 审批状态
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataEntry {
    /// 录入标识
    pub entry_id: String,

    /// 所属指标标识
    pub indicator_id: String,

    /// 测量期（期末日期）
    pub period_date: NaiveDate,

    /// 本期测量值
    pub value: f64,

    /// 审批状态
    pub status: EntryStatus,
}

impl DataEntry {
    /// 该录入是否属于指定指标且参与计分
    pub fn qualifies_for(&self, indicator_id: &str) -> bool {
        self.indicator_id == indicator_id && self.status.is_scorable()
    }
}

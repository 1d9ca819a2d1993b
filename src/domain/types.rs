// ==========================================
// 战略绩效管理系统 - 领域类型定义
// ==========================================
// 依据: Perf_Engine_Design_v1.2.md - 1. 数据模型
// 红线: 计算方式是封闭枚举,别名在边界处归一化
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 计算方式 (Calculation Method)
// ==========================================
// 六种公式变体,决定如何将累计录入值换算为达成百分比
// 反序列化经由 From<String> 归一化历史别名
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum CalculationMethod {
    CumulativeIncreasing,  // 累计递增
    CumulativeDecreasing,  // 累计递减
    PercentageIncreasing,  // 百分比递增
    PercentageDecreasing,  // 百分比递减
    MaintenanceIncreasing, // 维持递增
    MaintenanceDecreasing, // 维持递减(逆比,越少越好)
}

impl CalculationMethod {
    /// 从字符串归一化计算方式
    ///
    /// 历史数据中存在同义别名（如 `cumulative` 与 `cumulative_increasing`）,
    /// 统一在此处归一化为规范变体。
    ///
    /// 边界处理: 无法识别的取值回退到累计递增（软失败）,
    /// 同时输出 warn 日志作为上游数据质量信号。
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "cumulative_increasing" | "cumulative" | "increasing" => {
                CalculationMethod::CumulativeIncreasing
            }
            "cumulative_decreasing" | "decreasing" => CalculationMethod::CumulativeDecreasing,
            "percentage_increasing" => CalculationMethod::PercentageIncreasing,
            "percentage_decreasing" => CalculationMethod::PercentageDecreasing,
            "maintenance_increasing" | "percentage" | "maintenance" => {
                CalculationMethod::MaintenanceIncreasing
            }
            "maintenance_decreasing" => CalculationMethod::MaintenanceDecreasing,
            other => {
                tracing::warn!(method = other, "无法识别的计算方式,回退到累计递增");
                CalculationMethod::CumulativeIncreasing
            }
        }
    }
}

impl From<String> for CalculationMethod {
    fn from(s: String) -> Self {
        CalculationMethod::from_str(&s)
    }
}

impl fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculationMethod::CumulativeIncreasing => write!(f, "CUMULATIVE_INCREASING"),
            CalculationMethod::CumulativeDecreasing => write!(f, "CUMULATIVE_DECREASING"),
            CalculationMethod::PercentageIncreasing => write!(f, "PERCENTAGE_INCREASING"),
            CalculationMethod::PercentageDecreasing => write!(f, "PERCENTAGE_DECREASING"),
            CalculationMethod::MaintenanceIncreasing => write!(f, "MAINTENANCE_INCREASING"),
            CalculationMethod::MaintenanceDecreasing => write!(f, "MAINTENANCE_DECREASING"),
        }
    }
}

// ==========================================
// 测量频率 (Measurement Frequency)
// ==========================================
// 仅百分比类公式使用,用于把累计值换算成期均值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum MeasurementFrequency {
    Monthly,    // 月度
    Quarterly,  // 季度
    SemiAnnual, // 半年度
    Annual,     // 年度
}

impl MeasurementFrequency {
    /// 年内测量期数: 月度12 / 季度4 / 半年度2 / 年度1
    pub fn period_count(&self) -> u32 {
        match self {
            MeasurementFrequency::Monthly => 12,
            MeasurementFrequency::Quarterly => 4,
            MeasurementFrequency::SemiAnnual => 2,
            MeasurementFrequency::Annual => 1,
        }
    }

    /// 从字符串归一化测量频率
    ///
    /// 边界处理: 无法识别的取值视为年度（期数1,不缩放）
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "monthly" => MeasurementFrequency::Monthly,
            "quarterly" => MeasurementFrequency::Quarterly,
            "semi_annual" | "semiannual" => MeasurementFrequency::SemiAnnual,
            "annual" | "yearly" => MeasurementFrequency::Annual,
            _ => MeasurementFrequency::Annual,
        }
    }
}

impl From<String> for MeasurementFrequency {
    fn from(s: String) -> Self {
        MeasurementFrequency::from_str(&s)
    }
}

impl Default for MeasurementFrequency {
    fn default() -> Self {
        MeasurementFrequency::Annual
    }
}

impl fmt::Display for MeasurementFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasurementFrequency::Monthly => write!(f, "MONTHLY"),
            MeasurementFrequency::Quarterly => write!(f, "QUARTERLY"),
            MeasurementFrequency::SemiAnnual => write!(f, "SEMI_ANNUAL"),
            MeasurementFrequency::Annual => write!(f, "ANNUAL"),
        }
    }
}

// ==========================================
// 录入状态 (Entry Status)
// ==========================================
// 只有已提交/已审批的录入参与计分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryStatus {
    Draft,     // 草稿
    Submitted, // 已提交
    Approved,  // 已审批
    Rejected,  // 已驳回
}

impl EntryStatus {
    /// 是否参与计分
    pub fn is_scorable(&self) -> bool {
        matches!(self, EntryStatus::Submitted | EntryStatus::Approved)
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryStatus::Draft => write!(f, "DRAFT"),
            EntryStatus::Submitted => write!(f, "SUBMITTED"),
            EntryStatus::Approved => write!(f, "APPROVED"),
            EntryStatus::Rejected => write!(f, "REJECTED"),
        }
    }
}

// ==========================================
// 贡献权重 (Contribution Weight)
// ==========================================
// 红线: "未设置"与"显式为0"不是同一件事,
// 用和类型区分,避免 0 被当作未设置静默处理
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum ContributionWeight {
    Unassigned,    // 未设置
    Assigned(f64), // 已分配份额 (0-100)
}

impl ContributionWeight {
    /// 参与加权聚合的有效权重
    ///
    /// 只有已设置且大于0的权重才有效; 显式为0视为"已设置但不参与"
    pub fn effective(&self) -> Option<f64> {
        match self {
            ContributionWeight::Assigned(w) if *w > 0.0 => Some(*w),
            _ => None,
        }
    }

    /// 是否已设置（含显式为0）
    pub fn is_assigned(&self) -> bool {
        matches!(self, ContributionWeight::Assigned(_))
    }
}

impl Default for ContributionWeight {
    fn default() -> Self {
        ContributionWeight::Unassigned
    }
}

impl From<Option<f64>> for ContributionWeight {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(w) => ContributionWeight::Assigned(w),
            None => ContributionWeight::Unassigned,
        }
    }
}

impl From<ContributionWeight> for Option<f64> {
    fn from(value: ContributionWeight) -> Self {
        match value {
            ContributionWeight::Assigned(w) => Some(w),
            ContributionWeight::Unassigned => None,
        }
    }
}

impl fmt::Display for ContributionWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContributionWeight::Unassigned => write!(f, "UNASSIGNED"),
            ContributionWeight::Assigned(w) => write!(f, "{}", w),
        }
    }
}

// ==========================================
// 绩效区间 (Progress Band)
// ==========================================
// 顺序: Critical < AtRisk < Watch < NearTarget < OnTrack < Exceptional
// 指标/目标/战略目标三级得分统一使用
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgressBand {
    Critical,    // 危急
    AtRisk,      // 风险
    Watch,       // 关注
    NearTarget,  // 接近目标
    OnTrack,     // 达标
    Exceptional, // 卓越
}

impl ProgressBand {
    /// 对应的 i18n 标签键
    pub fn label_key(&self) -> &'static str {
        match self {
            ProgressBand::Critical => "band.critical",
            ProgressBand::AtRisk => "band.at_risk",
            ProgressBand::Watch => "band.watch",
            ProgressBand::NearTarget => "band.near_target",
            ProgressBand::OnTrack => "band.on_track",
            ProgressBand::Exceptional => "band.exceptional",
        }
    }
}

impl fmt::Display for ProgressBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressBand::Critical => write!(f, "critical"),
            ProgressBand::AtRisk => write!(f, "at-risk"),
            ProgressBand::Watch => write!(f, "watch"),
            ProgressBand::NearTarget => write!(f, "near-target"),
            ProgressBand::OnTrack => write!(f, "on-track"),
            ProgressBand::Exceptional => write!(f, "exceptional"),
        }
    }
}

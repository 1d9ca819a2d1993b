// ==========================================
// 战略绩效管理系统 - 贡献权重校验引擎
// ==========================================
// 依据: Perf_Engine_Design_v1.2.md - 2.4 权重预算校验
// 红线: 同一目标下已设置权重之和不得超过100
// ==========================================
// 职责: 在权重编辑落库前,校验候选权重与兄弟指标权重的合计
// 输出: 结构化校验结果,由调用方决定是否拒绝写入
// ==========================================

use crate::domain::indicator::Indicator;
use crate::i18n::{t, t_with_args};
use serde::Serialize;
use tracing::instrument;

/// 权重预算上限
const WEIGHT_BUDGET: f64 = 100.0;

// ==========================================
// WeightValidation - 校验结果
// ==========================================
// 本引擎唯一以结构化数据表达的业务规则违规:
// should_block 为真时调用方必须拒绝本次权重写入
#[derive(Debug, Clone, Serialize)]
pub struct WeightValidation {
    /// 合计权重（兄弟指标有效权重 + 候选权重）
    pub total: f64,

    /// 是否恰好分配完成 (== 100),仅提示,不阻断保存
    pub is_complete: bool,

    /// 是否超出预算 (> 100),调用方必须拒绝写入
    pub should_block: bool,

    /// 面向用户的校验说明（按当前语言环境生成）
    pub message: String,
}

// ==========================================
// ContributionWeightValidator - 贡献权重校验引擎
// ==========================================
pub struct ContributionWeightValidator;

impl ContributionWeightValidator {
    /// 创建新的贡献权重校验引擎
    pub fn new() -> Self {
        Self
    }

    /// 校验候选权重
    ///
    /// # 参数
    /// - goal_id: 所属目标
    /// - indicators: 该目标下全部指标（含正在编辑的指标,本方法负责排除）
    /// - editing_indicator_id: 正在编辑权重的指标
    /// - candidate_weight: 候选权重; None 或 ≤0 视为不占预算
    ///
    /// 规则:
    /// - total = 兄弟指标已设置且>0的权重之和 + 有效候选权重
    /// - should_block = total > 100（硬违规）
    /// - is_complete = total == 100（分配完成提示）
    /// - 无其他已加权兄弟指标时返回中性的"首个指标"说明
    #[instrument(skip(self, indicators), fields(goal_id = %goal_id, editing = %editing_indicator_id))]
    pub fn validate(
        &self,
        goal_id: &str,
        indicators: &[Indicator],
        editing_indicator_id: &str,
        candidate_weight: Option<f64>,
    ) -> WeightValidation {
        // 1. 兄弟指标的有效权重（排除正在编辑的指标）
        let sibling_weights: Vec<f64> = indicators
            .iter()
            .filter(|i| i.goal_id == goal_id && i.indicator_id != editing_indicator_id)
            .filter_map(|i| i.contribution_weight.effective())
            .collect();

        // 2. 合计 = 兄弟权重 + 有效候选权重
        let candidate = candidate_weight.filter(|w| *w > 0.0).unwrap_or(0.0);
        let total: f64 = sibling_weights.iter().sum::<f64>() + candidate;

        let should_block = total > WEIGHT_BUDGET;
        let is_complete = total == WEIGHT_BUDGET;

        // 3. 生成说明文案
        let total_text = format_weight(total);
        let message = if sibling_weights.is_empty() {
            // 尚无可比较对象,返回中性说明而非数值判断
            t("weight.first_indicator")
        } else if should_block {
            let over = format_weight(total - WEIGHT_BUDGET);
            t_with_args(
                "weight.over_budget",
                &[("total", total_text.as_str()), ("over", over.as_str())],
            )
        } else if is_complete {
            t("weight.complete")
        } else {
            let remaining = format_weight(WEIGHT_BUDGET - total);
            t_with_args(
                "weight.partial",
                &[
                    ("total", total_text.as_str()),
                    ("remaining", remaining.as_str()),
                ],
            )
        };

        if should_block {
            tracing::warn!(total, "权重超出预算,应拒绝写入");
        }

        WeightValidation {
            total,
            is_complete,
            should_block,
            message,
        }
    }
}

impl Default for ContributionWeightValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// 权重文案格式化: 整数权重不带小数位
fn format_weight(w: f64) -> String {
    if w.fract() == 0.0 {
        format!("{}", w as i64)
    } else {
        format!("{}", w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{
        CalculationMethod, ContributionWeight, MeasurementFrequency,
    };

    fn weighted_indicator(indicator_id: &str, goal_id: &str, weight: ContributionWeight) -> Indicator {
        Indicator {
            indicator_id: indicator_id.to_string(),
            goal_id: goal_id.to_string(),
            name: format!("指标 {}", indicator_id),
            baseline_value: None,
            target_value: Some(100.0),
            yearly_target: None,
            calculation_method: CalculationMethod::CumulativeIncreasing,
            measurement_frequency: MeasurementFrequency::Annual,
            contribution_weight: weight,
        }
    }

    #[test]
    fn test_over_budget_blocks() {
        // 已有权重60 + 候选50 = 110 → 硬违规
        let validator = ContributionWeightValidator::new();
        let indicators = vec![
            weighted_indicator("IND_A", "GOAL_1", ContributionWeight::Assigned(60.0)),
            weighted_indicator("IND_B", "GOAL_1", ContributionWeight::Unassigned),
        ];

        let result = validator.validate("GOAL_1", &indicators, "IND_B", Some(50.0));

        assert_eq!(result.total, 110.0);
        assert!(result.should_block);
        assert!(!result.is_complete);
    }

    #[test]
    fn test_complete_allocation() {
        let validator = ContributionWeightValidator::new();
        let indicators = vec![
            weighted_indicator("IND_A", "GOAL_1", ContributionWeight::Assigned(60.0)),
            weighted_indicator("IND_B", "GOAL_1", ContributionWeight::Unassigned),
        ];

        let result = validator.validate("GOAL_1", &indicators, "IND_B", Some(40.0));

        assert_eq!(result.total, 100.0);
        assert!(result.is_complete);
        assert!(!result.should_block);
    }

    #[test]
    fn test_partial_allocation() {
        let validator = ContributionWeightValidator::new();
        let indicators = vec![
            weighted_indicator("IND_A", "GOAL_1", ContributionWeight::Assigned(30.0)),
            weighted_indicator("IND_B", "GOAL_1", ContributionWeight::Unassigned),
        ];

        let result = validator.validate("GOAL_1", &indicators, "IND_B", Some(20.0));

        assert_eq!(result.total, 50.0);
        assert!(!result.is_complete);
        assert!(!result.should_block);
    }

    #[test]
    fn test_first_indicator_neutral() {
        // 无其他已加权兄弟指标 → 中性说明,不阻断
        let validator = ContributionWeightValidator::new();
        let indicators = vec![
            weighted_indicator("IND_A", "GOAL_1", ContributionWeight::Unassigned),
            weighted_indicator("IND_B", "GOAL_1", ContributionWeight::Unassigned),
        ];

        let result = validator.validate("GOAL_1", &indicators, "IND_A", Some(40.0));

        assert_eq!(result.total, 40.0);
        assert!(!result.should_block);
        assert!(!result.message.is_empty());
    }

    #[test]
    fn test_editing_indicator_excluded_from_siblings() {
        // 正在编辑的指标旧权重不计入合计
        let validator = ContributionWeightValidator::new();
        let indicators = vec![
            weighted_indicator("IND_A", "GOAL_1", ContributionWeight::Assigned(80.0)),
            weighted_indicator("IND_B", "GOAL_1", ContributionWeight::Assigned(20.0)),
        ];

        let result = validator.validate("GOAL_1", &indicators, "IND_A", Some(70.0));

        assert_eq!(result.total, 90.0);
        assert!(!result.should_block);
    }

    #[test]
    fn test_other_goal_siblings_excluded() {
        let validator = ContributionWeightValidator::new();
        let indicators = vec![
            weighted_indicator("IND_A", "GOAL_1", ContributionWeight::Assigned(40.0)),
            weighted_indicator("IND_X", "GOAL_2", ContributionWeight::Assigned(90.0)),
        ];

        let result = validator.validate("GOAL_1", &indicators, "IND_B", Some(50.0));

        assert_eq!(result.total, 90.0);
        assert!(!result.should_block);
    }

    #[test]
    fn test_zero_weight_sibling_not_counted() {
        // 显式为0的权重不占预算,但也不触发"首个指标"分支以外的歧义
        let validator = ContributionWeightValidator::new();
        let indicators = vec![
            weighted_indicator("IND_A", "GOAL_1", ContributionWeight::Assigned(0.0)),
            weighted_indicator("IND_B", "GOAL_1", ContributionWeight::Unassigned),
        ];

        let result = validator.validate("GOAL_1", &indicators, "IND_B", Some(100.0));

        assert_eq!(result.total, 100.0);
        assert!(result.is_complete);
    }

    #[test]
    fn test_absent_candidate_weight() {
        let validator = ContributionWeightValidator::new();
        let indicators = vec![
            weighted_indicator("IND_A", "GOAL_1", ContributionWeight::Assigned(60.0)),
            weighted_indicator("IND_B", "GOAL_1", ContributionWeight::Unassigned),
        ];

        let result = validator.validate("GOAL_1", &indicators, "IND_B", None);

        assert_eq!(result.total, 60.0);
        assert!(!result.should_block);
        assert!(!result.is_complete);
    }
}

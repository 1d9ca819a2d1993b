// ==========================================
// 战略绩效管理系统 - 指标评分引擎
// ==========================================
// 依据: Perf_Engine_Design_v1.2.md - 2.1 指标计分公式
// 红线: 业务数据缺陷不抛错,退化场景一律给出确定数值
// ==========================================
// 职责: 按指标配置的计算方式,将周期录入换算为达成百分比
// 输入: Indicator + 该指标的全部 DataEntry（本引擎负责过滤）
// 输出: 非负整数百分比,不设上限（超100表示超额达成）
// ==========================================

use crate::domain::indicator::{DataEntry, Indicator};
use crate::domain::types::CalculationMethod;
use tracing::instrument;

// ==========================================
// IndicatorScorer - 指标评分引擎
// ==========================================
pub struct IndicatorScorer;

impl IndicatorScorer {
    /// 创建新的指标评分引擎
    pub fn new() -> Self {
        Self
    }

    /// 计算单个指标的达成百分比
    ///
    /// 算法（顺序执行）:
    /// 1) 目标值 = 年度覆写 ?? 组织目标; 缺失或为0 → 0
    /// 2) 过滤已提交/已审批的录入; 无录入 → 0
    /// 3) S = 合格录入值之和, B = 基准值（缺省0）
    /// 4) 按计算方式分派公式
    /// 5) 结果 = max(0, round(progress)),不设上限
    ///
    /// 边界处理:
    /// - 基准相对公式分母为0 (target − baseline == 0) → 0
    /// - 维持递减公式 S == 0 → 0（逆比分母保护）
    #[instrument(skip(self, entries), fields(indicator_id = %indicator.indicator_id))]
    pub fn score(&self, indicator: &Indicator, entries: &[DataEntry]) -> u32 {
        // 1. 解析目标值
        let Some(target) = indicator.effective_target() else {
            tracing::debug!("目标值缺失或为0,得分为0");
            return 0;
        };

        // 2. 过滤合格录入
        let qualifying: Vec<f64> = entries
            .iter()
            .filter(|e| e.qualifies_for(&indicator.indicator_id))
            .map(|e| e.value)
            .collect();
        if qualifying.is_empty() {
            tracing::debug!("无合格录入,得分为0");
            return 0;
        }
        let sum: f64 = qualifying.iter().sum();

        // 3. 基准值
        let baseline = indicator.baseline();

        // 4. 按计算方式分派公式
        let progress = match indicator.calculation_method {
            // 累计递增: 从基准向目标推进的距离占比
            CalculationMethod::CumulativeIncreasing => {
                let denominator = target - baseline;
                if denominator == 0.0 {
                    return 0;
                }
                sum / denominator * 100.0
            }

            // 累计递减: 累计值按 B − S 下降,分母为负时符号相抵,
            // 向更低目标的推进表现为正进度
            CalculationMethod::CumulativeDecreasing => {
                let denominator = target - baseline;
                if denominator == 0.0 {
                    return 0;
                }
                -sum / denominator * 100.0
            }

            // 百分比递增: 按测量频率取期均值,再与目标值相比; 不使用基准值
            CalculationMethod::PercentageIncreasing => {
                let average = sum / indicator.measurement_frequency.period_count() as f64;
                average / target * 100.0
            }

            // 百分比递减: 期均值相对基准向目标的推进占比
            CalculationMethod::PercentageDecreasing => {
                let average = sum / indicator.measurement_frequency.period_count() as f64;
                let denominator = target - baseline;
                if denominator == 0.0 {
                    return 0;
                }
                (average - baseline) / denominator * 100.0
            }

            // 维持递增: 累计值与目标值的直接占比; 不使用基准值
            CalculationMethod::MaintenanceIncreasing => sum / target * 100.0,

            // 维持递减: 逆比公式,适用于"发生次数越少越好"的指标（如缺陷数）
            CalculationMethod::MaintenanceDecreasing => {
                if sum == 0.0 {
                    return 0;
                }
                target / sum * 100.0
            }
        };

        // 5. 四舍五入后下限截断到0,不设上限
        progress.round().max(0.0) as u32
    }
}

impl Default for IndicatorScorer {
    fn default() -> Self {
        Self::new()
    }
}

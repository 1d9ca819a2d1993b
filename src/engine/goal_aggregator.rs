// ==========================================
// 战略绩效管理系统 - 目标聚合引擎
// ==========================================
// 依据: Perf_Engine_Design_v1.2.md - 2.2 目标级聚合
// ==========================================
// 职责: 将目标下指标得分聚合为目标级得分
// 模式: 无有效权重时等权平均,否则按声明权重加权
// 红线: 加权模式下单指标贡献封顶100,权重不足100不做归一化
// ==========================================

use crate::domain::indicator::{DataEntry, Indicator};
use crate::engine::indicator_scorer::IndicatorScorer;
use tracing::instrument;

// ==========================================
// GoalAggregator - 目标聚合引擎
// ==========================================
pub struct GoalAggregator {
    scorer: IndicatorScorer,
}

impl GoalAggregator {
    /// 创建新的目标聚合引擎
    pub fn new() -> Self {
        Self {
            scorer: IndicatorScorer::new(),
        }
    }

    /// 计算目标级得分
    ///
    /// 算法:
    /// 1) 筛选归属该目标的指标; 空集 → 0
    /// 2) 无任何已设置且>0的权重 → 等权模式: 指标得分算术平均
    /// 3) 否则 → 加权模式: 仅计入权重>0的指标,
    ///    单指标得分先封顶100再乘权重 (contribution = min(score,100) × weight / 100),
    ///    目标得分 = round(Σ contribution)
    ///
    /// 权重合计不足100时结果是刻意的"部分得分",反映分配未完成,
    /// 不做归一化补偿。
    #[instrument(skip(self, indicators, entries), fields(goal_id = %goal_id))]
    pub fn score(&self, goal_id: &str, indicators: &[Indicator], entries: &[DataEntry]) -> u32 {
        // 1. 筛选归属指标
        let members: Vec<&Indicator> = indicators.iter().filter(|i| i.goal_id == goal_id).collect();
        if members.is_empty() {
            return 0;
        }

        // 2. 判定聚合模式
        let weighted: Vec<(&Indicator, f64)> = members
            .iter()
            .filter_map(|i| i.contribution_weight.effective().map(|w| (*i, w)))
            .collect();

        if weighted.is_empty() {
            // 等权模式: 算术平均
            // 单指标得分无上限,累加必须走 f64,避免整数溢出
            tracing::debug!(count = members.len(), "等权模式聚合");
            let sum: f64 = members
                .iter()
                .map(|i| f64::from(self.scorer.score(i, entries)))
                .sum();
            return (sum / members.len() as f64).round() as u32;
        }

        // 3. 加权模式: 无权重指标不参与,单指标超额不抬升目标得分
        tracing::debug!(count = weighted.len(), "加权模式聚合");
        let total: f64 = weighted
            .iter()
            .map(|(indicator, weight)| {
                let capped = self.scorer.score(indicator, entries).min(100);
                f64::from(capped) * weight / 100.0
            })
            .sum();

        total.round() as u32
    }
}

impl Default for GoalAggregator {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 战略绩效管理系统 - 战略目标聚合引擎
// ==========================================
// 依据: Perf_Engine_Design_v1.2.md - 2.3 战略目标级聚合
// ==========================================
// 职责: 将战略目标下各目标得分聚合为顶层得分
// 红线: 该层级不存在权重,只做算术平均
// ==========================================

use crate::domain::indicator::{DataEntry, Indicator};
use crate::domain::plan::Goal;
use crate::engine::goal_aggregator::GoalAggregator;
use tracing::instrument;

// ==========================================
// ObjectiveAggregator - 战略目标聚合引擎
// ==========================================
pub struct ObjectiveAggregator {
    goal_aggregator: GoalAggregator,
}

impl ObjectiveAggregator {
    /// 创建新的战略目标聚合引擎
    pub fn new() -> Self {
        Self {
            goal_aggregator: GoalAggregator::new(),
        }
    }

    /// 计算战略目标级得分
    ///
    /// 筛选归属该战略目标的目标; 空集 → 0;
    /// 否则返回各目标得分的算术平均（四舍五入）。
    #[instrument(skip(self, goals, indicators, entries), fields(objective_id = %objective_id))]
    pub fn score(
        &self,
        objective_id: &str,
        goals: &[Goal],
        indicators: &[Indicator],
        entries: &[DataEntry],
    ) -> u32 {
        let members: Vec<&Goal> = goals
            .iter()
            .filter(|g| g.objective_id == objective_id)
            .collect();
        if members.is_empty() {
            return 0;
        }

        // 目标得分无上限,累加必须走 f64,避免整数溢出
        let sum: f64 = members
            .iter()
            .map(|g| f64::from(self.goal_aggregator.score(&g.goal_id, indicators, entries)))
            .sum();

        (sum / members.len() as f64).round() as u32
    }
}

impl Default for ObjectiveAggregator {
    fn default() -> Self {
        Self::new()
    }
}

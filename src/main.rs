// ==========================================
// 战略绩效管理系统 - 评分报表入口
// ==========================================
// 职责: 装载规划快照,逐层打印得分与绩效区间
// 说明: 引擎本身是纯函数库,本入口只是宿主侧演示消费方
// ==========================================

use anyhow::Context;
use perf_scoring_engine::i18n::t;
use perf_scoring_engine::{
    logging, GoalAggregator, IndicatorScorer, ObjectiveAggregator, PlanSnapshot,
    ProgressClassifier,
};

fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - 绩效评分引擎", perf_scoring_engine::APP_NAME);
    tracing::info!("系统版本: {}", perf_scoring_engine::VERSION);
    tracing::info!("==================================================");

    let path = std::env::args()
        .nth(1)
        .context("用法: perf-scoring-engine <snapshot.json>")?;

    let snapshot = PlanSnapshot::from_json_file(&path)
        .with_context(|| format!("无法装载快照: {}", path))?;

    let indicator_scorer = IndicatorScorer::new();
    let goal_aggregator = GoalAggregator::new();
    let objective_aggregator = ObjectiveAggregator::new();
    let classifier = ProgressClassifier::new();

    for objective in &snapshot.objectives {
        let score = objective_aggregator.score(
            &objective.objective_id,
            &snapshot.goals,
            &snapshot.indicators,
            &snapshot.entries,
        );
        let band = classifier.classify(score);
        println!(
            "战略目标 [{}] {} — {}% ({})",
            objective.objective_id,
            objective.name,
            score,
            t(band.label_key())
        );

        for goal in snapshot
            .goals
            .iter()
            .filter(|g| g.objective_id == objective.objective_id)
        {
            let score =
                goal_aggregator.score(&goal.goal_id, &snapshot.indicators, &snapshot.entries);
            let band = classifier.classify(score);
            println!(
                "  目标 [{}] {} — {}% ({})",
                goal.goal_id,
                goal.name,
                score,
                t(band.label_key())
            );

            for indicator in snapshot
                .indicators
                .iter()
                .filter(|i| i.goal_id == goal.goal_id)
            {
                let score = indicator_scorer.score(indicator, &snapshot.entries);
                let band = classifier.classify(score);
                println!(
                    "    指标 [{}] {} — {}% ({}) 权重: {}",
                    indicator.indicator_id,
                    indicator.name,
                    score,
                    t(band.label_key()),
                    indicator.contribution_weight
                );
            }
        }
    }

    Ok(())
}

// ==========================================
// 战略绩效管理系统 - 引擎层
// ==========================================
// 依据: Perf_Engine_Design_v1.2.md - 2. 引擎组件
// ==========================================
// 职责: 实现绩效计分业务规则
// 红线: 引擎只读调用方传入的快照,不做任何 I/O 与缓存;
//       全部操作为纯同步函数,相同输入必得相同输出
// ==========================================

pub mod classifier;
pub mod goal_aggregator;
pub mod indicator_scorer;
pub mod objective_aggregator;
pub mod weight_validator;

// 重导出核心引擎
pub use classifier::ProgressClassifier;
pub use goal_aggregator::GoalAggregator;
pub use indicator_scorer::IndicatorScorer;
pub use objective_aggregator::ObjectiveAggregator;
pub use weight_validator::{ContributionWeightValidator, WeightValidation};

// ==========================================
// 战略绩效管理系统 - 绩效区间分级引擎
// ==========================================
// 依据: Perf_Engine_Design_v1.2.md - 2.5 绩效区间分级
// ==========================================
// 职责: 将任意层级的数值得分映射为离散绩效区间
// 阈值固定且非连续,指标/目标/战略目标三级统一使用
// ==========================================

use crate::domain::types::ProgressBand;

/// 分级阈值（得分下限,含）
const EXCEPTIONAL_MIN: u32 = 115;
const ON_TRACK_MIN: u32 = 85;
const NEAR_TARGET_MIN: u32 = 70;
const WATCH_MIN: u32 = 55;
const AT_RISK_MIN: u32 = 45;

// ==========================================
// ProgressClassifier - 绩效区间分级引擎
// ==========================================
pub struct ProgressClassifier;

impl ProgressClassifier {
    /// 创建新的绩效区间分级引擎
    pub fn new() -> Self {
        Self
    }

    /// 得分映射为绩效区间（纯查表,无副作用）
    pub fn classify(&self, score: u32) -> ProgressBand {
        if score >= EXCEPTIONAL_MIN {
            ProgressBand::Exceptional
        } else if score >= ON_TRACK_MIN {
            ProgressBand::OnTrack
        } else if score >= NEAR_TARGET_MIN {
            ProgressBand::NearTarget
        } else if score >= WATCH_MIN {
            ProgressBand::Watch
        } else if score >= AT_RISK_MIN {
            ProgressBand::AtRisk
        } else {
            ProgressBand::Critical
        }
    }
}

impl Default for ProgressClassifier {
    fn default() -> Self {
        Self::new()
    }
}

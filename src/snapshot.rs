// ==========================================
// 战略绩效管理系统 - 规划快照装载
// ==========================================
// 职责: 从 JSON 文件/字符串装载一次评分所需的不可变快照
// 说明: 持久化由宿主系统负责,本模块只做只读装载,
//       引擎本身不接触文件系统
// ==========================================

use crate::domain::indicator::{DataEntry, Indicator};
use crate::domain::plan::{Goal, Objective};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// 快照装载错误类型
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("快照文件读取失败: {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("快照解析失败: {0}")]
    Parse(#[from] serde_json::Error),
}

// ==========================================
// PlanSnapshot - 规划快照
// ==========================================
// 一次评分调用所需的全部记录,各集合允许为空
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanSnapshot {
    #[serde(default)]
    pub objectives: Vec<Objective>,

    #[serde(default)]
    pub goals: Vec<Goal>,

    #[serde(default)]
    pub indicators: Vec<Indicator>,

    #[serde(default)]
    pub entries: Vec<DataEntry>,
}

impl PlanSnapshot {
    /// 从 JSON 字符串装载快照
    pub fn from_json_str(raw: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// 从 JSON 文件装载快照
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let snapshot = Self::from_json_str(&raw)?;
        tracing::info!(
            objectives = snapshot.objectives.len(),
            goals = snapshot.goals.len(),
            indicators = snapshot.indicators.len(),
            entries = snapshot.entries.len(),
            "快照装载完成"
        );
        Ok(snapshot)
    }
}

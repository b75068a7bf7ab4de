//! Canonical data model
//!
//! Plain serializable records with primitive fields only; the HTTP layer
//! serves them as-is, camelCase on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fiscal years the plan tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FiscalYear {
    #[serde(rename = "2024")]
    Y2024,
    #[serde(rename = "2025")]
    Y2025,
}

impl FiscalYear {
    pub const ALL: [FiscalYear; 2] = [FiscalYear::Y2024, FiscalYear::Y2025];

    pub fn parse(s: &str) -> Option<FiscalYear> {
        match s {
            "2024" => Some(FiscalYear::Y2024),
            "2025" => Some(FiscalYear::Y2025),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FiscalYear::Y2024 => "2024",
            FiscalYear::Y2025 => "2025",
        }
    }
}

impl fmt::Display for FiscalYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grouping level for the hierarchy aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HierarchyLevel {
    Axis,
    Program,
    Subprogram,
    Goal,
}

impl HierarchyLevel {
    pub fn parse(s: &str) -> Option<HierarchyLevel> {
        match s {
            "axis" => Some(HierarchyLevel::Axis),
            "program" => Some(HierarchyLevel::Program),
            "subprogram" => Some(HierarchyLevel::Subprogram),
            "goal" => Some(HierarchyLevel::Goal),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HierarchyLevel::Axis => "axis",
            HierarchyLevel::Program => "program",
            HierarchyLevel::Subprogram => "subprogram",
            HierarchyLevel::Goal => "goal",
        }
    }
}

impl fmt::Display for HierarchyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fulfillment status derived from the two-year physical advance.
///
/// Serialized with the Spanish labels the plan's consumers expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalStatus {
    #[serde(rename = "Cumplido")]
    Cumplido,
    #[serde(rename = "En proceso")]
    EnProceso,
    #[serde(rename = "Iniciado")]
    Iniciado,
    #[serde(rename = "Pendiente")]
    Pendiente,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::Cumplido => "Cumplido",
            GoalStatus::EnProceso => "En proceso",
            GoalStatus::Iniciado => "Iniciado",
            GoalStatus::Pendiente => "Pendiente",
        }
    }
}

/// One quarter's physical planned/executed pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Quarter {
    pub planned: f64,
    pub executed: f64,
}

/// Fiscal and physical-execution figures for one tracked year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearFigures {
    /// Programmed / not-programmed flag, verbatim from the sheet.
    pub scheduled: String,
    pub appropriation_initial: f64,
    pub appropriation_definitive: f64,
    pub commitments: f64,
    pub payments: f64,
    /// Budget execution percent: the source value, or derived from
    /// commitments over the definitive appropriation when the source
    /// cell is zero.
    pub financial_percent: f64,
    pub total_planned: f64,
    pub total_executed: f64,
    /// Physical advance percent, executed over planned, unrounded.
    pub advance_percent: f64,
    pub quarters: [Quarter; 4],
    /// Evidence hyperlink; only present when ingestion preserved links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_url: Option<String>,
}

/// The canonical unit of work: one product goal of the development plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductGoal {
    /// 1-based position in the filtered row sequence. Not stable across
    /// re-fetches of the source.
    pub id: u32,
    pub name: String,
    pub axis: String,
    pub program: String,
    pub subprogram: String,
    pub result_goal: String,
    pub project: String,
    pub responsible: String,
    /// Programmed/not-programmed evaluation flag from the sheet.
    pub evaluation_status: String,
    /// Derived fulfillment status, see [`GoalStatus`].
    pub status: GoalStatus,
    pub indicator: String,
    pub baseline: String,
    pub measurement_unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bpin: Option<String>,
    pub observations: String,
    pub y2024: YearFigures,
    pub y2025: YearFigures,
}

impl ProductGoal {
    /// Figures for the given fiscal year.
    pub fn figures(&self, year: FiscalYear) -> &YearFigures {
        match year {
            FiscalYear::Y2024 => &self.y2024,
            FiscalYear::Y2025 => &self.y2025,
        }
    }
}

/// One hierarchy group reduced to summed figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationBucket {
    pub label: String,
    pub goal_count: usize,
    pub planned: f64,
    pub executed: f64,
    pub appropriation_initial: f64,
    pub appropriation_definitive: f64,
    pub commitments: f64,
    pub payments: f64,
    /// Executed over planned, computed from the bucket sums.
    pub execution_percent: f64,
    /// Commitments over definitive appropriation, from the bucket sums.
    pub financial_percent: f64,
}

/// Per-secretariat budget summary from the second sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretariatSummary {
    pub responsible: String,
    pub total_goals: f64,
    pub scheduled_goals_2025: f64,
    pub appropriation_initial_2025: f64,
    pub appropriation_definitive_2025: f64,
    pub commitments_2025: f64,
    pub payments_2025: f64,
    /// Budget execution percent, source value or derived fallback.
    pub execution_percent: f64,
}

/// Whole-plan summary: distinct hierarchy labels plus the status spread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanOverview {
    pub total_goals: usize,
    pub axes: usize,
    pub programs: usize,
    pub subprograms: usize,
    pub result_goals: usize,
    pub projects: usize,
    pub status_counts: StatusCounts,
}

/// Goal counts per derived status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub cumplido: usize,
    pub en_proceso: usize,
    pub iniciado: usize,
    pub pendiente: usize,
}

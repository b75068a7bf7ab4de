//! Header alias tables for the published sheet exports
//!
//! The sheets renamed, duplicated and occasionally misspelled headers
//! across fiscal years, so every canonical field resolves through an
//! ordered alias list: the first header present with a non-blank cell
//! wins. Every observed spelling lives here, typos and stray spaces
//! included, so nothing outside this module guesses at column names.

use crate::model::FiscalYear;

// Goal sheet: fixed headers.
pub const NAME: &[&str] = &["META DE PRODUCTO"];
pub const AXIS: &[&str] = &["EJE"];
pub const PROGRAM: &[&str] = &["PROGRAMA PDT", "PROGRAMA MGA"];
pub const SUBPROGRAM: &[&str] = &["SUBPROGRAMA"];
pub const RESULT_GOAL: &[&str] = &["META DE RESULTADO"];
pub const PROJECT: &[&str] = &["NOMBRE DEL PROYECTO"];
pub const EVALUATION_STATUS: &[&str] = &["ESTADO PROGRAMADO-NO PROGRAMADO 2024"];
pub const RESPONSIBLE: &[&str] = &["RESPONSABLE"];
pub const BASELINE: &[&str] = &["L.B"];
pub const INDICATOR: &[&str] = &["INDICADOR"];
pub const MEASUREMENT_UNIT: &[&str] = &["UNIDAD DE MEDIDA"];
pub const CODE: &[&str] = &["COD META PRODUCTO", "Cod Meta de producto"];
pub const BPIN: &[&str] = &["BPIN", "Bpin", "bpin", " BPIN", "BPIN "];
pub const OBSERVATIONS: &[&str] = &["OBSERVACIONES"];

/// Default for the responsible party when the cell is blank.
pub const UNASSIGNED: &str = "No asignado";
/// Default evaluation status when the cell is blank.
pub const EVALUATION_PENDING: &str = "Pendiente";

// Goal sheet: year-scoped headers.

pub fn scheduled(year: FiscalYear) -> Vec<String> {
    vec![format!("ESTADO PROGRAMADO-NO PROGRAMADO {year}")]
}

pub fn appropriation_initial(year: FiscalYear) -> Vec<String> {
    match year {
        FiscalYear::Y2024 => vec!["APROPIACION 2024".to_string()],
        FiscalYear::Y2025 => vec!["APROPIACION INICIAL 2025".to_string()],
    }
}

/// 2024 published a single appropriation column, so it feeds both the
/// initial and the definitive figure for that year.
pub fn appropriation_definitive(year: FiscalYear) -> Vec<String> {
    match year {
        FiscalYear::Y2024 => vec!["APROPIACION 2024".to_string()],
        FiscalYear::Y2025 => vec!["APROPIACION DEFINITIVA 2025".to_string()],
    }
}

pub fn commitments(year: FiscalYear) -> Vec<String> {
    vec![format!("COMPROMISOS {year}")]
}

pub fn payments(year: FiscalYear) -> Vec<String> {
    match year {
        FiscalYear::Y2024 => vec!["VALOR EJECUTADO".to_string()],
        FiscalYear::Y2025 => vec!["PAGOS 2025".to_string()],
    }
}

pub fn financial_percent(year: FiscalYear) -> Vec<String> {
    match year {
        FiscalYear::Y2024 => vec![
            "% EJECUCIÓN FINANCIERA 2024".to_string(),
            "% EJECUCION FINANCIERA 2024".to_string(),
        ],
        FiscalYear::Y2025 => vec![
            "% EJECUCION 2025".to_string(),
            "% EJECUCIÓN 2025".to_string(),
        ],
    }
}

pub fn total_planned(year: FiscalYear) -> Vec<String> {
    vec![format!("TOTAL PLANEADO {year}")]
}

pub fn total_executed(year: FiscalYear) -> Vec<String> {
    vec![format!("TOTAL EJECUTADO {year}")]
}

/// Quarter headers, 1-based quarter index. Most quarters are written as
/// `T1. PLANEADO 2024` but Q4 executed appears as `T.4 EJECUTADO 2024`,
/// so both dot placements are tried.
pub fn quarter_planned(year: FiscalYear, quarter: u8) -> Vec<String> {
    vec![
        format!("T{quarter}. PLANEADO {year}"),
        format!("T.{quarter} PLANEADO {year}"),
    ]
}

pub fn quarter_executed(year: FiscalYear, quarter: u8) -> Vec<String> {
    vec![
        format!("T{quarter}. EJECUTADO {year}"),
        format!("T.{quarter} EJECUTADO {year}"),
    ]
}

/// Evidence-link columns, present only when ingestion preserved the
/// hyperlinks. The leading space is verbatim from the sheet.
pub fn support_url(year: FiscalYear) -> Vec<String> {
    vec![format!(" SOPORTES DE CUMPLIMIENTO {year}_URL")]
}

/// Secretariats sheet headers.
pub mod secretariat {
    pub const RESPONSIBLE: &[&str] = &["RESPONSABLE"];
    pub const TOTAL_GOALS: &[&str] = &["TOTAL METAS"];
    pub const SCHEDULED_GOALS_2025: &[&str] = &["METAS PROGRAMADAS 2025"];
    pub const APPROPRIATION_INITIAL_2025: &[&str] = &["APROPIACION INICIAL 2025"];
    pub const APPROPRIATION_DEFINITIVE_2025: &[&str] = &["APROPIACION DEFINITIVA 2025"];
    pub const COMMITMENTS_2025: &[&str] = &["COMPROMISOS 2025"];
    pub const PAYMENTS_2025: &[&str] = &["PAGOS 2025"];
    pub const EXECUTION_PERCENT: &[&str] = &[
        "% EJECUCIÓN PPTO OCT 27-2025",
        "% EJECUCION PPTO OCT 27-2025",
    ];
}

//! Row mapping: raw sheet rows into canonical records
//!
//! All header resolution happens here and in [`crate::headers`]; nothing
//! downstream ever touches a raw row.

use crate::headers;
use crate::model::{
    FiscalYear, GoalStatus, ProductGoal, Quarter, SecretariatSummary, YearFigures,
};
use crate::sheet::RawRow;

/// Map the goal sheet's rows.
///
/// Rows with a blank goal description are dropped before ids are
/// assigned, so ids are 1-based positions within the filtered sequence.
pub fn map_goal_rows(rows: &[RawRow]) -> Vec<ProductGoal> {
    rows.iter()
        .filter(|row| !row.text(headers::NAME).is_empty())
        .enumerate()
        .map(|(ordinal, row)| map_goal_row(row, ordinal))
        .collect()
}

/// Map one meaningful row. Callers filter blank-name rows first, see
/// [`map_goal_rows`].
pub fn map_goal_row(row: &RawRow, ordinal: usize) -> ProductGoal {
    let y2024 = map_year(row, FiscalYear::Y2024);
    let y2025 = map_year(row, FiscalYear::Y2025);
    let status = derive_status(&y2024, &y2025);

    ProductGoal {
        id: ordinal as u32 + 1,
        name: row.text(headers::NAME),
        axis: row.text(headers::AXIS),
        program: row.text(headers::PROGRAM),
        subprogram: row.text(headers::SUBPROGRAM),
        result_goal: row.text(headers::RESULT_GOAL),
        project: row.text(headers::PROJECT),
        responsible: row.text_or(headers::RESPONSIBLE, headers::UNASSIGNED),
        evaluation_status: row.text_or(headers::EVALUATION_STATUS, headers::EVALUATION_PENDING),
        status,
        indicator: row.text(headers::INDICATOR),
        baseline: row.text(headers::BASELINE),
        measurement_unit: row.text(headers::MEASUREMENT_UNIT),
        code: row.optional_text(headers::CODE),
        bpin: row.optional_text(headers::BPIN),
        observations: row.text(headers::OBSERVATIONS),
        y2024,
        y2025,
    }
}

fn map_year(row: &RawRow, year: FiscalYear) -> YearFigures {
    let appropriation_definitive = row.number(&headers::appropriation_definitive(year));
    let commitments = row.number(&headers::commitments(year));
    let total_planned = row.number(&headers::total_planned(year));
    let total_executed = row.number(&headers::total_executed(year));

    let mut quarters = [Quarter::default(); 4];
    for (i, q) in quarters.iter_mut().enumerate() {
        let quarter = i as u8 + 1;
        q.planned = row.number(&headers::quarter_planned(year, quarter));
        q.executed = row.number(&headers::quarter_executed(year, quarter));
    }

    YearFigures {
        scheduled: row.text(&headers::scheduled(year)),
        appropriation_initial: row.number(&headers::appropriation_initial(year)),
        appropriation_definitive,
        commitments,
        payments: row.number(&headers::payments(year)),
        financial_percent: financial_percent(
            row.number(&headers::financial_percent(year)),
            commitments,
            appropriation_definitive,
        ),
        total_planned,
        total_executed,
        advance_percent: ratio_percent(total_executed, total_planned),
        quarters,
        support_url: row.optional_text(&headers::support_url(year)),
    }
}

/// Numerator over denominator as a percentage, 0 on a zero denominator.
pub fn ratio_percent(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator * 100.0
    }
}

/// Budget execution percent: the sheet's own cell when it carries a
/// value, otherwise derived from the fiscal sums.
fn financial_percent(source: f64, commitments: f64, appropriation: f64) -> f64 {
    if source == 0.0 && appropriation > 0.0 {
        ratio_percent(commitments, appropriation)
    } else {
        source
    }
}

/// Average the two years' physical advance and bucket the result.
pub fn derive_status(y2024: &YearFigures, y2025: &YearFigures) -> GoalStatus {
    let average = (y2024.advance_percent + y2025.advance_percent) / 2.0;
    if average >= 100.0 {
        GoalStatus::Cumplido
    } else if average >= 70.0 {
        GoalStatus::EnProceso
    } else if average > 0.0 {
        GoalStatus::Iniciado
    } else {
        GoalStatus::Pendiente
    }
}

/// Map the secretariats sheet: one summary per responsible entity, rows
/// without one dropped.
pub fn map_secretariat_rows(rows: &[RawRow]) -> Vec<SecretariatSummary> {
    use headers::secretariat as h;

    rows.iter()
        .filter(|row| !row.text(h::RESPONSIBLE).is_empty())
        .map(|row| {
            let appropriation_definitive = row.number(h::APPROPRIATION_DEFINITIVE_2025);
            let commitments = row.number(h::COMMITMENTS_2025);

            SecretariatSummary {
                responsible: row.text(h::RESPONSIBLE),
                total_goals: row.number(h::TOTAL_GOALS),
                scheduled_goals_2025: row.number(h::SCHEDULED_GOALS_2025),
                appropriation_initial_2025: row.number(h::APPROPRIATION_INITIAL_2025),
                appropriation_definitive_2025: appropriation_definitive,
                commitments_2025: commitments,
                payments_2025: row.number(h::PAYMENTS_2025),
                execution_percent: financial_percent(
                    row.number(h::EXECUTION_PERCENT),
                    commitments,
                    appropriation_definitive,
                ),
            }
        })
        .collect()
}

//! Hierarchy aggregation
//!
//! One parameterized group-and-sum covers every rollup view; callers
//! pick the level and the fiscal year. Percentages always come from the
//! bucket's own sums, never from averaging member percentages, so large
//! and small goals weigh in proportionally.

use std::collections::{HashMap, HashSet};

use crate::mapper::ratio_percent;
use crate::model::{
    AggregationBucket, FiscalYear, GoalStatus, HierarchyLevel, PlanOverview, ProductGoal,
    StatusCounts,
};

/// Label substituted when a goal's grouping field is blank, so such rows
/// aggregate into a visible bucket instead of disappearing.
pub const UNSPECIFIED: &str = "(unspecified)";

/// Group `goals` by `level` and reduce each group over `year`'s figures.
///
/// Buckets come back sorted descending by definitive appropriation, then
/// by planned units; ties keep first-seen order. A top-N view is a plain
/// prefix of this output.
pub fn aggregate(
    goals: &[ProductGoal],
    level: HierarchyLevel,
    year: FiscalYear,
) -> Vec<AggregationBucket> {
    let mut buckets: Vec<AggregationBucket> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for goal in goals {
        let (key, label) = bucket_identity(goal, level);
        let slot = *index.entry(key).or_insert_with(|| {
            buckets.push(empty_bucket(label));
            buckets.len() - 1
        });

        let figures = goal.figures(year);
        let bucket = &mut buckets[slot];
        bucket.goal_count += 1;
        bucket.planned += figures.total_planned;
        bucket.executed += figures.total_executed;
        bucket.appropriation_initial += figures.appropriation_initial;
        bucket.appropriation_definitive += figures.appropriation_definitive;
        bucket.commitments += figures.commitments;
        bucket.payments += figures.payments;
    }

    for bucket in &mut buckets {
        bucket.execution_percent = ratio_percent(bucket.executed, bucket.planned);
        bucket.financial_percent =
            ratio_percent(bucket.commitments, bucket.appropriation_definitive);
    }

    buckets.sort_by(|a, b| {
        b.appropriation_definitive
            .total_cmp(&a.appropriation_definitive)
            .then_with(|| b.planned.total_cmp(&a.planned))
    });

    buckets
}

/// Key/label pair for one goal at one level. Hierarchy labels double as
/// keys; at goal level the id keys the bucket so duplicate goal names
/// stay separate.
fn bucket_identity(goal: &ProductGoal, level: HierarchyLevel) -> (String, String) {
    match level {
        HierarchyLevel::Axis => keyed_label(&goal.axis),
        HierarchyLevel::Program => keyed_label(&goal.program),
        HierarchyLevel::Subprogram => keyed_label(&goal.subprogram),
        HierarchyLevel::Goal => (goal.id.to_string(), goal.name.clone()),
    }
}

fn keyed_label(value: &str) -> (String, String) {
    let trimmed = value.trim();
    let label = if trimmed.is_empty() {
        UNSPECIFIED.to_string()
    } else {
        trimmed.to_string()
    };
    (label.clone(), label)
}

fn empty_bucket(label: String) -> AggregationBucket {
    AggregationBucket {
        label,
        goal_count: 0,
        planned: 0.0,
        executed: 0.0,
        appropriation_initial: 0.0,
        appropriation_definitive: 0.0,
        commitments: 0.0,
        payments: 0.0,
        execution_percent: 0.0,
        financial_percent: 0.0,
    }
}

/// Whole-plan summary: total and distinct hierarchy counts plus the
/// derived-status distribution. Blank labels do not count as distinct
/// values.
pub fn overview(goals: &[ProductGoal]) -> PlanOverview {
    let distinct = |pick: fn(&ProductGoal) -> &str| {
        goals
            .iter()
            .map(pick)
            .filter(|v| !v.is_empty())
            .collect::<HashSet<_>>()
            .len()
    };

    let mut status_counts = StatusCounts::default();
    for goal in goals {
        match goal.status {
            GoalStatus::Cumplido => status_counts.cumplido += 1,
            GoalStatus::EnProceso => status_counts.en_proceso += 1,
            GoalStatus::Iniciado => status_counts.iniciado += 1,
            GoalStatus::Pendiente => status_counts.pendiente += 1,
        }
    }

    PlanOverview {
        total_goals: goals.len(),
        axes: distinct(|g| &g.axis),
        programs: distinct(|g| &g.program),
        subprograms: distinct(|g| &g.subprogram),
        result_goals: distinct(|g| &g.result_goal),
        projects: distinct(|g| &g.project),
        status_counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::YearFigures;

    fn goal(
        id: u32,
        axis: &str,
        program: &str,
        planned: f64,
        executed: f64,
        appropriation: f64,
        commitments: f64,
    ) -> ProductGoal {
        ProductGoal {
            id,
            name: format!("Meta {id}"),
            axis: axis.to_string(),
            program: program.to_string(),
            subprogram: String::new(),
            result_goal: String::new(),
            project: String::new(),
            responsible: String::new(),
            evaluation_status: String::new(),
            status: GoalStatus::Pendiente,
            indicator: String::new(),
            baseline: String::new(),
            measurement_unit: String::new(),
            code: None,
            bpin: None,
            observations: String::new(),
            y2024: YearFigures::default(),
            y2025: YearFigures {
                total_planned: planned,
                total_executed: executed,
                appropriation_initial: appropriation,
                appropriation_definitive: appropriation,
                commitments,
                ..YearFigures::default()
            },
        }
    }

    #[test]
    fn test_sums_are_conserved_across_buckets() {
        let goals = vec![
            goal(1, "A", "P1", 10.0, 5.0, 100.0, 50.0),
            goal(2, "A", "P2", 20.0, 10.0, 200.0, 80.0),
            goal(3, "B", "P1", 30.0, 15.0, 300.0, 120.0),
            goal(4, "", "P3", 40.0, 20.0, 400.0, 160.0),
        ];
        let buckets = aggregate(&goals, HierarchyLevel::Axis, FiscalYear::Y2025);

        let planned: f64 = buckets.iter().map(|b| b.planned).sum();
        let executed: f64 = buckets.iter().map(|b| b.executed).sum();
        let count: usize = buckets.iter().map(|b| b.goal_count).sum();
        assert_eq!(planned, 100.0);
        assert_eq!(executed, 50.0);
        assert_eq!(count, goals.len());
    }

    #[test]
    fn test_percentages_come_from_sums_not_averages() {
        // One tiny fully-executed goal must not drag the 1000-unit goal's
        // bucket anywhere near 55%.
        let goals = vec![
            goal(1, "A", "P", 10.0, 10.0, 0.0, 0.0),
            goal(2, "A", "P", 1000.0, 100.0, 0.0, 0.0),
        ];
        let buckets = aggregate(&goals, HierarchyLevel::Axis, FiscalYear::Y2025);
        assert_eq!(buckets.len(), 1);
        let expected = 110.0 / 1010.0 * 100.0;
        assert!((buckets[0].execution_percent - expected).abs() < 1e-9);
        assert!(buckets[0].execution_percent < 12.0);
    }

    #[test]
    fn test_financial_percent_from_bucket_sums() {
        let goals = vec![
            goal(1, "A", "P", 0.0, 0.0, 1000.0, 100.0),
            goal(2, "A", "P", 0.0, 0.0, 1000.0, 500.0),
        ];
        let buckets = aggregate(&goals, HierarchyLevel::Axis, FiscalYear::Y2025);
        assert!((buckets[0].financial_percent - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_blank_labels_fold_into_unspecified() {
        let goals = vec![
            goal(1, "A", "P", 1.0, 0.0, 10.0, 0.0),
            goal(2, "  ", "P", 2.0, 0.0, 20.0, 0.0),
            goal(3, "", "P", 3.0, 0.0, 30.0, 0.0),
        ];
        let buckets = aggregate(&goals, HierarchyLevel::Axis, FiscalYear::Y2025);
        assert_eq!(buckets.len(), 2);
        let unspecified = buckets.iter().find(|b| b.label == UNSPECIFIED).unwrap();
        assert_eq!(unspecified.goal_count, 2);
        assert_eq!(unspecified.planned, 5.0);
    }

    #[test]
    fn test_goal_level_keeps_duplicate_names_separate() {
        let mut first = goal(1, "A", "P", 1.0, 0.0, 10.0, 0.0);
        let mut second = goal(2, "A", "P", 2.0, 0.0, 20.0, 0.0);
        first.name = "Misma meta".to_string();
        second.name = "Misma meta".to_string();

        let buckets = aggregate(&[first, second], HierarchyLevel::Goal, FiscalYear::Y2025);
        assert_eq!(buckets.len(), 2);
        assert!(buckets.iter().all(|b| b.goal_count == 1));
        assert!(buckets.iter().all(|b| b.label == "Misma meta"));
    }

    #[test]
    fn test_zero_planned_bucket_has_zero_percent() {
        let goals = vec![goal(1, "A", "P", 0.0, 5.0, 0.0, 0.0)];
        let buckets = aggregate(&goals, HierarchyLevel::Axis, FiscalYear::Y2025);
        assert_eq!(buckets[0].execution_percent, 0.0);
        assert_eq!(buckets[0].financial_percent, 0.0);
    }

    #[test]
    fn test_sorted_by_appropriation_then_planned() {
        let goals = vec![
            goal(1, "Chico", "P", 50.0, 0.0, 100.0, 0.0),
            goal(2, "Grande", "P", 10.0, 0.0, 900.0, 0.0),
            goal(3, "Empate bajo", "P", 5.0, 0.0, 100.0, 0.0),
            goal(4, "Empate alto", "P", 80.0, 0.0, 100.0, 0.0),
        ];
        let buckets = aggregate(&goals, HierarchyLevel::Axis, FiscalYear::Y2025);
        let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Grande", "Empate alto", "Chico", "Empate bajo"]);
    }

    #[test]
    fn test_full_ties_keep_first_seen_order() {
        let goals = vec![
            goal(1, "Primero", "P", 10.0, 0.0, 100.0, 0.0),
            goal(2, "Segundo", "P", 10.0, 0.0, 100.0, 0.0),
            goal(3, "Tercero", "P", 10.0, 0.0, 100.0, 0.0),
        ];
        let buckets = aggregate(&goals, HierarchyLevel::Axis, FiscalYear::Y2025);
        let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Primero", "Segundo", "Tercero"]);
    }

    #[test]
    fn test_year_selects_the_figure_set() {
        let mut g = goal(1, "A", "P", 10.0, 5.0, 100.0, 40.0);
        g.y2024 = YearFigures {
            total_planned: 7.0,
            total_executed: 7.0,
            appropriation_definitive: 777.0,
            ..YearFigures::default()
        };
        let buckets = aggregate(&[g], HierarchyLevel::Axis, FiscalYear::Y2024);
        assert_eq!(buckets[0].planned, 7.0);
        assert_eq!(buckets[0].appropriation_definitive, 777.0);
        assert_eq!(buckets[0].execution_percent, 100.0);
    }

    #[test]
    fn test_overview_counts_distinct_labels_and_statuses() {
        let mut goals = vec![
            goal(1, "A", "P1", 10.0, 10.0, 0.0, 0.0),
            goal(2, "A", "P2", 10.0, 0.0, 0.0, 0.0),
            goal(3, "B", "P1", 10.0, 0.0, 0.0, 0.0),
            goal(4, "", "P1", 10.0, 0.0, 0.0, 0.0),
        ];
        goals[0].status = GoalStatus::Cumplido;
        goals[1].status = GoalStatus::EnProceso;

        let summary = overview(&goals);
        assert_eq!(summary.total_goals, 4);
        assert_eq!(summary.axes, 2);
        assert_eq!(summary.programs, 2);
        assert_eq!(summary.subprograms, 0);
        assert_eq!(summary.status_counts.cumplido, 1);
        assert_eq!(summary.status_counts.en_proceso, 1);
        assert_eq!(summary.status_counts.pendiente, 2);
    }
}

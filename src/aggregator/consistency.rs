use crate::aggregator::constants::{
    CONSISTENCY_ERROR_FRACTION, CONSISTENCY_WARNING_FRACTION, KCAL_PER_G_CARBS, KCAL_PER_G_FAT,
    KCAL_PER_G_PROTEIN, ZERO_DECLARED_KCAL_FLOOR,
};

/// Severity of a declared-vs-estimated calorie mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsistencySeverity {
    Ok,
    Warning,
    Error,
}

/// Tolerances for the consistency check.
#[derive(Debug, Clone)]
pub struct ConsistencyThresholds {
    /// Relative difference above which a warning is raised.
    pub warning_fraction: f64,
    /// Relative difference above which an error is raised.
    pub error_fraction: f64,
    /// Absolute estimated-kcal floor applied when declared calories are zero.
    pub zero_declared_kcal_floor: f64,
}

impl Default for ConsistencyThresholds {
    fn default() -> Self {
        Self {
            warning_fraction: CONSISTENCY_WARNING_FRACTION,
            error_fraction: CONSISTENCY_ERROR_FRACTION,
            zero_declared_kcal_floor: ZERO_DECLARED_KCAL_FLOOR,
        }
    }
}

/// Outcome of the consistency check. Advisory only: it never blocks an
/// operation, callers inspect `severity` and decide whether to warn.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsistencyReport {
    /// Calories estimated from the macros via Atwater factors.
    pub estimated_calories: f64,
    /// Absolute difference between estimated and declared.
    pub difference: f64,
    /// Difference as a percentage of declared calories; `None` when declared
    /// is zero and the relative comparison cannot run.
    pub percent_difference: Option<f64>,
    pub severity: ConsistencySeverity,
}

/// Estimate calories from macronutrients: 4 kcal/g for protein and carbs,
/// 9 kcal/g for fat.
pub fn estimate_calories(protein: f64, carbs: f64, fat: f64) -> f64 {
    protein * KCAL_PER_G_PROTEIN + carbs * KCAL_PER_G_CARBS + fat * KCAL_PER_G_FAT
}

/// Check declared calories against the Atwater estimate.
///
/// With zero declared calories the relative comparison is skipped: the
/// result is `Ok` unless the estimate exceeds the absolute floor, which is
/// reported as `Error` outright.
pub fn validate_calorie_consistency(
    declared_calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    thresholds: &ConsistencyThresholds,
) -> ConsistencyReport {
    let estimated = estimate_calories(protein, carbs, fat);
    let difference = (estimated - declared_calories).abs();

    if declared_calories == 0.0 {
        let severity = if estimated > thresholds.zero_declared_kcal_floor {
            ConsistencySeverity::Error
        } else {
            ConsistencySeverity::Ok
        };
        return ConsistencyReport {
            estimated_calories: estimated,
            difference,
            percent_difference: None,
            severity,
        };
    }

    let percent = difference / declared_calories * 100.0;
    let severity = if difference > declared_calories * thresholds.error_fraction {
        ConsistencySeverity::Error
    } else if difference > declared_calories * thresholds.warning_fraction {
        ConsistencySeverity::Warning
    } else {
        ConsistencySeverity::Ok
    };

    ConsistencyReport {
        estimated_calories: estimated,
        difference,
        percent_difference: Some(percent),
        severity,
    }
}

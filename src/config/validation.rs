//! Config validation: unknown-key detection with Levenshtein suggestions
//! and range checks on the correlation tunables.
//!
//! Two-pass parse approach: first deserialize raw TOML into `toml::Value`,
//! walk the key tree, compare against known field names, and emit warnings
//! with "did you mean?" suggestions. Then proceed with normal serde
//! deserialization. Warnings never break existing configs.

use std::collections::HashSet;

use super::CorrelationConfig;

/// A non-fatal config warning (typo, suspicious value).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " (did you mean '{s}'?)")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Config Keys
// ============================================================================

/// Returns the complete set of valid dotted key paths for `CorrelationConfig`.
///
/// Maintained by hand to match the structs in correlation_config.rs.
pub fn known_config_keys() -> HashSet<&'static str> {
    let keys: &[&str] = &[
        // [mapping]
        "mapping",
        "mapping.log_epsilon",
        // [similarity]
        "similarity",
        "similarity.method",
        "similarity.high_threshold",
        "similarity.medium_threshold",
        // [auto_pick]
        "auto_pick",
        "auto_pick.smoothing_half_window",
        "auto_pick.smoothing_kernel",
        "auto_pick.scan_margin",
        "auto_pick.prominence_half_window",
        "auto_pick.prominence_threshold",
        "auto_pick.max_confidence",
        "auto_pick.inflection_confidence",
        "auto_pick.debounce_distance",
        // [horizon]
        "horizon",
        "horizon.half_window",
        "horizon.step",
        "horizon.method",
        // [validation]
        "validation",
        "validation.max_null_ratio",
        "validation.neutron_max",
        "validation.depth_units",
    ];
    keys.iter().copied().collect()
}

// ============================================================================
// TOML Key Walking
// ============================================================================

/// Recursively walks a `toml::Value` tree and collects all dotted key paths.
///
/// For example, a table `{ a = { b = 1, c = 2 } }` yields:
/// `["a", "a.b", "a.c"]`
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    if let Some(table) = value.as_table() {
        for (k, v) in table {
            let path = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            keys.push(path.clone());
            if v.is_table() {
                keys.extend(walk_toml_keys(v, &path));
            }
        }
    }
    keys
}

// ============================================================================
// Levenshtein Distance
// ============================================================================

/// Compute the Levenshtein edit distance between two strings.
fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a.chars().count();
    }

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

/// Suggest the closest known key for an unknown key, if within edit distance 3.
///
/// Ties resolve to the lexicographically smallest key so output is stable.
pub fn suggest_correction(unknown: &str, known: &HashSet<&str>) -> Option<String> {
    known
        .iter()
        .map(|&k| (levenshtein(unknown, k), k))
        .filter(|(dist, _)| *dist <= 3)
        .min()
        .map(|(_, k)| k.to_string())
}

// ============================================================================
// Unknown Key Validation (entry point)
// ============================================================================

/// Parse a raw TOML string and return warnings for any unknown config keys.
///
/// This does NOT fail on unknown keys, it only warns. Parse errors are left
/// to the serde pass.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let Ok(value) = raw_toml.parse::<toml::Value>() else {
        return Vec::new();
    };

    let known = known_config_keys();
    walk_toml_keys(&value, "")
        .into_iter()
        .filter(|key| !known.contains(key.as_str()))
        .map(|key| ValidationWarning {
            suggestion: suggest_correction(&key, &known),
            message: format!("Unknown config key '{key}'"),
            field: key,
        })
        .collect()
}

// ============================================================================
// Range Validation
// ============================================================================

fn check_positive(value: f64, name: &str, errors: &mut Vec<String>) {
    if !value.is_finite() || value <= 0.0 {
        errors.push(format!("{name} = {value} must be a positive finite number"));
    }
}

fn check_unit_interval(value: f64, name: &str, errors: &mut Vec<String>) {
    if !(0.0..=1.0).contains(&value) {
        errors.push(format!("{name} = {value} must lie in [0, 1]"));
    }
}

/// Validate value ranges on a parsed `CorrelationConfig`.
///
/// Returns (errors, warnings): errors are values the algorithms cannot run
/// with; warnings are legal but unusual.
pub fn validate_ranges(config: &CorrelationConfig) -> (Vec<String>, Vec<ValidationWarning>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    check_positive(config.mapping.log_epsilon, "mapping.log_epsilon", &mut errors);

    check_unit_interval(config.similarity.high_threshold, "similarity.high_threshold", &mut errors);
    check_unit_interval(
        config.similarity.medium_threshold,
        "similarity.medium_threshold",
        &mut errors,
    );

    let ap = &config.auto_pick;
    if ap.smoothing_half_window == 0 {
        warnings.push(ValidationWarning {
            field: "auto_pick.smoothing_half_window".to_string(),
            message: "auto_pick.smoothing_half_window = 0 disables smoothing".to_string(),
            suggestion: None,
        });
    }
    if ap.scan_margin == 0 {
        errors.push("auto_pick.scan_margin must be at least 1 (neighbours are compared)".to_string());
    }
    if ap.prominence_half_window == 0 {
        errors.push("auto_pick.prominence_half_window must be at least 1".to_string());
    }
    if !ap.prominence_threshold.is_finite() || ap.prominence_threshold < 0.0 {
        errors.push(format!(
            "auto_pick.prominence_threshold = {} must be a non-negative finite number",
            ap.prominence_threshold
        ));
    }
    check_unit_interval(ap.max_confidence, "auto_pick.max_confidence", &mut errors);
    check_unit_interval(ap.inflection_confidence, "auto_pick.inflection_confidence", &mut errors);

    check_positive(config.horizon.half_window, "horizon.half_window", &mut errors);
    check_positive(config.horizon.step, "horizon.step", &mut errors);
    if config.horizon.step.is_finite()
        && config.horizon.half_window.is_finite()
        && config.horizon.step > config.horizon.window_width()
    {
        warnings.push(ValidationWarning {
            field: "horizon.step".to_string(),
            message: format!(
                "horizon.step ({}) is wider than the correlation window ({}); depth intervals will be skipped",
                config.horizon.step,
                config.horizon.window_width()
            ),
            suggestion: None,
        });
    }

    check_unit_interval(config.validation.max_null_ratio, "validation.max_null_ratio", &mut errors);
    check_positive(config.validation.neutron_max, "validation.neutron_max", &mut errors);

    (errors, warnings)
}

// ============================================================================
// Tests
// ============================================================================

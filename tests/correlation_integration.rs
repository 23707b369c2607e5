//! Correlation Integration Tests
//!
//! End-to-end runs over seeded synthetic wells: load, pick, score, suggest.

use wellcorr::config::CorrelationConfig;
use wellcorr::correlation::{compute_similarity, detect_well_picks, suggest_horizon, suggest_horizon_across};
use wellcorr::rendering::build_fill_path;
use wellcorr::synthetic::{correlated_wells, SyntheticWellBuilder};
use wellcorr::types::{
    ConfidenceLevel, DepthRange, FillKind, FillSpec, Marker, PatternType, SimilarityMethod, TrackConfig, Well,
};

const MARKER_DEPTH: f64 = 1080.0;
const SHIFT: f64 = 10.0;

fn wells(cfg: &CorrelationConfig) -> Vec<Well> {
    correlated_wells(4, 400, 11, MARKER_DEPTH, SHIFT)
        .into_iter()
        .map(|rec| Well::from_record(rec, &cfg.validation).unwrap())
        .collect()
}

#[test]
fn auto_pick_finds_the_synthetic_marker() {
    let cfg = CorrelationConfig::default();
    let well = &wells(&cfg)[0];

    let picks = detect_well_picks(well, "GR", PatternType::Peak, &cfg.auto_pick)
        .ok()
        .expect("marker bump should be picked");
    let marker = picks
        .iter()
        .find(|p| (p.depth - MARKER_DEPTH).abs() <= 1.0)
        .expect("a pick near the marker depth");
    assert!(marker.confidence > 0.2, "confidence {}", marker.confidence);
    assert!(marker.confidence <= 0.95);

    // scan order
    assert!(picks.windows(2).all(|w| w[0].index < w[1].index));
}

#[test]
fn missing_curve_pick_is_invalid() {
    let cfg = CorrelationConfig::default();
    let well = &wells(&cfg)[0];
    let out = detect_well_picks(well, "DT", PatternType::Trough, &cfg.auto_pick);
    assert!(out.is_invalid());
}

#[test]
fn same_window_scores_perfectly() {
    let cfg = CorrelationConfig::default();
    let all = wells(&cfg);
    let result = compute_similarity(
        &all[0],
        &all[0],
        "GR",
        1060.0,
        1100.0,
        SimilarityMethod::Pearson,
        &cfg.similarity,
    )
    .ok()
    .unwrap();
    assert!((result.score - 1.0).abs() < 1e-9);
    assert_eq!(result.confidence, ConfidenceLevel::High);
    assert_eq!(result.samples, 81);

    let euclid = compute_similarity(&all[0], &all[0], "GR", 1060.0, 1100.0, SimilarityMethod::Euclidean, &cfg.similarity)
        .ok()
        .unwrap();
    assert!((euclid.score - 1.0).abs() < f64::EPSILON);
}

#[test]
fn disjoint_depth_window_is_empty() {
    let cfg = CorrelationConfig::default();
    let all = wells(&cfg);
    let out = compute_similarity(&all[0], &all[1], "GR", 5000.0, 5100.0, SimilarityMethod::Pearson, &cfg.similarity);
    assert!(out.is_empty());
}

#[test]
fn horizon_suggestion_tracks_the_shift() {
    let cfg = CorrelationConfig::default();
    let all = wells(&cfg);
    let marker = Marker::manual(MARKER_DEPTH, "Marker A");

    let suggestion = suggest_horizon(&all[0], &all[2], &marker, "GR", &cfg.horizon, &cfg.similarity);
    let depth = suggestion.suggested_depth.expect("a suggestion");
    assert!(
        (depth - (MARKER_DEPTH + 2.0 * SHIFT)).abs() <= cfg.horizon.step / 2.0,
        "suggested {depth}"
    );
    assert!(suggestion.confidence > 0.7);
    assert_eq!(suggestion.name, "Marker A");
    assert!(suggestion.windows_scanned > 0);
}

#[test]
fn horizon_suggestion_across_wells_in_order() {
    let cfg = CorrelationConfig::default();
    let all = wells(&cfg);
    let (source, targets) = all.split_first().unwrap();
    let marker = Marker {
        name: None,
        ..Marker::manual(MARKER_DEPTH, "")
    };

    let suggestions = suggest_horizon_across(source, targets, &marker, "GR", &cfg.horizon, &cfg.similarity);
    assert_eq!(suggestions.len(), 3);
    for (k, s) in suggestions.iter().enumerate() {
        let expected = MARKER_DEPTH + (k + 1) as f64 * SHIFT;
        assert_eq!(s.target_well, targets[k].id());
        assert!(s.name.starts_with("Horizon @"));
        let depth = s.suggested_depth.unwrap();
        assert!((depth - expected).abs() <= cfg.horizon.step / 2.0, "well {k}: {depth} vs {expected}");
    }
}

/// The same geology logged top-down and bottom-up.
fn opposite_direction_pair(cfg: &CorrelationConfig) -> (Well, Well) {
    let down = SyntheticWellBuilder::new("DOWN").noise(0.0).marker(1100.0, 70.0).build();
    let up = SyntheticWellBuilder::new("UP")
        .noise(0.0)
        .marker(1100.0, 70.0)
        .top(1199.5)
        .step(-0.5)
        .build();
    (
        Well::from_record(down, &cfg.validation).unwrap(),
        Well::from_record(up, &cfg.validation).unwrap(),
    )
}

#[test]
fn similarity_ignores_logging_direction() {
    let cfg = CorrelationConfig::default();
    let (down, up) = opposite_direction_pair(&cfg);

    let result = compute_similarity(&down, &up, "GR", 1060.0, 1100.0, SimilarityMethod::Pearson, &cfg.similarity)
        .ok()
        .unwrap();
    assert_eq!(result.samples, 81);
    assert!((result.score - 1.0).abs() < 1e-9, "score {}", result.score);
}

#[test]
fn horizon_suggestion_ignores_logging_direction() {
    let cfg = CorrelationConfig::default();
    let (down, up) = opposite_direction_pair(&cfg);
    let marker = Marker::manual(1100.0, "Kink");

    for (source, target) in [(&down, &up), (&up, &down)] {
        let s = suggest_horizon(source, target, &marker, "GR", &cfg.horizon, &cfg.similarity);
        assert_eq!(s.suggested_depth, Some(1100.0), "{} -> {}", source.id(), target.id());
        assert!(s.confidence > 0.999, "confidence {}", s.confidence);
    }
}

#[test]
fn horizon_with_missing_curve_has_no_suggestion() {
    let cfg = CorrelationConfig::default();
    let all = wells(&cfg);
    let s = suggest_horizon(&all[0], &all[1], &Marker::manual(MARKER_DEPTH, "X"), "SP", &cfg.horizon, &cfg.similarity);
    assert_eq!(s.suggested_depth, None);
    assert!((s.confidence - (-1.0)).abs() < f64::EPSILON);

    let json = serde_json::to_value(&s).unwrap();
    assert!(json["suggestedDepth"].is_null());
    assert_eq!(json["source"], "Auto-Correlation");
}

#[test]
fn fill_over_gappy_synthetic_curve() {
    let cfg = CorrelationConfig::default();
    let rec = SyntheticWellBuilder::new("GAP").samples(120).null_every(4).build();
    let well = Well::from_record(rec, &cfg.validation).unwrap();
    let gr = well.curve("GR").unwrap();

    let track = TrackConfig::linear(150.0, 600.0, 0.0, 150.0);
    let spec = FillSpec::new(FillKind::Left).with_cutoff(75.0);
    let path = build_fill_path(&gr.data, None, &spec, &track, DepthRange::new(10, 50))
        .ok()
        .unwrap();

    assert!(path.is_closed());
    // baseline in, 41 samples minus 10 gaps, baseline out
    assert_eq!(path.vertices().count(), 2 + 31);
    let first = path.vertices().next().unwrap();
    assert!((first.0 - 75.0).abs() < 1e-9);
}

#[test]
fn well_file_round_trip() {
    let cfg = CorrelationConfig::default();
    let rec = SyntheticWellBuilder::new("DISK").samples(50).build();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("disk.json");
    std::fs::write(&path, serde_json::to_string(&rec).unwrap()).unwrap();

    let well = Well::load(&path, &cfg.validation).unwrap();
    assert_eq!(well.id(), "DISK");
    assert_eq!(well.len(), 50);
    assert_eq!(well.depth_unit(), Some("m"));
}

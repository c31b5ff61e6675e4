//! Tests for the composite score engine.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use wardrisk_model::{CovariateRequest, SuffixPolicy, expected_model_count};
use wardrisk_score::{ScoreEngine, ScoreError, compute_composite_scores, enumerate_models};

fn table(columns: Vec<(&str, Vec<Option<f64>>)>) -> DataFrame {
    let cols: Vec<Column> = columns
        .into_iter()
        .map(|(name, values)| Series::new(name.into(), values).into_column())
        .collect();
    DataFrame::new(cols).unwrap()
}

fn values(df: &DataFrame, name: &str) -> Vec<Option<f64>> {
    df.column(name).unwrap().f64().unwrap().into_iter().collect()
}

fn assert_close(actual: &[Option<f64>], expected: &[Option<f64>]) {
    assert_eq!(actual.len(), expected.len(), "length mismatch");
    for (row, (a, e)) in actual.iter().zip(expected).enumerate() {
        match (a, e) {
            (Some(a), Some(e)) => assert!((a - e).abs() < 1e-12, "row {row}: {a} != {e}"),
            (None, None) => {}
            _ => panic!("row {row}: {a:?} != {e:?}"),
        }
    }
}

fn names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect()
}

#[test]
fn perfectly_correlated_pair_yields_one_model() {
    let df = table(vec![
        ("A", vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0)]),
        ("B", vec![Some(10.0), Some(20.0), Some(30.0), Some(40.0)]),
    ]);

    let scores = compute_composite_scores(&df, &CovariateRequest::new(["A", "B"])).unwrap();

    let expected = [Some(0.0), Some(1.0 / 3.0), Some(2.0 / 3.0), Some(1.0)];
    assert_close(&values(&scores.table, "norm_A"), &expected);
    assert_close(&values(&scores.table, "norm_B"), &expected);
    assert_close(&values(&scores.table, "model_1"), &expected);
    assert_eq!(scores.models.len(), 1);
    assert_eq!(names(&scores.table), vec!["A", "B", "norm_A", "norm_B", "model_1"]);
}

#[test]
fn missing_values_propagate_into_composite() {
    let df = table(vec![
        ("A", vec![Some(1.0), Some(2.0), None, Some(4.0)]),
        ("B", vec![Some(5.0), None, Some(7.0), Some(8.0)]),
    ]);

    let scores = compute_composite_scores(&df, &CovariateRequest::new(["A", "B"])).unwrap();

    assert_close(
        &values(&scores.table, "norm_A"),
        &[Some(0.0), Some(1.0 / 3.0), None, Some(1.0)],
    );
    assert_close(
        &values(&scores.table, "norm_B"),
        &[Some(0.0), None, Some(2.0 / 3.0), Some(1.0)],
    );
    assert_close(
        &values(&scores.table, "model_1"),
        &[Some(0.0), None, None, Some(1.0)],
    );
}

#[test]
fn three_covariates_enumerate_in_fixed_order() {
    let df = table(vec![
        ("A", vec![Some(0.0), Some(1.0), Some(2.0)]),
        ("B", vec![Some(2.0), Some(0.0), Some(1.0)]),
        ("C", vec![Some(1.0), Some(2.0), Some(0.0)]),
    ]);

    let scores = compute_composite_scores(&df, &CovariateRequest::new(["A", "B", "C"])).unwrap();

    let subsets: Vec<Vec<String>> = scores.models.iter().map(|m| m.covariates.clone()).collect();
    assert_eq!(
        subsets,
        vec![
            vec!["A", "B"],
            vec!["A", "C"],
            vec!["B", "C"],
            vec!["A", "B", "C"],
        ]
    );
    let ids: Vec<usize> = scores.models.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);

    // norm_A = [0, .5, 1], norm_B = [1, 0, .5], norm_C = [.5, 1, 0]
    assert_close(
        &values(&scores.table, "model_2"),
        &[Some(0.25), Some(0.75), Some(0.5)],
    );
    assert_close(
        &values(&scores.table, "model_4"),
        &[Some(0.5), Some(0.5), Some(0.5)],
    );
}

#[test]
fn model_count_follows_formula() {
    let covariates = ["c1", "c2", "c3", "c4", "c5"];
    let df = table(
        covariates
            .iter()
            .enumerate()
            .map(|(i, name)| (*name, vec![Some(i as f64), Some(10.0), Some(-3.0)]))
            .collect(),
    );

    let scores = compute_composite_scores(&df, &CovariateRequest::new(covariates)).unwrap();

    assert_eq!(scores.models.len(), 26);
    assert_eq!(scores.models.len(), expected_model_count(5));
    assert_eq!(scores.table.width(), 5 + 5 + 26);
    assert_eq!(scores.models.last().unwrap().column_name(), "model_26");
    assert!(scores.table.column("model_26").is_ok());
    assert!(scores.table.column("model_27").is_err());
}

#[test]
fn too_few_covariates_fails_before_any_work() {
    let df = table(vec![
        ("A", vec![Some(1.0), Some(2.0)]),
        ("unused", vec![Some(3.0), Some(4.0)]),
    ]);

    let err = compute_composite_scores(&df, &CovariateRequest::new(["A", "not_there"])).unwrap_err();

    assert!(matches!(err, ScoreError::TooFewCovariates { found: 1, .. }));
    assert!(err.to_string().contains("found 1"));
    assert_eq!(df.width(), 2);
}

#[test]
fn requested_settlement_column_must_exist() {
    let df = table(vec![
        ("A", vec![Some(1.0), Some(2.0)]),
        ("B", vec![Some(3.0), Some(4.0)]),
    ]);
    let request = CovariateRequest::new(["A", "B"]).with_settlement(true);

    let err = compute_composite_scores(&df, &request).unwrap_err();

    assert!(matches!(err, ScoreError::MissingColumn { ref column } if column == "settlement_type"));
}

#[test]
fn settlement_and_prevalence_join_the_covariates() {
    let df = table(vec![
        ("mean_EVI", vec![Some(0.2), Some(0.4), Some(0.6)]),
        ("settlement_type", vec![Some(1.0), Some(2.0), Some(3.0)]),
        ("u5_tpr_rdt", vec![Some(0.3), Some(0.1), Some(0.2)]),
    ]);
    let request = CovariateRequest::new(["mean_EVI"])
        .with_settlement(true)
        .with_prevalence(Some("u5_tpr_rdt".to_string()));

    let scores = compute_composite_scores(&df, &request).unwrap();

    assert_eq!(
        scores.covariate_names(),
        vec!["mean_EVI", "settlement_type", "u5_tpr_rdt"]
    );
    assert_eq!(scores.models.len(), 4);
    assert_eq!(
        scores.model(3).unwrap().covariates,
        vec!["settlement_type", "u5_tpr_rdt"]
    );
}

#[test]
fn zero_variance_covariate_yields_nan() {
    let df = table(vec![
        ("A", vec![Some(1.0), Some(2.0), Some(3.0)]),
        ("C", vec![Some(5.0), Some(5.0), None]),
    ]);

    let scores = compute_composite_scores(&df, &CovariateRequest::new(["A", "C"])).unwrap();

    let norm_c = values(&scores.table, "norm_C");
    assert!(norm_c[0].unwrap().is_nan());
    assert!(norm_c[1].unwrap().is_nan());
    assert_eq!(norm_c[2], None);

    let model = values(&scores.table, "model_1");
    assert!(model[0].unwrap().is_nan());
    assert_eq!(model[2], None);

    assert!(!scores.covariates[0].is_degenerate());
    assert!(scores.covariates[1].is_degenerate());
    assert_eq!(scores.covariates[1].non_missing, 2);
}

#[test]
fn rerun_is_identical() {
    let df = table(vec![
        ("A", vec![Some(1.0), None, Some(3.0), Some(8.0)]),
        ("B", vec![Some(4.0), Some(2.0), Some(9.0), None]),
        ("C", vec![Some(0.5), Some(0.7), Some(0.1), Some(0.2)]),
    ]);
    let request = CovariateRequest::new(["A", "B", "C"]);

    let first = compute_composite_scores(&df, &request).unwrap();
    let second = compute_composite_scores(&df, &request).unwrap();

    assert!(first.table.equals_missing(&second.table));
    assert_eq!(first.models, second.models);

    // Scoring an already scored table replaces the generated columns.
    let rescored = compute_composite_scores(&first.table, &request).unwrap();
    assert!(rescored.table.equals_missing(&first.table));
}

#[test]
fn output_keeps_rows_and_cleans_merge_suffixes() {
    let mut cols = vec![
        Series::new("WardName.x".into(), vec!["Agaie", "Baro", "Chanchaga"]).into_column(),
        Series::new("WardName.y".into(), vec!["AGAIE", "BARO", "CHANCHAGA"]).into_column(),
    ];
    cols.push(Series::new("A".into(), vec![1.0, 2.0, 3.0]).into_column());
    cols.push(Series::new("B".into(), vec![3.0, 1.0, 2.0]).into_column());
    let df = DataFrame::new(cols).unwrap();

    let scores = compute_composite_scores(&df, &CovariateRequest::new(["A", "B"])).unwrap();

    assert_eq!(
        names(&scores.table),
        vec!["WardName", "A", "B", "norm_A", "norm_B", "model_1"]
    );
    assert_eq!(scores.table.height(), 3);
    let wards = scores.table.column("WardName").unwrap().str().unwrap();
    assert_eq!(wards.get(2), Some("Chanchaga"));
}

#[test]
fn custom_suffix_policy_is_used() {
    let df = table(vec![
        ("A_left", vec![Some(1.0), Some(2.0)]),
        ("A_right", vec![Some(9.0), Some(9.0)]),
        ("B", vec![Some(5.0), Some(6.0)]),
    ]);
    let engine = ScoreEngine::new().with_suffix_policy(SuffixPolicy::new("_left", "_right").unwrap());

    let scores = engine
        .run(&df, &CovariateRequest::new(["A_left", "B"]))
        .unwrap();

    // A_left is a scored covariate and keeps its name; A_right is a join leftover.
    assert_eq!(
        names(&scores.table),
        vec!["A_left", "B", "norm_A_left", "norm_B", "model_1"]
    );
}

#[test]
fn unsuffixed_column_wins_over_primary_suffix() {
    let cols = vec![
        Series::new("WardName".into(), vec!["Agaie", "Baro"]).into_column(),
        Series::new("WardName.x".into(), vec!["Zungeru", "Yelwa"]).into_column(),
        Series::new("A".into(), vec![1.0, 2.0]).into_column(),
        Series::new("B".into(), vec![4.0, 3.0]).into_column(),
    ];
    let df = DataFrame::new(cols).unwrap();

    let scores = compute_composite_scores(&df, &CovariateRequest::new(["A", "B"])).unwrap();

    assert_eq!(
        names(&scores.table),
        vec!["WardName", "A", "B", "norm_A", "norm_B", "model_1"]
    );
    let wards = scores.table.column("WardName").unwrap().str().unwrap();
    assert_eq!(wards.get(0), Some("Agaie"));
    assert_eq!(wards.get(1), Some("Baro"));
}

#[test]
fn suffixed_covariates_keep_their_generated_columns() {
    let df = table(vec![
        ("A", vec![Some(1.0), Some(2.0), Some(3.0)]),
        ("mean_EVI.x", vec![Some(0.2), Some(0.4), Some(0.6)]),
        ("B.y", vec![Some(30.0), Some(10.0), Some(20.0)]),
    ]);

    let scores =
        compute_composite_scores(&df, &CovariateRequest::new(["A", "mean_EVI.x", "B.y"])).unwrap();

    assert_eq!(
        names(&scores.table),
        vec![
            "A",
            "mean_EVI.x",
            "B.y",
            "norm_A",
            "norm_mean_EVI.x",
            "norm_B.y",
            "model_1",
            "model_2",
            "model_3",
            "model_4",
        ]
    );
    for summary in &scores.covariates {
        assert!(
            scores.table.column(&summary.normalized_column).is_ok(),
            "{} missing from output",
            summary.normalized_column
        );
    }
    for model in &scores.models {
        assert!(scores.table.column(&model.column_name()).is_ok());
        for column in model.normalized_columns() {
            assert!(scores.table.column(&column).is_ok(), "{column} missing from output");
        }
    }
    assert_close(
        &values(&scores.table, "norm_B.y"),
        &[Some(1.0), Some(0.0), Some(0.5)],
    );
}

#[test]
fn engine_models_match_standalone_listing() {
    let df = table(vec![
        ("A", vec![Some(1.0), Some(2.0)]),
        ("B", vec![Some(2.0), Some(1.0)]),
        ("C", vec![Some(5.0), Some(7.0)]),
        ("D", vec![Some(0.1), Some(0.3)]),
    ]);
    let covariates: Vec<String> = ["A", "B", "C", "D"].map(String::from).to_vec();

    let scores = compute_composite_scores(&df, &CovariateRequest::new(covariates.clone())).unwrap();

    assert_eq!(scores.models, enumerate_models(&covariates));
}

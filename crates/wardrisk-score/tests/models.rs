//! Snapshot of the model numbering contract.

use wardrisk_score::enumerate_models;

#[test]
fn model_listing_for_four_covariates() {
    let covariates: Vec<String> = ["mean_EVI", "mean_rainfall", "distance_to_water", "settlement_type"]
        .iter()
        .map(|name| (*name).to_string())
        .collect();

    let listing = enumerate_models(&covariates)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(listing, @r"
    model_1: mean_EVI + mean_rainfall
    model_2: mean_EVI + distance_to_water
    model_3: mean_EVI + settlement_type
    model_4: mean_rainfall + distance_to_water
    model_5: mean_rainfall + settlement_type
    model_6: distance_to_water + settlement_type
    model_7: mean_EVI + mean_rainfall + distance_to_water
    model_8: mean_EVI + mean_rainfall + settlement_type
    model_9: mean_EVI + distance_to_water + settlement_type
    model_10: mean_rainfall + distance_to_water + settlement_type
    model_11: mean_EVI + mean_rainfall + distance_to_water + settlement_type
    ");
}

#[test]
fn fewer_than_two_covariates_have_no_models() {
    assert!(enumerate_models(&[]).is_empty());
    assert!(enumerate_models(&["only".to_string()]).is_empty());
}

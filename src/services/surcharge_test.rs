use super::*;
use crate::state::test_helpers;

fn fuel_input() -> CreateSurcharge {
    CreateSurcharge {
        name: "  Fuel  ".into(),
        amount: 10.0,
        surcharge_type: SurchargeType::Percentage,
        active: true,
        carriers: vec!["fedex".into(), " ".into(), " ups ".into()],
        services: Vec::new(),
        carrier_accounts: Vec::new(),
    }
}

#[tokio::test]
async fn create_trims_name_and_cleans_lists() {
    let state = test_helpers::test_app_state();
    let created = create_surcharge(&state, fuel_input()).await.unwrap();

    assert_eq!(created.name, "Fuel");
    assert_eq!(created.carriers, vec!["fedex".to_string(), "ups".to_string()]);
    assert!(created.services.is_empty());
    assert_eq!(get_surcharge(&state, created.id).await.unwrap(), created);
}

#[tokio::test]
async fn create_rejects_blank_name() {
    let state = test_helpers::test_app_state();
    let input = CreateSurcharge { name: "   ".into(), ..fuel_input() };

    let err = create_surcharge(&state, input).await.unwrap_err();
    assert_eq!(err, SurchargeError::Invalid("name is required"));
    assert!(list_surcharges(&state).await.is_empty());
}

#[tokio::test]
async fn create_rejects_negative_and_non_finite_amounts() {
    let state = test_helpers::test_app_state();
    for amount in [-1.0, f64::NAN, f64::INFINITY] {
        let input = CreateSurcharge { amount, ..fuel_input() };
        assert!(matches!(create_surcharge(&state, input).await, Err(SurchargeError::Invalid(_))));
    }
    assert!(list_surcharges(&state).await.is_empty());
}

#[tokio::test]
async fn create_accepts_zero_amount() {
    let state = test_helpers::test_app_state();
    let input = CreateSurcharge { amount: 0.0, ..fuel_input() };
    assert!(create_surcharge(&state, input).await.is_ok());
}

#[tokio::test]
async fn list_is_sorted_by_name_case_insensitively() {
    let state = test_helpers::test_app_state();
    test_helpers::seed_surcharge(&state, "residential").await;
    test_helpers::seed_surcharge(&state, "Fuel").await;
    test_helpers::seed_surcharge(&state, "Oversize").await;

    let names: Vec<String> = list_surcharges(&state).await.into_iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["Fuel", "Oversize", "residential"]);
}

#[tokio::test]
async fn get_unknown_id_is_not_found() {
    let state = test_helpers::test_app_state();
    let id = Uuid::new_v4();
    assert_eq!(get_surcharge(&state, id).await.unwrap_err(), SurchargeError::NotFound(id));
}

#[tokio::test]
async fn update_only_changes_provided_fields() {
    let state = test_helpers::test_app_state();
    let id = test_helpers::seed_surcharge(&state, "Fuel").await;
    let before = get_surcharge(&state, id).await.unwrap();

    let patch = SurchargePatch { amount: Some(7.0), active: Some(false), ..SurchargePatch::default() };
    let updated = update_surcharge(&state, id, patch).await.unwrap();

    assert!((updated.amount - 7.0).abs() < f64::EPSILON);
    assert!(!updated.active);
    assert_eq!(updated.name, before.name);
    assert_eq!(updated.surcharge_type, before.surcharge_type);
    assert_eq!(updated.carriers, before.carriers);
}

#[tokio::test]
async fn update_keeps_carrier_accounts_when_patch_list_is_empty() {
    let state = test_helpers::test_app_state();
    let input = CreateSurcharge { carrier_accounts: vec!["acct_1".into()], ..fuel_input() };
    let created = create_surcharge(&state, input).await.unwrap();

    let kept = update_surcharge(&state, created.id, SurchargePatch::default()).await.unwrap();
    assert_eq!(kept.carrier_accounts, vec!["acct_1".to_string()]);

    let patch = SurchargePatch { carrier_accounts: vec!["acct_2".into()], ..SurchargePatch::default() };
    let replaced = update_surcharge(&state, created.id, patch).await.unwrap();
    assert_eq!(replaced.carrier_accounts, vec!["acct_2".to_string()]);
}

#[tokio::test]
async fn update_with_invalid_field_writes_nothing() {
    let state = test_helpers::test_app_state();
    let id = test_helpers::seed_surcharge(&state, "Fuel").await;

    let patch = SurchargePatch { name: Some("Renamed".into()), amount: Some(-3.0), ..SurchargePatch::default() };
    assert!(matches!(update_surcharge(&state, id, patch).await, Err(SurchargeError::Invalid(_))));
    assert_eq!(get_surcharge(&state, id).await.unwrap().name, "Fuel");
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let state = test_helpers::test_app_state();
    let id = Uuid::new_v4();
    let err = update_surcharge(&state, id, SurchargePatch::default()).await.unwrap_err();
    assert_eq!(err, SurchargeError::NotFound(id));
}

#[tokio::test]
async fn delete_removes_and_second_delete_is_not_found() {
    let state = test_helpers::test_app_state();
    let id = test_helpers::seed_surcharge(&state, "Fuel").await;

    delete_surcharge(&state, id).await.unwrap();
    assert!(list_surcharges(&state).await.is_empty());
    assert_eq!(delete_surcharge(&state, id).await.unwrap_err(), SurchargeError::NotFound(id));
}

#[tokio::test]
async fn seed_demo_inserts_valid_surcharges() {
    let state = test_helpers::test_app_state();
    let seeded = seed_demo(&state).await;

    assert_eq!(seeded.len(), 2);
    assert_eq!(list_surcharges(&state).await.len(), 2);
    assert!(seeded.iter().any(|s| s.surcharge_type == SurchargeType::Percentage));
}

#[test]
fn patch_deserializes_with_missing_fields() {
    let patch: SurchargePatch = serde_json::from_str(r#"{"active":false}"#).unwrap();
    assert_eq!(patch.active, Some(false));
    assert!(patch.name.is_none());
    assert!(patch.carrier_accounts.is_empty());
}

#[test]
fn create_defaults_active_and_lists() {
    let input: CreateSurcharge =
        serde_json::from_str(r#"{"name":"Fuel","amount":1.5,"surcharge_type":"AMOUNT"}"#).unwrap();
    assert!(input.active);
    assert!(input.carriers.is_empty());
    assert!(input.carrier_accounts.is_empty());
}

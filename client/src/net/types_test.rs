use super::*;

// =============================================================
// SurchargeType
// =============================================================

#[test]
fn surcharge_type_default_is_amount() {
    assert_eq!(SurchargeType::default(), SurchargeType::Amount);
}

#[test]
fn surcharge_type_serializes_upper_case() {
    assert_eq!(serde_json::to_value(SurchargeType::Amount).unwrap(), serde_json::json!("AMOUNT"));
    assert_eq!(serde_json::to_value(SurchargeType::Percentage).unwrap(), serde_json::json!("PERCENTAGE"));
}

#[test]
fn surcharge_type_parse_matches_as_str() {
    for kind in [SurchargeType::Amount, SurchargeType::Percentage] {
        assert_eq!(SurchargeType::parse(kind.as_str()), Some(kind));
    }
    assert_eq!(SurchargeType::parse("percentage"), None);
    assert_eq!(SurchargeType::parse(""), None);
}

// =============================================================
// Surcharge
// =============================================================

#[test]
fn surcharge_deserializes_server_payload() {
    let json = serde_json::json!({
        "id": "0b0c6a4e-6d6f-4c55-9d37-2ad1a4d2b0b1",
        "name": "Fuel",
        "amount": 2.5,
        "surcharge_type": "PERCENTAGE",
        "active": true,
        "carriers": ["fedex"],
        "services": [],
        "carrier_accounts": ["acc-1"]
    });
    let surcharge: Surcharge = serde_json::from_value(json).unwrap();
    assert_eq!(surcharge.name, "Fuel");
    assert!((surcharge.amount - 2.5).abs() < f64::EPSILON);
    assert_eq!(surcharge.surcharge_type, SurchargeType::Percentage);
    assert_eq!(surcharge.carriers, vec!["fedex".to_owned()]);
    assert!(surcharge.services.is_empty());
}

#[test]
fn surcharge_lists_default_to_empty() {
    let json = serde_json::json!({
        "id": "s-1",
        "name": "Handling",
        "amount": 5,
        "surcharge_type": "AMOUNT",
        "active": false
    });
    let surcharge: Surcharge = serde_json::from_value(json).unwrap();
    assert!(surcharge.carriers.is_empty());
    assert!(surcharge.services.is_empty());
    assert!((surcharge.amount - 5.0).abs() < f64::EPSILON);
}

#[test]
fn surcharge_accepts_string_amount() {
    let json = serde_json::json!({
        "id": "s-1",
        "name": "Handling",
        "amount": " 7.25 ",
        "surcharge_type": "AMOUNT",
        "active": true
    });
    let surcharge: Surcharge = serde_json::from_value(json).unwrap();
    assert!((surcharge.amount - 7.25).abs() < f64::EPSILON);
}

#[test]
fn surcharge_rejects_non_numeric_amount() {
    let json = serde_json::json!({
        "id": "s-1",
        "name": "Handling",
        "amount": "seven",
        "surcharge_type": "AMOUNT",
        "active": true
    });
    assert!(serde_json::from_value::<Surcharge>(json).is_err());
}

#[test]
fn surcharge_rejects_unknown_type() {
    let json = serde_json::json!({
        "id": "s-1",
        "name": "Handling",
        "amount": 1,
        "surcharge_type": "FLAT",
        "active": true
    });
    assert!(serde_json::from_value::<Surcharge>(json).is_err());
}

// =============================================================
// SurchargeInput
// =============================================================

#[test]
fn surcharge_input_serializes_all_fields() {
    let input = SurchargeInput {
        name: "Fuel".to_owned(),
        amount: 3.0,
        surcharge_type: SurchargeType::Amount,
        active: true,
        carriers: vec!["ups".to_owned()],
        services: vec![],
    };
    assert_eq!(
        serde_json::to_value(&input).unwrap(),
        serde_json::json!({
            "name": "Fuel",
            "amount": 3.0,
            "surcharge_type": "AMOUNT",
            "active": true,
            "carriers": ["ups"],
            "services": []
        })
    );
}

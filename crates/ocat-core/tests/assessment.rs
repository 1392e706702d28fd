use jiff::civil::date;
use serde_json::json;

use ocat_core::error::CoreError;
use ocat_core::models::assessment::{Assessment, CreateAssessmentRequest, NewAssessment};
use ocat_core::models::risk::RiskLevel;

fn request(value: serde_json::Value) -> CreateAssessmentRequest {
    serde_json::from_value(value).unwrap()
}

#[test]
fn complete_request_converts() {
    let req = request(json!({
        "catName": "Whiskers",
        "catDateOfBirth": "2020-01-01",
        "instrumentType": 1,
        "score": 2,
        "riskLevel": "medium",
    }));

    let new = NewAssessment::try_from(req).unwrap();
    assert_eq!(new.cat_name, "Whiskers");
    assert_eq!(new.cat_date_of_birth, date(2020, 1, 1));
    assert_eq!(new.instrument_type, 1);
    assert_eq!(new.score, 2);
    assert_eq!(new.risk_level, RiskLevel::Medium);
}

#[test]
fn missing_field_is_named() {
    let req = request(json!({
        "catName": "Whiskers",
        "instrumentType": 1,
        "score": 2,
        "riskLevel": "medium",
    }));

    let err = NewAssessment::try_from(req).unwrap_err();
    assert!(matches!(err, CoreError::MissingField("catDateOfBirth")));
}

#[test]
fn blank_name_counts_as_missing() {
    let req = request(json!({
        "catName": "   ",
        "catDateOfBirth": "2020-01-01",
        "instrumentType": 1,
        "score": 0,
        "riskLevel": "low",
    }));

    let err = NewAssessment::try_from(req).unwrap_err();
    assert!(matches!(err, CoreError::MissingField("catName")));
}

#[test]
fn inconsistent_risk_is_rejected() {
    let req = request(json!({
        "catName": "Tom",
        "catDateOfBirth": "2019-05-04",
        "instrumentType": 1,
        "score": 5,
        "riskLevel": "low",
    }));

    let err = NewAssessment::try_from(req).unwrap_err();
    assert!(matches!(
        err,
        CoreError::RiskMismatch {
            score: 5,
            expected: RiskLevel::High,
            actual: RiskLevel::Low,
        }
    ));
}

#[test]
fn score_above_five_is_rejected() {
    let new = NewAssessment {
        cat_name: "Tom".to_string(),
        cat_date_of_birth: date(2019, 5, 4),
        instrument_type: 1,
        score: 6,
        risk_level: RiskLevel::High,
    };
    assert!(matches!(new.validate(), Err(CoreError::ScoreOutOfRange(6))));
}

#[test]
fn scored_derives_risk() {
    let new = NewAssessment::scored("Tom", date(2019, 5, 4), 1, 4);
    assert_eq!(new.risk_level, RiskLevel::High);
    assert!(new.validate().is_ok());
}

#[test]
fn assessment_uses_camel_case_on_the_wire() {
    let assessment = Assessment {
        id: 7,
        cat_name: "Whiskers".to_string(),
        cat_date_of_birth: date(2020, 1, 1),
        instrument_type: 1,
        score: 2,
        risk_level: RiskLevel::Medium,
        created_at: "2024-03-01T12:00:00Z".parse().unwrap(),
        deleted_at: None,
    };

    let value = serde_json::to_value(&assessment).unwrap();
    assert_eq!(value["id"], 7);
    assert_eq!(value["catName"], "Whiskers");
    assert_eq!(value["catDateOfBirth"], "2020-01-01");
    assert_eq!(value["instrumentType"], 1);
    assert_eq!(value["riskLevel"], "medium");
    assert!(value["deletedAt"].is_null());

    let back: Assessment = serde_json::from_value(value).unwrap();
    assert_eq!(back, assessment);
    assert!(back.deleted_at.is_none());
}

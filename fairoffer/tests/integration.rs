//! Integration tests for the fairoffer questionnaire engine.

use fairoffer::{
    AnswerPatch, AnswerRecord, Condition, ContactMethod, FieldId, MemoryStore, PropertyType,
    QuestionnaireSession, Step, SubmissionPipeline, TOTAL_STEPS, Timeline, details_fields,
    validate_step,
};

/// Advance the session one step, insisting the current step validates clean.
fn advance(session: &mut QuestionnaireSession) {
    let errors = validate_step(session.current_step(), session.record());
    assert!(
        errors.is_empty(),
        "step {} should be valid, got: {errors:?}",
        session.current_step().index()
    );
    session.next_step();
}

/// Fill a session the way a seller of a residential home would.
fn filled_residential_session() -> QuestionnaireSession {
    let mut session = QuestionnaireSession::new();

    session.update(AnswerPatch {
        property_type: Some(PropertyType::Residential),
        ..AnswerPatch::default()
    });
    advance(&mut session);

    session.update(AnswerPatch {
        address: Some("1247 Oak Valley Dr".to_string()),
        city: Some("Austin".to_string()),
        state: Some("TX".to_string()),
        zip_code: Some("78704".to_string()),
        ..AnswerPatch::default()
    });
    advance(&mut session);

    session.update(AnswerPatch {
        subtype: Some("Single Family Home".to_string()),
        square_footage: Some("2450".to_string()),
        year_built: Some("2019".to_string()),
        bedrooms: Some("4".to_string()),
        bathrooms: Some("3".to_string()),
        ..AnswerPatch::default()
    });
    advance(&mut session);

    session.update(AnswerPatch {
        condition: Some(Condition::Good),
        ..AnswerPatch::default()
    });
    session.toggle_recent_update("New Roof");
    session.toggle_special_feature("Garage");
    advance(&mut session);

    session.update(AnswerPatch {
        current_value: Some("$250,000 - $500,000".to_string()),
        mortgage_balance: Some("$100,000 - $250,000".to_string()),
        reason_for_selling: Some("Relocating for work".to_string()),
        ..AnswerPatch::default()
    });
    advance(&mut session);

    session.update(AnswerPatch {
        desired_timeline: Some(Timeline::Days30),
        ..AnswerPatch::default()
    });
    advance(&mut session);

    session.update(AnswerPatch {
        first_name: Some("John".to_string()),
        last_name: Some("Smith".to_string()),
        email: Some("john.smith@email.com".to_string()),
        phone: Some("+15551234567".to_string()),
        preferred_contact: Some(ContactMethod::Email),
        ..AnswerPatch::default()
    });
    advance(&mut session);

    assert_eq!(session.current_step(), Step::Additional);
    session.update(AnswerPatch {
        additional_info: Some("Selling due to job relocation.".to_string()),
        ..AnswerPatch::default()
    });
    session
}

#[tokio::test]
async fn full_residential_run_submits_with_the_expected_offer() {
    let session = filled_residential_session();
    assert!(validate_step(session.current_step(), session.record()).is_empty());

    let store = MemoryStore::new();
    let pipeline = SubmissionPipeline::new();
    let result = pipeline
        .submit("questionnaireSubmission", session.record(), &store)
        .await
        .expect("submission should succeed");

    // $250,000 - $500,000 in good condition: 375_000 * 0.90.
    assert_eq!(result.estimated_offer, 337_500);
    assert_eq!(result.record.first_name, "John");
    assert!(result.record.recent_updates.contains("New Roof"));

    let stored = store.get("questionnaireSubmission").await.unwrap();
    assert_eq!(stored, result);
}

#[test]
fn every_property_type_reaches_the_details_step() {
    for property_type in PropertyType::ALL {
        let mut session = QuestionnaireSession::new();
        session.update(AnswerPatch {
            property_type: Some(property_type),
            ..AnswerPatch::default()
        });
        advance(&mut session);

        session.update(AnswerPatch {
            address: Some("500 West 2nd St".to_string()),
            city: Some("Austin".to_string()),
            state: Some("TX".to_string()),
            zip_code: Some("78701".to_string()),
            ..AnswerPatch::default()
        });
        advance(&mut session);

        // Details step gates on the subtype alone, whatever the variant.
        let errors = validate_step(session.current_step(), session.record());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, FieldId::Subtype);

        session.update(AnswerPatch {
            subtype: Some(fairoffer::subtype_options(property_type)[0].to_string()),
            ..AnswerPatch::default()
        });
        advance(&mut session);
        assert_eq!(session.current_step(), Step::Condition);
    }
}

#[test]
fn required_details_are_exactly_the_subtype_for_all_variants() {
    for property_type in PropertyType::ALL {
        let fields = details_fields(property_type);
        assert_eq!(fields.required, [FieldId::Subtype]);
        for field in fields.required {
            assert!(fields.visible.contains(field));
        }
    }
}

#[test]
fn navigation_clamps_and_back_never_validates() {
    let mut session = QuestionnaireSession::new();

    // Backward from step one is a no-op.
    session.prev_step();
    assert_eq!(session.current_step().index(), 1);

    // A seller with invalid data can still navigate backwards freely.
    session.set_step(7);
    session.prev_step();
    assert_eq!(session.current_step(), Step::Timeline);

    session.set_step(TOTAL_STEPS);
    session.next_step();
    assert_eq!(session.current_step().index(), TOTAL_STEPS);
}

#[test]
fn reset_discards_everything() {
    let mut session = filled_residential_session();
    session.reset();

    assert_eq!(session.current_step().index(), 1);
    assert_eq!(session.record(), &AnswerRecord::default());
}

#[tokio::test]
async fn estimate_fallback_path_survives_submission() {
    // A record restored with a label the options no longer offer still
    // produces an offer: 200_000 * 0.85.
    let record = AnswerRecord {
        current_value: "unknown-label".to_string(),
        ..AnswerRecord::default()
    };

    let store = MemoryStore::new();
    let result = SubmissionPipeline::new()
        .submit("restored", &record, &store)
        .await
        .unwrap();
    assert_eq!(result.estimated_offer, 170_000);
}

#[test]
fn switching_property_type_keeps_the_flow_valid() {
    let mut session = filled_residential_session();

    // Seller changes their mind late; stale residential detail fields must
    // not block the business flow.
    session.update(AnswerPatch {
        property_type: Some(PropertyType::Business),
        subtype: Some("Technology".to_string()),
        ..AnswerPatch::default()
    });
    session.set_step(3);
    assert!(validate_step(session.current_step(), session.record()).is_empty());
}

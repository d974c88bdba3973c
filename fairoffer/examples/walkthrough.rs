//! Drives a full questionnaire session programmatically, the way a
//! presentation layer would, and prints the resulting offer.

use fairoffer::{
    AnswerPatch, Condition, ContactMethod, MemoryStore, PropertyType, QuestionnaireSession,
    SubmissionPipeline, Timeline, validate_step,
};

fn advance(session: &mut QuestionnaireSession) {
    let errors = validate_step(session.current_step(), session.record());
    if errors.is_empty() {
        session.next_step();
        return;
    }
    for error in errors {
        eprintln!("  {error}");
    }
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut session = QuestionnaireSession::new();

    session.update(AnswerPatch {
        property_type: Some(PropertyType::Residential),
        ..AnswerPatch::default()
    });
    advance(&mut session);

    session.update(AnswerPatch {
        address: Some("2105 E Cesar Chavez St".to_string()),
        city: Some("Austin".to_string()),
        state: Some("TX".to_string()),
        zip_code: Some("78702".to_string()),
        ..AnswerPatch::default()
    });
    advance(&mut session);

    session.update(AnswerPatch {
        subtype: Some("Single Family Home".to_string()),
        square_footage: Some("1100".to_string()),
        year_built: Some("1945".to_string()),
        bedrooms: Some("2".to_string()),
        bathrooms: Some("1".to_string()),
        ..AnswerPatch::default()
    });
    advance(&mut session);

    session.update(AnswerPatch {
        condition: Some(Condition::Fair),
        ..AnswerPatch::default()
    });
    session.toggle_recent_update("Fresh Paint");
    session.toggle_special_feature("Deck/Patio");
    advance(&mut session);

    session.update(AnswerPatch {
        current_value: Some("$250,000 - $500,000".to_string()),
        mortgage_balance: Some("Under $50,000".to_string()),
        reason_for_selling: Some("Downsizing".to_string()),
        ..AnswerPatch::default()
    });
    advance(&mut session);

    session.update(AnswerPatch {
        desired_timeline: Some(Timeline::Days60),
        ..AnswerPatch::default()
    });
    advance(&mut session);

    session.update(AnswerPatch {
        first_name: Some("Elena".to_string()),
        last_name: Some("Rodriguez".to_string()),
        email: Some("elena@example.com".to_string()),
        phone: Some("+15125550103".to_string()),
        preferred_contact: Some(ContactMethod::Text),
        ..AnswerPatch::default()
    });
    advance(&mut session);

    session.update(AnswerPatch {
        additional_info: Some("Looking for a quick, simple sale.".to_string()),
        ..AnswerPatch::default()
    });

    let store = MemoryStore::new();
    let pipeline = SubmissionPipeline::new();
    let result = pipeline
        .submit("questionnaireSubmission", session.record(), &store)
        .await?;

    println!(
        "Thanks {}! Your provisional cash offer: ${}",
        result.record.first_name, result.estimated_offer
    );
    if let Some(timeline) = result.record.desired_timeline {
        println!("Closing: {}", timeline.description());
    }
    Ok(())
}

use crate::{
    AnswerRecord, CURRENT_VALUE_RANGES, FieldError, FieldId, SELLING_REASONS, Step, schema,
};

/// Check the current step's required fields against the record.
///
/// Returns one [`FieldError`] per unmet rule; an empty list means the step
/// is valid and the caller may advance. Fields that are not part of the
/// step, and detail fields outside the chosen property type's visible set,
/// are never checked — stale values from an earlier discriminant choice
/// cannot block the flow.
pub fn validate_step(step: Step, record: &AnswerRecord) -> Vec<FieldError> {
    let mut errors = Vec::new();

    match step {
        Step::PropertyType => {
            if record.property_type.is_none() {
                errors.push(FieldError::new(
                    FieldId::PropertyType,
                    "Please select a property type",
                ));
            }
        }
        Step::BasicInfo => {
            require_text(&mut errors, FieldId::Address, &record.address, "Address is required");
            require_text(&mut errors, FieldId::City, &record.city, "City is required");
            require_text(&mut errors, FieldId::State, &record.state, "State is required");
            if record.zip_code.trim().is_empty() {
                errors.push(FieldError::new(FieldId::ZipCode, "ZIP code is required"));
            } else if !is_valid_zip(&record.zip_code) {
                errors.push(FieldError::new(FieldId::ZipCode, "Invalid ZIP code format"));
            }
        }
        Step::PropertyDetails => {
            // The registry cannot be asked for a field set without the
            // discriminant, so an unset property type surfaces here as a
            // step-one error instead of a panic.
            let Some(property_type) = record.property_type else {
                errors.push(FieldError::new(
                    FieldId::PropertyType,
                    "Please select a property type",
                ));
                return errors;
            };
            for &field in schema::details_fields(property_type).required {
                if field == FieldId::Subtype && record.subtype.trim().is_empty() {
                    errors.push(FieldError::new(field, "This field is required"));
                }
            }
        }
        Step::Condition => {
            if record.condition.is_none() {
                errors.push(FieldError::new(FieldId::Condition, "Please select a condition"));
            }
            // The tag sets have no required-count constraint.
        }
        Step::Financial => {
            if !CURRENT_VALUE_RANGES.contains(&record.current_value.as_str()) {
                errors.push(FieldError::new(
                    FieldId::CurrentValue,
                    "Please select an estimated value",
                ));
            }
            if !SELLING_REASONS.contains(&record.reason_for_selling.as_str()) {
                errors.push(FieldError::new(
                    FieldId::ReasonForSelling,
                    "Please select a reason",
                ));
            }
        }
        Step::Timeline => {
            if record.desired_timeline.is_none() {
                errors.push(FieldError::new(
                    FieldId::DesiredTimeline,
                    "Please select a timeline",
                ));
            }
        }
        Step::Contact => {
            require_text(
                &mut errors,
                FieldId::FirstName,
                &record.first_name,
                "First name is required",
            );
            require_text(
                &mut errors,
                FieldId::LastName,
                &record.last_name,
                "Last name is required",
            );
            if record.email.trim().is_empty() {
                errors.push(FieldError::new(FieldId::Email, "Email is required"));
            } else if !is_valid_email(&record.email) {
                errors.push(FieldError::new(FieldId::Email, "Invalid email address"));
            }
            if record.phone.trim().is_empty() {
                errors.push(FieldError::new(FieldId::Phone, "Phone number is required"));
            } else if !is_valid_phone(&record.phone) {
                errors.push(FieldError::new(FieldId::Phone, "Invalid phone number"));
            }
            if record.preferred_contact.is_none() {
                errors.push(FieldError::new(
                    FieldId::PreferredContact,
                    "Please select a contact method",
                ));
            }
        }
        // The free-text step requires nothing.
        Step::Additional => {}
    }

    errors
}

fn require_text(errors: &mut Vec<FieldError>, field: FieldId, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, message));
    }
}

/// Five digits, optionally followed by `-` and four more.
fn is_valid_zip(zip: &str) -> bool {
    let bytes = zip.as_bytes();
    match bytes.len() {
        5 => bytes.iter().all(u8::is_ascii_digit),
        10 => {
            bytes[5] == b'-'
                && bytes[..5].iter().all(u8::is_ascii_digit)
                && bytes[6..].iter().all(u8::is_ascii_digit)
        }
        _ => false,
    }
}

/// `local@domain.tld` with at least two alphabetic characters in the TLD.
/// Case-insensitive by construction.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty()
        || !local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c))
    {
        return false;
    }
    let Some((name, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Optional leading `+`, first digit 1-9, at most 15 digits, nothing else.
fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    !digits.is_empty()
        && digits.len() <= 15
        && !digits.starts_with('0')
        && digits.chars().all(|c| c.is_ascii_digit())
}

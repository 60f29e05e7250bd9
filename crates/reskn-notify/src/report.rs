use reskn_core::{MedicalAnswer, PreviousLaser};
use reskn_fitzpatrick::{AnswerSet, QUESTIONS};
use reskn_submission::SubmissionRecord;

const RULE_WIDTH: usize = 63;
const HEAVY_RULE: &str = "═══════════════════════════════════════════════════════════════";
const LIGHT_RULE: &str = "───────────────────────────────────────────────────────────────";

/// Render the canonical plain-text report for a sealed submission. Section
/// order and field labels are fixed; both the clinic and patient copies
/// carry this exact text.
pub fn render_report(record: &SubmissionRecord) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(HEAVY_RULE.to_string());
    lines.push(centered("ReSKN CLINIC PATCH TEST FORM"));
    lines.push(HEAVY_RULE.to_string());
    lines.push(String::new());
    lines.push(format!("Reference ID: {}", record.reference_id));
    lines.push(format!("Submission Date: {}", record.submitted_at));

    section(&mut lines, "PATIENT DETAILS");
    lines.push(format!("Full Name: {}", record.patient.full_name));
    lines.push(format!("Date of Birth: {}", record.patient.date_of_birth));
    lines.push(format!("Email: {}", record.patient.email));
    lines.push(format!("Mobile: {}", record.patient.mobile));
    if let Some(address) = &record.patient.address {
        lines.push(format!("Address: {address}"));
    }
    if let Some(name) = &record.patient.emergency_contact_name {
        let phone = record
            .patient
            .emergency_contact_phone
            .as_deref()
            .unwrap_or("No phone");
        lines.push(format!("Emergency Contact: {name} ({phone})"));
    }

    section(&mut lines, "MEDICAL QUESTIONNAIRE");
    for (label, answer) in record.medical.entries() {
        lines.push(answer_line(label, answer));
    }
    if let Some(other) = &record.medical.other_conditions {
        lines.push(format!("Other medical conditions: {other}"));
    }
    lines.push(String::new());
    lines.push(format!(
        "Current medications: {}",
        text_or_none(&record.medications)
    ));
    lines.push(format!(
        "Known allergies: {}",
        text_or_none(&record.allergies)
    ));

    section(&mut lines, "LASER SAFETY / CONTRAINDICATIONS");
    for (label, answer) in record.laser_safety.entries() {
        lines.push(answer_line(label, answer));
    }

    section(&mut lines, "TREATMENT DETAILS");
    lines.push(format!("Areas for patch test: {}", areas(&record.treatment)));
    lines.push(format!(
        "Previous laser hair removal: {}",
        previous_laser_line(&record.treatment.previous_laser)
    ));
    lines.push(format!(
        "Recent hair removal methods: {}",
        join_or_none(&record.treatment.recent_hair_removal)
    ));

    section(&mut lines, "CONSENT");
    for (label, given) in record.consent.entries() {
        lines.push(format!("✓ {label}: {}", yes_no(given)));
    }

    section(&mut lines, "SIGNATURE");
    lines.push(format!(
        "Signed by (typed name): {}",
        record.signature.typed_name
    ));
    lines.push(format!("Signed at: {}", record.signature.signed_at));
    lines.push(format!(
        "Electronic signature confirmation: {}",
        if record.signature.consent_confirmed {
            "Confirmed"
        } else {
            "Not confirmed"
        }
    ));
    lines.push(String::new());
    lines.push("[Signature image attached]".to_string());

    section(&mut lines, "FITZPATRICK QUESTIONNAIRE");
    if let Some(background) = &record.ethnic_background {
        lines.push(format!("Ethnic Background: {background}"));
        lines.push(String::new());
    }
    lines.push(assessment_answers(&record.answers));

    lines.push(String::new());
    lines.push(HEAVY_RULE.to_string());
    lines.push(centered("FITZPATRICK RESULT"));
    lines.push(HEAVY_RULE.to_string());
    lines.push(String::new());
    lines.push(format!("Total Score: {}", record.result.total_score));
    lines.push(format!("Skin Type: {}", record.result.skin_type.label()));
    lines.push(format!("Description: {}", record.result.description));
    lines.push(String::new());
    lines.push(HEAVY_RULE.to_string());

    lines.join("\n")
}

fn centered(title: &str) -> String {
    format!("{title:^width$}", width = RULE_WIDTH)
        .trim_end()
        .to_string()
}

fn section(lines: &mut Vec<String>, title: &str) {
    lines.push(String::new());
    lines.push(LIGHT_RULE.to_string());
    lines.push(centered(title));
    lines.push(LIGHT_RULE.to_string());
    lines.push(String::new());
}

/// `label: No`, or `label: Yes - details` with the details omitted when
/// absent. Details attached to a "No" answer never leak into the report.
fn answer_line(label: &str, answer: &MedicalAnswer) -> String {
    if !answer.answer {
        return format!("{label}: No");
    }
    match &answer.details {
        Some(details) => format!("{label}: Yes - {details}"),
        None => format!("{label}: Yes"),
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

fn text_or_none(text: &str) -> &str {
    if text.trim().is_empty() { "None" } else { text }
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}

fn areas(treatment: &reskn_core::TreatmentDetails) -> String {
    let mut joined = treatment.patch_test_areas.join(", ");
    if let Some(other) = treatment
        .other_area
        .as_deref()
        .filter(|o| !o.trim().is_empty())
    {
        if !joined.is_empty() {
            joined.push_str(", ");
        }
        joined.push_str(other);
    }
    joined
}

fn previous_laser_line(previous: &PreviousLaser) -> String {
    if !previous.answer {
        return "No".to_string();
    }
    let details = previous.details.as_deref().unwrap_or("No details");
    match &previous.adverse_reactions {
        Some(reactions) => format!("Yes - {details} | Adverse reactions: {reactions}"),
        None => format!("Yes - {details}"),
    }
}

/// Every catalogue question with the selected option's label, or
/// "Not answered" when no score is stored or the score matches no option.
fn assessment_answers(answers: &AnswerSet) -> String {
    QUESTIONS
        .iter()
        .map(|q| {
            let line = match answers.score(q.id) {
                Some(score) => format!(
                    "Answer: {} (Score: {})",
                    q.option_label(score).unwrap_or("Not answered"),
                    score
                ),
                None => "Answer: Not answered (Score: 0)".to_string(),
            };
            format!("{}\n{}", q.prompt, line)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

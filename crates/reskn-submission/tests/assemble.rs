use reskn_core::{
    ConsentData, LaserSafety, MedicalAnswer, MedicalScreening, PatientDetails, PreviousLaser,
    SignatureCapture, TreatmentDetails,
};
use reskn_fitzpatrick::{AnswerSet, QuestionId, SkinType};
use reskn_submission::{AssembleError, IntakeSnapshot, assemble, generate_reference_id};

fn patient() -> PatientDetails {
    PatientDetails {
        full_name: "Jordan Blake".to_string(),
        date_of_birth: "1992-04-17".to_string(),
        email: "jordan@example.com".to_string(),
        mobile: "07700 900123".to_string(),
        address: None,
        emergency_contact_name: None,
        emergency_contact_phone: None,
    }
}

fn treatment() -> TreatmentDetails {
    TreatmentDetails {
        patch_test_areas: vec!["Underarms".to_string()],
        other_area: None,
        previous_laser: PreviousLaser::default(),
        recent_hair_removal: vec!["Shaving".to_string()],
    }
}

fn complete_answers(score: u32) -> AnswerSet {
    let mut answers = AnswerSet::new();
    for id in QuestionId::ALL {
        answers.record(id, score).unwrap();
    }
    answers
}

fn capture() -> SignatureCapture {
    SignatureCapture {
        image: "data:image/png;base64,AAAA".to_string(),
        typed_name: "Jordan Blake".to_string(),
        consent_confirmed: true,
    }
}

fn snapshot<'a>(
    patient: &'a PatientDetails,
    medical: &'a MedicalScreening,
    laser_safety: &'a LaserSafety,
    treatment: &'a TreatmentDetails,
    consent: &'a ConsentData,
    answers: &'a AnswerSet,
) -> IntakeSnapshot<'a> {
    IntakeSnapshot {
        patient,
        medical,
        medications: "",
        allergies: "Penicillin",
        laser_safety,
        treatment,
        consent,
        ethnic_background: None,
        answers,
    }
}

#[test]
fn reference_id_matches_expected_format() {
    let id = generate_reference_id();
    let parts: Vec<&str> = id.split('-').collect();
    assert_eq!(parts.len(), 4, "unexpected shape: {id}");
    assert_eq!(parts[0], "RSKN");
    assert_eq!(parts[1], "PT");
    assert_eq!(parts[2].len(), 8);
    assert!(parts[2].chars().all(|c| c.is_ascii_digit()), "{id}");
    assert_eq!(parts[3].len(), 4);
    assert!(
        parts[3]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()),
        "{id}"
    );
}

#[test]
fn assemble_refuses_incomplete_questionnaire() {
    let patient = patient();
    let medical = MedicalScreening::default();
    let laser_safety = LaserSafety::default();
    let treatment = treatment();
    let consent = ConsentData::default();
    let mut answers = AnswerSet::new();
    answers.record(QuestionId::EyeColor, 2).unwrap();

    let err = assemble(
        snapshot(&patient, &medical, &laser_safety, &treatment, &consent, &answers),
        &capture(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        AssembleError::QuestionnaireIncomplete {
            answered: 1,
            expected: 10
        }
    );
}

#[test]
fn record_owns_independent_copies() {
    let patient = patient();
    let medical = MedicalScreening::default();
    let laser_safety = LaserSafety::default();
    let treatment = treatment();
    let consent = ConsentData::default();
    let mut answers = complete_answers(2);

    let record = assemble(
        snapshot(&patient, &medical, &laser_safety, &treatment, &consent, &answers),
        &capture(),
    )
    .unwrap();
    assert_eq!(record.answers.total(), 20);

    // Mutating the wizard's live answers must not reach into the record.
    answers.record(QuestionId::EyeColor, 4).unwrap();
    assert_eq!(answers.total(), 22);
    assert_eq!(record.answers.total(), 20);
    assert_eq!(record.result.total_score, 20);
}

#[test]
fn classification_is_sealed_with_its_answers() {
    let patient = patient();
    let medical = MedicalScreening::default();
    let laser_safety = LaserSafety::default();
    let treatment = treatment();
    let consent = ConsentData::default();
    let answers = complete_answers(0);

    let record = assemble(
        snapshot(&patient, &medical, &laser_safety, &treatment, &consent, &answers),
        &capture(),
    )
    .unwrap();
    assert_eq!(record.result.total_score, record.answers.total());
    assert_eq!(record.result.skin_type, SkinType::TypeI);
}

#[test]
fn signature_is_stamped_with_the_assembly_timestamp() {
    let patient = patient();
    let medical = MedicalScreening {
        diabetes: MedicalAnswer::yes_with("Type 2, diet controlled"),
        ..MedicalScreening::default()
    };
    let laser_safety = LaserSafety::default();
    let treatment = treatment();
    let consent = ConsentData::default();
    let answers = complete_answers(1);

    let record = assemble(
        snapshot(&patient, &medical, &laser_safety, &treatment, &consent, &answers),
        &capture(),
    )
    .unwrap();
    assert_eq!(record.signature.signed_at, record.submitted_at);
    assert!(!record.submitted_at.is_empty());
    assert_eq!(record.signature.typed_name, "Jordan Blake");
    assert!(record.signature.consent_confirmed);
}

#[test]
fn record_serializes_with_snake_case_fields() {
    let patient = patient();
    let medical = MedicalScreening::default();
    let laser_safety = LaserSafety::default();
    let treatment = treatment();
    let consent = ConsentData::default();
    let answers = complete_answers(3);

    let record = assemble(
        snapshot(&patient, &medical, &laser_safety, &treatment, &consent, &answers),
        &capture(),
    )
    .unwrap();
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["reference_id"], record.reference_id);
    assert_eq!(json["patient"]["full_name"], "Jordan Blake");
    assert_eq!(json["result"]["total_score"], 30);
    assert_eq!(json["answers"]["eye_color"], 3);
}

use pistat_dataset::{Cohort, DatasetError, Phase};

#[test]
fn test_builtin_survives_json() {
    let cohort = Cohort::builtin();
    let json = serde_json::to_string_pretty(&cohort).unwrap();
    let parsed: Cohort = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, cohort);
}

#[test]
fn test_phase_names_are_snake_case() {
    let json = serde_json::to_value(Cohort::builtin()).unwrap();
    let names = json["phases"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["phase"].as_str().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(names, ["intercritical", "frequent_crisis", "critical"]);
}

#[test]
fn test_duration_bounds_are_optional() {
    let json = r#"{
        "phases": [
            { "phase": "intercritical", "rows": [{ "pi": 0.4, "patient_count": 31, "pic": 4 }] },
            { "phase": "frequent_crisis", "rows": [{ "pi": 0.5, "patient_count": 2, "pic": 5 }] },
            { "phase": "critical", "rows": [{ "pi": 1.4, "patient_count": 10, "pic": 14 }] }
        ],
        "nrs": { "groups": [{ "label": "low", "pi": 1.4, "scores": [45, 42, 47] }] },
        "pain_duration": { "rows": [{ "pi": 1.4, "mean_duration": 8.5 }] }
    }"#;
    let cohort: Cohort = serde_json::from_str(json).unwrap();
    cohort.validate().unwrap();
    assert_eq!(cohort.pain_duration.rows[0].min_hours, None);
    assert_eq!(cohort.phase(Phase::Critical).unwrap().total_patients(), 10);
}

#[test]
fn test_duplicate_group_label() {
    let mut cohort = Cohort::builtin();
    cohort.nrs.groups[1].label = cohort.nrs.groups[0].label.clone();
    assert_eq!(
        cohort.validate(),
        Err(DatasetError::DuplicateGroup {
            label: "Group 1 (PI 1.4)".to_owned()
        })
    );
}

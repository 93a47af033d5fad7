#[allow(dead_code)]
#[path = "../src/calc.rs"]
mod calc;
#[allow(dead_code)]
#[path = "../src/export.rs"]
mod export;
#[allow(dead_code)]
#[path = "../src/model.rs"]
mod model;
#[allow(dead_code)]
#[path = "../src/store.rs"]
mod store;

use export::{export_csv, ExportOptions};
use model::{default_competences, Competence};
use store::EvaluationStore;

#[test]
fn default_rubric_export_matches_classic_layout() {
    let students = vec!["Alice".to_string(), "Bob".to_string()];
    let mut store = EvaluationStore::default();
    for comp in default_competences() {
        store.set_score("Alice", &comp.name, 3);
    }

    let csv = export_csv(&students, default_competences(), &store, ExportOptions::default());
    assert_eq!(
        csv,
        "NOM,Note,Note Compréhension,Note Réalisation technique,Note Qualité des résultats,Note Autonomie\n\
         Alice,15.00,3,3,3,3\n\
         Bob,,,,,\n"
    );
}

#[test]
fn partially_scored_students_leave_blank_cells() {
    let students = vec!["Léa".to_string()];
    let comps = vec![Competence::new("Oral", 1.0), Competence::new("Écrit", 3.0)];
    let mut store = EvaluationStore::default();
    store.set_score("Léa", "Écrit", 2);

    let csv = export_csv(&students, &comps, &store, ExportOptions::default());
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "NOM,Note,Note Oral,Note Écrit");
    assert_eq!(lines[1], "Léa,10.00,,2");
    assert!(csv.ends_with('\n'));
}

#[test]
fn rows_follow_roster_order_with_duplicates() {
    let students = vec!["Zoé".to_string(), "Adam".to_string(), "Zoé".to_string()];
    let comps = vec![Competence::new("Oral", 1.0)];
    let mut store = EvaluationStore::default();
    store.set_score("Zoé", "Oral", 4);

    let csv = export_csv(&students, &comps, &store, ExportOptions::default());
    assert_eq!(csv, "NOM,Note,Note Oral\nZoé,20.00,4\nAdam,,\nZoé,20.00,4\n");
}

#[test]
fn empty_roster_with_empty_rubric_is_just_the_base_header() {
    let csv = export_csv(&[], &[], &EvaluationStore::default(), ExportOptions::default());
    assert_eq!(csv, "NOM,Note\n");
}

#[test]
fn quoting_escapes_embedded_quotes() {
    let students = vec!["Le \"Petit\" Prince".to_string()];
    let comps = vec![Competence::new("Oral, écrit", 1.0)];
    let csv = export_csv(
        &students,
        &comps,
        &EvaluationStore::default(),
        ExportOptions { quote_fields: true },
    );
    assert_eq!(
        csv,
        "NOM,Note,\"Note Oral, écrit\"\n\"Le \"\"Petit\"\" Prince\",,\n"
    );
}

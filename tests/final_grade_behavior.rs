#[allow(dead_code)]
#[path = "../src/calc.rs"]
mod calc;
#[allow(dead_code)]
#[path = "../src/model.rs"]
mod model;
#[allow(dead_code)]
#[path = "../src/store.rs"]
mod store;

use calc::{final_grade, format_grade};
use model::{default_competences, Competence};
use store::EvaluationStore;

#[test]
fn no_active_score_means_no_grade() {
    let comps = vec![Competence::new("C1", 1.0), Competence::new("C2", 2.0)];
    let mut store = EvaluationStore::default();
    assert_eq!(final_grade("Alice", &comps, &store), None);

    store.set_score("Alice", "Hors grille", 4);
    assert_eq!(final_grade("Alice", &comps, &store), None);
    assert_eq!(format_grade(final_grade("Alice", &comps, &store)), "");
}

#[test]
fn weighted_average_is_scaled_to_twenty() {
    let comps = vec![Competence::new("C1", 1.0), Competence::new("C2", 3.0)];
    let mut store = EvaluationStore::default();
    store.set_score("Alice", "C1", 2);
    store.set_score("Alice", "C2", 4);
    // (2*5*1 + 4*5*3) / (1 + 3)
    assert_eq!(final_grade("Alice", &comps, &store), Some(17.5));
    assert_eq!(format_grade(final_grade("Alice", &comps, &store)), "17.50");
}

#[test]
fn exact_ties_round_half_up() {
    let comps = vec![Competence::new("C1", 17.0), Competence::new("C2", 23.0)];
    let mut store = EvaluationStore::default();
    store.set_score("Alice", "C1", 4);
    store.set_score("Alice", "C2", 3);
    // 685 / 40 = 17.125
    assert_eq!(final_grade("Alice", &comps, &store), Some(17.13));
}

#[test]
fn repeating_decimals_round_to_two_places() {
    let comps = vec![
        Competence::new("C1", 1.0),
        Competence::new("C2", 1.0),
        Competence::new("C3", 1.0),
    ];
    let mut store = EvaluationStore::default();
    store.set_score("Alice", "C1", 4);
    store.set_score("Alice", "C2", 3);
    store.set_score("Alice", "C3", 3);
    // 50 / 3
    assert_eq!(format_grade(final_grade("Alice", &comps, &store)), "16.67");
}

#[test]
fn scores_outside_active_rubric_are_ignored_not_cleared() {
    let custom = vec![Competence::new("Oral", 2.0)];
    let mut store = EvaluationStore::default();
    store.set_score("Alice", "Autonomie", 1);
    store.set_score("Alice", "Oral", 4);

    assert_eq!(final_grade("Alice", &custom, &store), Some(20.0));
    assert_eq!(final_grade("Alice", default_competences(), &store), Some(5.0));
    assert_eq!(store.score("Alice", "Autonomie"), Some(1));
}

#[test]
fn final_grade_is_idempotent() {
    let comps = default_competences();
    let mut store = EvaluationStore::default();
    store.set_score("Alice", "Compréhension", 3);
    store.set_score("Alice", "Autonomie", 2);
    let a = final_grade("Alice", comps, &store);
    let b = final_grade("Alice", comps, &store);
    assert_eq!(a, b);
    assert_eq!(a, Some(12.5));
}

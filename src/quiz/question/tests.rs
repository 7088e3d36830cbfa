use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

use super::*;
use crate::vocab::fixtures;

fn question(choices: &[&str]) -> Question {
    Question {
        definition: "some definition".to_owned(),
        correct_word: choices[0].to_owned(),
        choices: choices.iter().map(|c| c.to_string()).collect(),
    }
}

#[test]
fn choices_contain_correct_word() {
    let table = fixtures::animals();
    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        let question = generate(&table, &mut rng).unwrap();
        assert_eq!(question.choices.len(), CHOICE_COUNT);
        assert!(question.choices.contains(&question.correct_word));
    }
}

#[test]
fn choices_are_distinct_words() {
    let table = fixtures::table(&["a", "b", "c", "d", "e", "f", "g"]);
    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        let question = generate(&table, &mut rng).unwrap();
        let unique: HashSet<&String> = question.choices.iter().collect();
        assert_eq!(unique.len(), CHOICE_COUNT);
    }
}

#[test]
fn definition_belongs_to_correct_word() {
    let table = fixtures::animals();
    let mut rng = StdRng::seed_from_u64(7);
    let question = generate(&table, &mut rng).unwrap();
    let entry = table.find(&question.correct_word).unwrap();
    assert_eq!(question.definition, entry.definition);
}

#[test]
fn works_with_exactly_four_entries() {
    let table = fixtures::table(&["cat", "dog", "bird", "fish"]);
    let mut rng = StdRng::seed_from_u64(3);
    let question = generate(&table, &mut rng).unwrap();
    let mut choices = question.choices.clone();
    choices.sort();
    assert_eq!(choices, vec!["bird", "cat", "dog", "fish"]);
}

#[test]
fn requires_four_entries() {
    let table = fixtures::table(&["cat", "dog", "bird"]);
    let mut rng = StdRng::seed_from_u64(0);
    match generate(&table, &mut rng) {
        Err(QuizError::InsufficientVocabulary {
            available,
            required,
        }) => {
            assert_eq!(available, 3);
            assert_eq!(required, CHOICE_COUNT);
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn same_seed_same_question() {
    let table = fixtures::animals();
    let first = generate(&table, &mut StdRng::seed_from_u64(42)).unwrap();
    let second = generate(&table, &mut StdRng::seed_from_u64(42)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn every_word_gets_asked() {
    let table = fixtures::animals();
    let mut rng = StdRng::seed_from_u64(11);
    let asked: HashSet<String> = (0..200)
        .map(|_| generate(&table, &mut rng).unwrap().correct_word)
        .collect();
    assert_eq!(asked.len(), table.len());
}

#[test]
fn seed_yielding_dog_offers_dog() {
    let table = fixtures::animals();
    let question = (0..1000)
        .map(|seed| generate(&table, &mut StdRng::seed_from_u64(seed)).unwrap())
        .find(|q| q.correct_word == "dog")
        .expect("no seed produced dog");
    assert_eq!(question.choices.len(), 4);
    assert!(question.choices.iter().any(|c| c == "dog"));
    assert_eq!(question.definition, "definition of dog");
}

#[test]
fn duplicate_spellings_are_not_deduplicated() {
    let table = fixtures::table(&["cat", "cat", "cat", "cat"]);
    let mut rng = StdRng::seed_from_u64(5);
    let question = generate(&table, &mut rng).unwrap();
    assert_eq!(question.choices, vec!["cat"; 4]);
}

#[test]
fn resolves_exact_text() {
    let question = question(&["dog", "cat", "bird", "fish"]);
    assert_eq!(question.resolve_choice("bird"), Some("bird"));
    assert_eq!(question.resolve_choice("  fish "), Some("fish"));
}

#[test]
fn resolves_position() {
    let question = question(&["dog", "cat", "bird", "fish"]);
    assert_eq!(question.resolve_choice("1"), Some("dog"));
    assert_eq!(question.resolve_choice("4"), Some("fish"));
    assert_eq!(question.resolve_choice("0"), None);
    assert_eq!(question.resolve_choice("5"), None);
}

#[test]
fn numeric_words_win_over_positions() {
    let question = question(&["1984", "2", "1", "fish"]);
    assert_eq!(question.resolve_choice("1"), Some("1"));
    assert_eq!(question.resolve_choice("4"), Some("fish"));
}

#[test]
fn resolves_loosely() {
    let question = question(&["café", "Self-Esteem", "bird", "fish"]);
    assert_eq!(question.resolve_choice("CAFE"), Some("café"));
    assert_eq!(question.resolve_choice("self esteem"), Some("Self-Esteem"));
    assert_eq!(question.resolve_choice("horse"), None);
    assert_eq!(question.resolve_choice("!!!"), None);
    assert_eq!(question.resolve_choice(""), None);
}

#[test]
fn correctness_is_exact() {
    let question = question(&["café", "bird", "fish", "cow"]);
    assert!(question.is_correct("café"));
    assert!(!question.is_correct("cafe"));
    assert!(!question.is_correct("bird"));
}

//! Partition properties of the grouping engine.

use std::collections::HashMap;

use discrete_quiz::{Group, Unit, group_questions, parse_units};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::{Value, json};

fn units(value: Value) -> Vec<Unit> {
    serde_json::from_value(value).expect("valid bank")
}

fn question(prompt: &str, data: Option<Value>) -> Value {
    let mut q = json!({"question": prompt, "options": ["a", "b", "c"], "answer": 0});
    if let Some(data) = data {
        q["data"] = data;
    }
    q
}

/// Maps each question's flatten index to the group it landed in.
fn placement(groups: &[Group]) -> HashMap<usize, usize> {
    let mut seen = HashMap::new();
    for (group_index, group) in groups.iter().enumerate() {
        for question in group.questions() {
            assert!(
                seen.insert(question.index, group_index).is_none(),
                "question {} placed twice",
                question.index
            );
        }
    }
    seen
}

fn group_index_of(groups: &[Group], prompt: &str) -> usize {
    groups
        .iter()
        .position(|g| g.questions().iter().any(|q| q.prompt == prompt))
        .expect("question should be grouped")
}

#[test]
fn shared_raw_values_across_units_form_one_group() {
    let raw = json!({"type": "raw", "values": [1, 2, 3]});
    let bank = units(json!([
        {"title": "Unit A", "questions": [question("a1", Some(raw.clone()))]},
        {"title": "Unit B", "questions": [
            question("b1", Some(raw.clone())),
            question("b2", Some(raw))
        ]}
    ]));

    let groups = group_questions(&bank, &mut StdRng::seed_from_u64(1));
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].len(), 3);

    let total: usize = groups.iter().map(Group::len).sum();
    assert_eq!(total, 3);

    let mut units_seen: Vec<_> = groups[0].questions().iter().map(|q| q.unit.as_str()).collect();
    units_seen.sort_unstable();
    assert_eq!(units_seen, vec!["Unit A", "Unit B", "Unit B"]);
}

#[test]
fn equal_ids_group_regardless_of_other_fields() {
    let bank = units(json!([{
        "questions": [
            question("q1", Some(json!({"id": "table-3", "type": "FDT", "title": "Weights"}))),
            question("q2", Some(json!({"id": "table-3", "type": "raw", "values": [9]}))),
            question("q3", Some(json!({"id": "table-3"})))
        ]
    }]));

    for seed in 0..20 {
        let groups = group_questions(&bank, &mut StdRng::seed_from_u64(seed));
        assert_eq!(groups.len(), 1, "seed {seed}");
        assert_eq!(groups[0].len(), 3);
    }
}

#[test]
fn changing_one_field_moves_a_question_out() {
    let table = json!({"type": "FDT", "headers": ["x", "f"], "rows": [[1, 4], [2, 6]]});
    let mut edited = table.clone();
    edited["rows"][1][1] = json!(7);

    let bank = units(json!([{
        "questions": [
            question("q1", Some(table.clone())),
            question("q2", Some(table)),
            question("q3", Some(edited))
        ]
    }]));

    let groups = group_questions(&bank, &mut StdRng::seed_from_u64(4));
    assert_eq!(groups.len(), 2);
    assert_eq!(group_index_of(&groups, "q1"), group_index_of(&groups, "q2"));
    assert_ne!(group_index_of(&groups, "q1"), group_index_of(&groups, "q3"));
}

#[test]
fn key_order_does_not_split_groups() {
    let bank = parse_units(
        r#"[{"questions": [
            {"question": "q1", "options": ["a"], "answer": 0,
             "data": {"type": "raw", "title": "Ages", "values": [20, 21]}},
            {"question": "q2", "options": ["a"], "answer": 0,
             "data": {"values": [20, 21], "type": "raw", "title": "Ages"}}
        ]}]"#,
    )
    .expect("valid bank");

    let groups = group_questions(&bank, &mut StdRng::seed_from_u64(9));
    assert_eq!(groups.len(), 1);
}

#[test]
fn questions_without_any_data_are_singletons() {
    let bank = units(json!([
        {"questions": [question("q1", None), question("q2", None)]},
        {"data": {"type": "raw", "values": [1]}, "questions": [question("q3", None)]}
    ]));

    let groups = group_questions(&bank, &mut StdRng::seed_from_u64(2));
    assert_eq!(groups.len(), 3);
    for prompt in ["q1", "q2"] {
        let group = &groups[group_index_of(&groups, prompt)];
        assert_eq!(group.len(), 1);
        assert!(group.data().is_none());
    }
    assert!(groups[group_index_of(&groups, "q3")].data().is_some());
}

#[test]
fn group_order_varies_with_seed() {
    let bank = units(json!([{
        "questions": (0..8).map(|i| question(&format!("q{i}"), None)).collect::<Vec<_>>()
    }]));

    let orders: std::collections::HashSet<Vec<usize>> = (0..10)
        .map(|seed| {
            group_questions(&bank, &mut StdRng::seed_from_u64(seed))
                .iter()
                .map(|g| g.questions()[0].index)
                .collect()
        })
        .collect();
    assert!(orders.len() > 1);
}

fn arbitrary_data() -> impl Strategy<Value = Option<Value>> {
    prop_oneof![
        Just(None),
        (0u8..3).prop_map(|id| Some(json!({"id": format!("shared-{id}"), "type": "FDT"}))),
        (0u8..3).prop_map(|n| Some(json!({"type": "raw", "values": [n, n + 1]}))),
        (0u8..2).prop_map(|n| Some(json!({"title": "Passage", "content": format!("text {n}")}))),
    ]
}

fn arbitrary_bank() -> impl Strategy<Value = Vec<Unit>> {
    let unit = (
        arbitrary_data(),
        prop::collection::vec(arbitrary_data(), 0..6),
    )
        .prop_map(|(unit_data, question_data)| {
            let questions: Vec<Value> = question_data
                .into_iter()
                .enumerate()
                .map(|(i, data)| question(&format!("q{i}"), data))
                .collect();
            let mut unit = json!({"title": "Unit", "questions": questions});
            if let Some(data) = unit_data {
                unit["data"] = data;
            }
            unit
        });

    prop::collection::vec(unit, 0..5).prop_map(|units| {
        serde_json::from_value(Value::Array(units)).expect("generated bank is valid")
    })
}

proptest! {
    #[test]
    fn groups_partition_the_bank(bank in arbitrary_bank(), seed in any::<u64>()) {
        let question_count: usize = bank.iter().map(|u| u.questions.len()).sum();
        let groups = group_questions(&bank, &mut StdRng::seed_from_u64(seed));

        prop_assert!(groups.iter().all(|g| !g.is_empty()));
        let placed = placement(&groups);
        prop_assert_eq!(placed.len(), question_count);
        prop_assert!((0..question_count).all(|index| placed.contains_key(&index)));
    }

    #[test]
    fn members_share_equivalent_data(bank in arbitrary_bank(), seed in any::<u64>()) {
        let groups = group_questions(&bank, &mut StdRng::seed_from_u64(seed));

        for group in &groups {
            match group.data() {
                None => prop_assert_eq!(group.len(), 1),
                Some(data) => {
                    for question in group.questions() {
                        let own = question.data.as_ref().expect("grouped question has data");
                        prop_assert!(own.is_equivalent(data));
                    }
                }
            }
        }
    }
}

#[test]
fn blank_question_data_keeps_the_unit_dataset() {
    let bank = units(json!([{
        "data": {"type": "raw", "values": [5, 6]},
        "questions": [
            question("q1", Some(json!(false))),
            question("q2", None)
        ]
    }]));

    let groups = group_questions(&bank, &mut StdRng::seed_from_u64(6));
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].len(), 2);
}

#[test]
fn numeric_unit_ids_load_and_label_questions() {
    let bank = parse_units(
        r#"[{"id": 3, "questions": [{"question": "q", "options": ["a"], "answer": 0}]}]"#,
    )
    .expect("numeric ids are allowed");

    let groups = group_questions(&bank, &mut StdRng::seed_from_u64(0));
    assert_eq!(groups[0].questions()[0].unit, "3");
}

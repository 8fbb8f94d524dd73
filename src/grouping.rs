//! Partitions the question bank into groups that share a dataset.

use rand::Rng;
use tracing::debug;

use crate::models::{Group, QuizQuestion, Unit};
use crate::shuffle::shuffle_in_place;

/// Flattens every unit into one record per question, in bank order.
pub fn flatten(units: &[Unit]) -> Vec<QuizQuestion> {
    units
        .iter()
        .flat_map(|unit| unit.questions.iter().map(move |question| (unit, question)))
        .enumerate()
        .map(|(index, (unit, question))| QuizQuestion::new(index, unit, question))
        .collect()
}

/// Groups the bank's questions by equivalent shared data.
///
/// Every question lands in exactly one group. Questions without data become
/// singleton groups. Both the order inside each group and the order of the
/// groups are shuffled with `rng`.
pub fn group_questions<R: Rng + ?Sized>(units: &[Unit], rng: &mut R) -> Vec<Group> {
    // A taken slot marks its question as used.
    let mut slots: Vec<Option<QuizQuestion>> = flatten(units).into_iter().map(Some).collect();
    let question_count = slots.len();
    let mut groups = Vec::new();

    for seed_index in 0..slots.len() {
        let Some(seed) = slots[seed_index].take() else {
            continue;
        };
        let Some(data) = seed.data.clone() else {
            groups.push(Group::singleton(seed));
            continue;
        };

        let mut members = vec![seed];
        for slot in &mut slots[seed_index + 1..] {
            let matches = slot
                .as_ref()
                .and_then(|candidate| candidate.data.as_ref())
                .is_some_and(|candidate| candidate.is_equivalent(&data));
            if matches {
                members.extend(slot.take());
            }
        }

        shuffle_in_place(&mut members, rng);
        groups.extend(Group::new(Some(data), members));
    }

    shuffle_in_place(&mut groups, rng);
    debug!(
        questions = question_count,
        groups = groups.len(),
        "grouped question bank"
    );
    groups
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde_json::{Value, json};

    use super::*;

    fn units(value: Value) -> Vec<Unit> {
        serde_json::from_value(value).unwrap()
    }

    fn question(prompt: &str, data: Option<Value>) -> Value {
        let mut q = json!({"question": prompt, "options": ["a", "b"], "answer": 0});
        if let Some(data) = data {
            q["data"] = data;
        }
        q
    }

    fn group_of<'a>(groups: &'a [Group], prompt: &str) -> &'a Group {
        groups
            .iter()
            .find(|g| g.questions().iter().any(|q| q.prompt == prompt))
            .unwrap()
    }

    #[test]
    fn test_flatten_assigns_indices_in_bank_order() {
        let bank = units(json!([
            {"title": "A", "questions": [question("a1", None), question("a2", None)]},
            {"id": "b", "questions": [question("b1", None)]}
        ]));
        let flat = flatten(&bank);
        let summary: Vec<_> = flat
            .iter()
            .map(|q| (q.index, q.unit.as_str(), q.prompt.as_str()))
            .collect();
        assert_eq!(summary, vec![(0, "A", "a1"), (1, "A", "a2"), (2, "b", "b1")]);
    }

    #[test]
    fn test_empty_bank_yields_no_groups() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(group_questions(&[], &mut rng).is_empty());
    }

    #[test]
    fn test_unit_data_is_inherited_for_grouping() {
        let mut rng = StdRng::seed_from_u64(3);
        let bank = units(json!([{
            "title": "Stats",
            "data": {"type": "FDT", "headers": ["x", "f"], "rows": [[1, 2]]},
            "questions": [question("q1", None), question("q2", None), question("q3", None)]
        }]));
        let groups = group_questions(&bank, &mut rng);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 3);
        assert!(groups[0].data().is_some());
    }

    #[test]
    fn test_questions_without_data_are_singletons() {
        let mut rng = StdRng::seed_from_u64(11);
        let bank = units(json!([{
            "questions": [question("q1", None), question("q2", None)]
        }]));
        let groups = group_questions(&bank, &mut rng);
        assert_eq!(groups.len(), 2);
        assert!(groups.iter().all(|g| g.len() == 1 && g.data().is_none()));
    }

    #[test]
    fn test_id_match_groups_across_units() {
        let mut rng = StdRng::seed_from_u64(5);
        let bank = units(json!([
            {"questions": [question("q1", Some(json!({"id": "t1", "type": "FDT", "title": "One"})))]},
            {"questions": [
                question("q2", Some(json!({"id": "t1", "title": "Other title"}))),
                question("q3", Some(json!({"id": "t2", "type": "FDT", "title": "One"})))
            ]}
        ]));
        let groups = group_questions(&bank, &mut rng);
        assert_eq!(groups.len(), 2);
        assert_eq!(group_of(&groups, "q1").len(), 2);
        assert!(group_of(&groups, "q2").questions().iter().any(|q| q.prompt == "q1"));
        assert_eq!(group_of(&groups, "q3").len(), 1);
    }

    #[test]
    fn test_group_carries_first_members_data() {
        let mut rng = StdRng::seed_from_u64(8);
        let bank = units(json!([{
            "questions": [
                question("q1", Some(json!({"id": "t", "title": "First"}))),
                question("q2", Some(json!({"id": "t", "title": "Second"})))
            ]
        }]));
        let groups = group_questions(&bank, &mut rng);
        assert_eq!(groups.len(), 1);
        assert_eq!(
            groups[0].data().map(|d| d.as_value()),
            Some(&json!({"id": "t", "title": "First"}))
        );
    }
}

use slotchart::core::{
    CollationStrength, LabelCollator, LabelSetBuilder, SlotId, SortOrder, humanize,
};

fn labels_of(slots: &[slotchart::core::Slot]) -> Vec<&str> {
    slots.iter().filter_map(|slot| slot.label.as_deref()).collect()
}

#[test]
fn duplicate_labels_collapse_into_one_major_slot() {
    let slots = LabelSetBuilder::new().build(&["Mon", "Tue", "Mon"]);

    assert_eq!(labels_of(&slots), vec!["Mon", "Tue"]);
    assert!(slots.iter().all(|slot| slot.has_major_tick && !slot.has_minor_tick));
    assert_eq!(slots[0].id, SlotId::from_label("Mon"));
    assert_eq!(slots[1].id, SlotId::from_label("Tue"));
}

#[test]
fn descending_order_reverses_collation_order() {
    let slots = LabelSetBuilder::new()
        .with_order(SortOrder::Descending)
        .build(&["Mon", "Tue", "Sun", "Mon"]);
    assert_eq!(labels_of(&slots), vec!["Tue", "Sun", "Mon"]);
}

#[test]
fn empty_input_yields_no_slots() {
    let values: Vec<String> = Vec::new();
    assert!(LabelSetBuilder::new().build(&values).is_empty());
}

#[test]
fn ordering_follows_collation_instead_of_code_points() {
    let slots = LabelSetBuilder::new().build(&["b", "B", "a", "A"]);
    assert_eq!(labels_of(&slots), vec!["a", "A", "b", "B"]);
}

#[test]
fn canonically_equivalent_labels_keep_first_spelling() {
    let precomposed = "caf\u{e9}".to_owned();
    let decomposed = "cafe\u{301}".to_owned();
    let slots = LabelSetBuilder::new().build(&[precomposed.clone(), decomposed]);

    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].label.as_deref(), Some(precomposed.as_str()));
    assert_eq!(slots[0].id, SlotId::from_label(&precomposed));
}

#[test]
fn primary_strength_merges_case_variants() {
    let builder =
        LabelSetBuilder::new().with_collator(LabelCollator::new(CollationStrength::Primary));
    let slots = builder.build(&["mon", "Mon", "MON", "tue"]);
    assert_eq!(labels_of(&slots), vec!["mon", "tue"]);
}

#[test]
fn ids_are_stable_across_rebuilds() {
    let builder = LabelSetBuilder::new();
    let first = builder.build(&["Wed", "Thu"]);
    let second = builder.build(&["Thu", "Wed", "Thu"]);
    assert_eq!(first, second);
}

#[test]
fn humanize_keeps_small_values_verbatim() {
    assert_eq!(humanize(999), "999");
    assert_eq!(humanize(0), "0");
    assert_eq!(humanize(-1500), "-1500");
}

#[test]
fn humanize_truncates_to_hundreds() {
    assert_eq!(humanize(1432), "1.4k");
    assert_eq!(humanize(1999), "1.9k");
    assert_eq!(humanize(12_345), "12.3k");
}

#[test]
fn humanize_drops_zero_hundreds_digit() {
    assert_eq!(humanize(50_000), "50k");
    assert_eq!(humanize(1000), "1k");
    assert_eq!(humanize(1099), "1k");
}

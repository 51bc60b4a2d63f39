//! Table integration tests.

use initdeal::{
    Action, Assignment, DEFAULT_POOL_SIZE, RosterError, Side, SwapError, Table, TableOptions,
    advance, card_pool, deal_cards, parse_card_number, swap_cards,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn table_with(friends: &[&str], foes: &[&str]) -> Table {
    let mut table = Table::new(TableOptions::default(), 42);
    for name in friends {
        table.add_name(Side::Friends, name).unwrap();
    }
    for name in foes {
        table.add_name(Side::Foes, name).unwrap();
    }
    table
}

fn set_cards(table: &mut Table, cards: &[u8]) {
    table.set_assignment(Assignment::from_cards(cards.to_vec()));
}

#[test]
fn options_builder_sets_fields() {
    let options = TableOptions::default()
        .with_pool_size(6)
        .with_trim_names(false);

    assert_eq!(options.pool_size, 6);
    assert!(!options.trim_names);
    assert_eq!(TableOptions::default().pool_size, DEFAULT_POOL_SIZE);
}

#[test]
fn card_pool_counts_from_one() {
    assert_eq!(card_pool(10), (1..=10).collect::<Vec<u8>>());
    assert_eq!(card_pool(0), vec![1]);
}

#[test]
fn deal_gives_everyone_a_card() {
    let mut table = table_with(&["Aria", "Brom"], &["Goblin"]);
    let current = table.deal();

    assert_eq!(table.cards().len(), 3);
    assert!(table.cards().iter().all(|card| (1..=10).contains(card)));

    let lowest = *table.cards().iter().min().unwrap();
    assert_eq!(current, table.current_index());
    assert_eq!(table.current_card(), Some(lowest));
}

#[test]
fn deal_to_empty_roster_clears_assignment() {
    let mut table = table_with(&["Aria"], &[]);
    table.deal();
    assert!(table.assignment().is_dealt());

    table.clear_side(Side::Friends);
    assert_eq!(table.deal(), None);
    assert!(table.cards().is_empty());
    assert_eq!(table.current_index(), None);
}

#[test]
fn same_seed_deals_same_cards() {
    let mut first = table_with(&["A", "B", "C"], &["D", "E"]);
    let mut second = table_with(&["A", "B", "C"], &["D", "E"]);

    first.deal();
    second.deal();
    assert_eq!(first.cards(), second.cards());

    first.deal();
    second.deal();
    assert_eq!(first.cards(), second.cards());
}

#[test]
fn long_roster_reuses_the_shuffled_pool() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let dealt = deal_cards(23, 10, &mut rng);
    let cards = dealt.cards();

    assert_eq!(cards.len(), 23);
    for (index, card) in cards.iter().enumerate() {
        assert_eq!(*card, cards[index % 10]);
    }

    let mut first_cycle = cards[..10].to_vec();
    first_cycle.sort_unstable();
    assert_eq!(first_cycle, card_pool(10));

    // Lowest card is 1 and its first holder starts.
    assert_eq!(dealt.current_card(), Some(1));
    assert_eq!(dealt.current(), cards.iter().position(|&card| card == 1));
}

#[test]
fn smaller_pool_option_is_respected() {
    let mut table = Table::new(TableOptions::default().with_pool_size(3), 9);
    for name in ["A", "B", "C", "D", "E"] {
        table.add_name(Side::Foes, name).unwrap();
    }
    table.deal();

    assert!(table.cards().iter().all(|card| (1..=3).contains(card)));
    assert_eq!(table.cards()[3], table.cards()[0]);
    assert_eq!(table.cards()[4], table.cards()[1]);
}

#[test]
fn lowest_card_tie_goes_to_first_position() {
    let assignment = Assignment::from_cards(vec![4, 2, 9, 2]);
    assert_eq!(assignment.current(), Some(1));
}

#[test]
fn walkthrough_deal_next_swap() {
    let mut table = table_with(&["A", "B"], &["C"]);
    set_cards(&mut table, &[3, 7, 1]);
    assert_eq!(table.current_index(), Some(2));
    assert_eq!(table.current_name(), Some("C"));

    assert_eq!(table.next_turn(), Some(0));
    assert_eq!(table.current_name(), Some("A"));

    assert_eq!(table.swap("7"), Ok(Some(1)));
    assert_eq!(table.cards(), &[7, 3, 1]);
    assert_eq!(table.current_index(), Some(1));
    assert_eq!(table.current_card(), Some(3));
}

#[test]
fn next_stops_at_highest_card() {
    let mut table = table_with(&["A", "B"], &["C"]);
    set_cards(&mut table, &[3, 7, 1]);

    table.next_turn();
    table.next_turn();
    assert_eq!(table.current_index(), Some(1));
    assert!(table.is_last_turn());

    assert_eq!(table.next_turn(), Some(1));
    assert_eq!(table.next_turn(), Some(1));
}

#[test]
fn next_without_deal_does_nothing() {
    let mut table = table_with(&["A"], &[]);
    assert_eq!(table.next_turn(), None);
    assert!(!table.can_advance());

    assert_eq!(advance(&[], None), None);
    assert_eq!(advance(&[5, 6], None), None);
    assert_eq!(advance(&[5, 6], Some(9)), Some(9));
}

#[test]
fn next_with_duplicate_values_resolves_to_first_holder() {
    // Both 2s resolve to position 0, so the turn cannot leave it by advancing.
    assert_eq!(advance(&[2, 2, 5], Some(0)), Some(0));
    assert_eq!(advance(&[2, 2, 5], Some(1)), Some(0));
    assert_eq!(advance(&[5, 2, 2], Some(2)), Some(1));
}

#[test]
fn swap_reports_errors_in_order() {
    let mut table = table_with(&["A", "B"], &["C"]);
    set_cards(&mut table, &[3, 7, 1]);
    table.next_turn();

    assert_eq!(table.swap("seven"), Err(SwapError::NotANumber));
    assert_eq!(table.swap_error(), Some(SwapError::NotANumber));

    assert_eq!(table.swap("3"), Err(SwapError::NotHigher));
    assert_eq!(table.swap("-4"), Err(SwapError::NotHigher));
    assert_eq!(table.swap("5"), Err(SwapError::NotFound));
    assert_eq!(table.swap("300"), Err(SwapError::NotFound));
    assert_eq!(table.swap_error(), Some(SwapError::NotFound));

    assert_eq!(table.cards(), &[3, 7, 1]);
    assert_eq!(table.current_index(), Some(0));

    assert_eq!(table.swap(" 7 "), Ok(Some(1)));
    assert_eq!(table.swap_error(), None);
}

#[test]
fn swap_error_messages_are_readable() {
    assert_eq!(
        SwapError::NotANumber.to_string(),
        "Please enter a valid number."
    );
    assert_eq!(
        SwapError::NotHigher.to_string(),
        "Number must be higher than the current card."
    );
    assert_eq!(
        SwapError::NotFound.to_string(),
        "Number not found in the table."
    );
}

#[test]
fn swap_without_deal_is_skipped() {
    let mut table = table_with(&["A"], &[]);
    assert_eq!(table.swap("garbage"), Ok(None));
    assert_eq!(table.swap_error(), None);

    assert_eq!(swap_cards(&[], None, "4"), Ok((Vec::new(), None)));
    assert_eq!(swap_cards(&[1, 2], None, "x"), Ok((vec![1, 2], None)));
}

#[test]
fn swap_uses_first_holder_of_duplicate_value() {
    let (cards, current) = swap_cards(&[1, 6, 3, 6], Some(0), "6").unwrap();
    assert_eq!(cards, vec![6, 1, 3, 6]);
    assert_eq!(current, Some(1));
}

#[test]
fn parse_card_number_is_lenient() {
    assert_eq!(parse_card_number("4"), Some(4));
    assert_eq!(parse_card_number("+4"), Some(4));
    assert_eq!(parse_card_number("  12abc"), Some(12));
    assert_eq!(parse_card_number("9.9"), Some(9));
    assert_eq!(parse_card_number(""), None);
    assert_eq!(parse_card_number("-"), None);
    assert_eq!(parse_card_number("abc"), None);
    assert_eq!(parse_card_number(".5"), None);
    assert_eq!(
        parse_card_number("99999999999999999999999"),
        Some(i64::MAX)
    );
}

#[test]
fn deal_keeps_previous_swap_error_until_next_attempt() {
    let mut table = table_with(&["A", "B"], &[]);
    set_cards(&mut table, &[2, 5]);
    let _ = table.swap("x");
    table.deal();
    assert_eq!(table.swap_error(), Some(SwapError::NotANumber));

    table.reset();
    assert_eq!(table.swap_error(), None);
    assert!(table.cards().is_empty());
    assert_eq!(table.roster().len(), 2);
}

#[test]
fn roster_edits_leave_deal_stale() {
    let mut table = table_with(&["A", "B"], &["C"]);
    set_cards(&mut table, &[3, 7, 1]);

    assert_eq!(table.remove_name(Side::Foes, 0).unwrap(), "C");
    assert_eq!(table.cards(), &[3, 7, 1]);
    assert_eq!(table.current_index(), Some(2));
    assert_eq!(table.current_name(), None);

    let view = table.view();
    assert_eq!(view.columns.len(), 3);
    assert_eq!(view.columns[2].name, None);
    assert_eq!(view.columns[2].side, None);
    assert!(view.columns[2].is_current);
}

#[test]
fn roster_add_trims_and_rejects_blank_names() {
    let mut table = table_with(&[], &[]);
    assert_eq!(table.add_name(Side::Friends, "   "), Err(RosterError::EmptyName));
    table.add_name(Side::Friends, "  Aria ").unwrap();
    assert_eq!(table.roster().side(Side::Friends), &["Aria".to_string()]);

    let mut untrimmed = Table::new(TableOptions::default().with_trim_names(false), 1);
    untrimmed.add_name(Side::Foes, " Orc ").unwrap();
    assert_eq!(untrimmed.roster().side(Side::Foes), &[" Orc ".to_string()]);
}

#[test]
fn roster_reorder_and_bounds() {
    let mut table = table_with(&["A", "B", "C"], &[]);

    table.move_up(Side::Friends, 2).unwrap();
    assert_eq!(table.roster().names().collect::<Vec<_>>(), ["A", "C", "B"]);

    table.move_down(Side::Friends, 0).unwrap();
    assert_eq!(table.roster().names().collect::<Vec<_>>(), ["C", "A", "B"]);

    assert_eq!(table.move_up(Side::Friends, 0), Err(RosterError::CannotMove));
    assert_eq!(table.move_down(Side::Friends, 2), Err(RosterError::CannotMove));
    assert_eq!(
        table.move_up(Side::Foes, 0),
        Err(RosterError::IndexOutOfRange { index: 0, len: 0 })
    );
    assert_eq!(
        table.remove_name(Side::Friends, 5),
        Err(RosterError::IndexOutOfRange { index: 5, len: 3 })
    );
    assert_eq!(table.roster().names().collect::<Vec<_>>(), ["C", "A", "B"]);

    table.clear_side(Side::Friends);
    assert!(table.roster().is_empty());
}

#[test]
fn roster_deals_friends_before_foes() {
    let table = table_with(&["A", "B"], &["X", "Y"]);
    let roster = table.roster();

    assert_eq!(roster.names().collect::<Vec<_>>(), ["A", "B", "X", "Y"]);
    assert_eq!(roster.side_of(1), Some(Side::Friends));
    assert_eq!(roster.side_of(2), Some(Side::Foes));
    assert_eq!(roster.side_of(4), None);
}

#[test]
fn view_marks_current_and_divider() {
    let mut table = table_with(&["A", "B"], &["X"]);
    set_cards(&mut table, &[6, 2, 9]);

    let view = table.view();
    assert_eq!(view.divider_after, Some(1));
    let names: Vec<_> = view.columns.iter().map(|column| column.name).collect();
    assert_eq!(names, [Some("A"), Some("B"), Some("X")]);
    let current: Vec<_> = view.columns.iter().map(|column| column.is_current).collect();
    assert_eq!(current, [false, true, false]);
    assert_eq!(view.columns[2].side, Some(Side::Foes));

    let friends_only = {
        let mut table = table_with(&["A", "B"], &[]);
        set_cards(&mut table, &[1, 2]);
        table.view().divider_after
    };
    assert_eq!(friends_only, None);
}

#[test]
fn controls_follow_table_state() {
    let mut table = table_with(&[], &[]);
    assert!(!table.can_deal());
    assert!(!table.can_advance());
    assert!(!table.can_swap("3"));

    table.add_name(Side::Friends, "A").unwrap();
    assert!(table.can_deal());
    table.deal();
    assert!(!table.can_advance());
    assert!(table.can_swap("3"));
    assert!(!table.can_swap(""));

    table.add_name(Side::Foes, "B").unwrap();
    table.deal();
    assert!(table.can_advance());
}

#[test]
fn actions_drive_the_table() {
    let table = Table::new(TableOptions::default(), 5)
        .apply(Action::AddName {
            side: Side::Friends,
            name: "Aria".into(),
        })
        .apply(Action::AddName {
            side: Side::Foes,
            name: "Ogre".into(),
        })
        .apply(Action::AddName {
            side: Side::Foes,
            name: "  ".into(),
        })
        .apply(Action::MoveUp {
            side: Side::Friends,
            index: 0,
        })
        .apply(Action::Deal);

    assert_eq!(table.roster().len(), 2);
    assert_eq!(table.cards().len(), 2);

    let mut expected = table.clone();
    expected.next_turn();
    let table = table.apply(Action::Next);
    assert_eq!(table.current_index(), expected.current_index());

    let table = table.apply(Action::Swap("not a card".into()));
    assert_eq!(table.swap_error(), Some(SwapError::NotANumber));

    let table = table
        .apply(Action::Clear(Side::Foes))
        .apply(Action::Reset);
    assert_eq!(table.roster().len(), 1);
    assert!(table.cards().is_empty());
    assert_eq!(table.swap_error(), None);
}

#[test]
fn next_stays_on_duplicate_highest_card() {
    assert_eq!(advance(&[10, 3, 10], Some(2)), Some(2));
    assert_eq!(advance(&[10, 3, 10], Some(0)), Some(0));
    assert_eq!(advance(&[10, 3, 10], Some(1)), Some(0));

    let mut table = table_with(&["A", "B"], &["C"]);
    table.set_assignment(Assignment::with_current(vec![10, 3, 10], Some(2)));
    assert!(table.is_last_turn());
    assert_eq!(table.next_turn(), Some(2));
    assert_eq!(table.current_name(), Some("C"));
}

#[test]
fn emptying_the_roster_drops_the_deal() {
    let mut table = table_with(&["A"], &["B"]);
    table.deal();
    assert!(table.assignment().is_dealt());

    table.clear_side(Side::Friends);
    assert_eq!(table.cards().len(), 2);
    assert!(table.current_index().is_some());

    table.clear_side(Side::Foes);
    assert!(table.roster().is_empty());
    assert!(table.cards().is_empty());
    assert_eq!(table.current_index(), None);
    assert!(!table.can_advance());
}

#[test]
fn removing_the_last_name_drops_the_deal() {
    let mut table = table_with(&["A"], &[]);
    table.deal();
    let _ = table.swap("x");

    assert_eq!(table.remove_name(Side::Friends, 0).unwrap(), "A");
    assert!(table.cards().is_empty());
    assert_eq!(table.current_index(), None);
    assert_eq!(table.swap_error(), None);
}

#[test]
fn assignment_with_current_drops_invalid_position() {
    let kept = Assignment::with_current(vec![4, 8], Some(1));
    assert_eq!(kept.current(), Some(1));
    assert_eq!(kept.current_card(), Some(8));

    let dropped = Assignment::with_current(vec![4, 8], Some(2));
    assert_eq!(dropped.current(), None);
    assert_eq!(dropped.current_card(), None);
    assert_eq!(dropped.cards(), &[4, 8]);

    let empty = Assignment::with_current(Vec::new(), Some(0));
    assert_eq!(empty.current(), None);
    assert!(!empty.is_dealt());
}

#[test]
fn table_keeps_its_options() {
    let options = TableOptions::default().with_pool_size(4);
    let table = Table::new(options, 11);
    assert_eq!(*table.options(), options);
    assert_eq!(table.options().pool_size, 4);
}

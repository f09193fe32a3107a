use super::*;

use std::cell::Cell;

fn item(id: ItemId) -> Item {
    Item::new(id, format!("card {id}"), Color::WHITE, ImageRef::new(format!("img{id}")))
}

fn stack_of(count: u64) -> CardStack {
    CardStack::new((1..=count).map(item).collect()).expect("valid stack")
}

#[test]
fn relative_position_is_cyclic() {
    assert_eq!(relative_position(0, 0, 3), 0);
    assert_eq!(relative_position(2, 0, 3), 2);
    assert_eq!(relative_position(0, 1, 3), 2);
    assert_eq!(relative_position(1, 2, 3), 2);
    assert_eq!(relative_position(2, 2, 3), 0);
    assert_eq!(relative_position(0, 0, 0), 0);
}

#[test]
fn relative_positions_form_a_permutation() {
    for total in 1..=6 {
        for front in 0..total {
            let mut positions: Vec<usize> = (0..total)
                .map(|index| relative_position(index, front, total))
                .collect();
            positions.sort_unstable();
            assert_eq!(positions, (0..total).collect::<Vec<_>>(), "front {front} of {total}");
        }
    }
}

#[test]
fn rejects_empty_and_duplicate_items() {
    assert_eq!(CardStack::new(Vec::new()).unwrap_err(), DeckError::EmptyStack);
    assert_eq!(
        CardStack::new(vec![item(1), item(2), item(1)]).unwrap_err(),
        DeckError::DuplicateItemId(1)
    );
}

#[test]
fn advance_wraps_around() {
    let stack = stack_of(3);
    assert_eq!(stack.front_item().id, 1);
    for expected in [1, 2, 0, 1] {
        stack.advance();
        assert_eq!(stack.front_index(), expected);
    }
    assert_eq!(stack.front_item().id, 2);
    assert_eq!(stack.relative_position(0), 2);
    assert_eq!(stack.index_of(3), Some(2));
    assert_eq!(stack.index_of(42), None);
}

#[test]
fn single_card_advance_still_notifies() {
    let stack = stack_of(1);
    let writes = Rc::new(Cell::new(0));
    let _registration = {
        let writes = Rc::clone(&writes);
        stack
            .front_index_value()
            .observe(move |_| writes.set(writes.get() + 1))
    };

    stack.advance();
    stack.advance();

    assert_eq!(stack.front_index(), 0);
    assert_eq!(writes.get(), 2);
}

#[test]
fn clones_share_the_front_index() {
    let stack = stack_of(2);
    let other = stack.clone();
    other.advance();
    assert_eq!(stack.front_index(), 1);
    assert_eq!(stack.items().len(), 2);
    assert_eq!(stack.items()[1].image.as_str(), "img2");
}

/*!
 * Removal Tests
 * Removal by node identity, by index and by value
 */

use block_list::{BlockList, ListError, MemoryBlock};
use pretty_assertions::assert_eq;

fn numbered(n: u32) -> BlockList<u32> {
    (0..n).collect()
}

fn tail_value(list: &BlockList<u32>) -> Option<u32> {
    list.last().map(|n| *n.block())
}

#[test]
fn test_remove_by_index_returns_block() {
    let mut list = numbered(4);

    assert_eq!(list.remove(2).unwrap(), 2);
    assert_eq!(list.to_string(), "{0,1,3}");
    assert_eq!(list.size(), 3);
}

#[test]
fn test_remove_by_index_bounds() {
    let mut list = numbered(2);

    assert_eq!(
        list.remove(2).unwrap_err(),
        ListError::IndexOutOfBounds {
            operation: "remove",
            index: 2,
            size: 2,
        }
    );
    assert_eq!(list.size(), 2);

    let mut empty: BlockList<u32> = BlockList::new();
    assert!(empty.remove(0).is_err());
}

#[test]
fn test_remove_head_updates_first() {
    let mut list = numbered(3);
    list.remove(0).unwrap();

    assert_eq!(list.first().map(|n| *n.block()), Some(1));
    assert_eq!(tail_value(&list), Some(2));
}

#[test]
fn test_remove_tail_updates_last() {
    // by index
    let mut list = numbered(3);
    list.remove(2).unwrap();
    assert_eq!(tail_value(&list), Some(1));

    // by value
    let mut list = numbered(3);
    assert!(list.remove_block(&2).unwrap());
    assert_eq!(tail_value(&list), Some(1));

    // by node
    let mut list = numbered(3);
    let tail = list.last().map(|n| n.id()).unwrap();
    assert!(list.remove_node(tail).unwrap());
    assert_eq!(tail_value(&list), Some(1));

    // Appends land after the new tail
    list.add_last(7);
    assert_eq!(list.to_string(), "{0,1,7}");
}

#[test]
fn test_remove_only_element_empties_list() {
    for removal in 0..3 {
        let mut list = numbered(1);
        match removal {
            0 => {
                list.remove(0).unwrap();
            }
            1 => {
                assert!(list.remove_block(&0).unwrap());
            }
            _ => {
                let id = list.first().map(|n| n.id()).unwrap();
                assert!(list.remove_node(id).unwrap());
            }
        }

        assert_eq!(list.size(), 0);
        assert!(list.first().is_none());
        assert!(list.last().is_none());
    }
}

#[test]
fn test_remove_index_of_removes_one_occurrence() {
    let mut list: BlockList = [
        MemoryBlock::new(0, 8),
        MemoryBlock::new(8, 8),
        MemoryBlock::new(0, 8),
    ]
    .into_iter()
    .collect();

    let target = MemoryBlock::new(0, 8);
    let index = list.index_of(&target).unwrap();
    list.remove(index).unwrap();

    assert_eq!(list.size(), 2);
    assert_eq!(list.index_of(&target), Some(1));
}

#[test]
fn test_remove_block_removes_first_match_only() {
    let mut list: BlockList<u32> = [5, 1, 5, 2].into_iter().collect();

    assert!(list.remove_block(&5).unwrap());
    assert_eq!(list.to_string(), "{1,5,2}");
}

#[test]
fn test_remove_block_not_found_is_noop() {
    let mut list = numbered(3);

    assert!(!list.remove_block(&42).unwrap());
    assert_eq!(list.to_string(), "{0,1,2}");
    assert_eq!(list.size(), 3);
    assert_eq!(tail_value(&list), Some(2));
}

#[test]
fn test_remove_node_from_other_list_is_noop() {
    let mut list = numbered(3);
    let other = numbered(3);
    let foreign = other.first().map(|n| n.id()).unwrap();

    assert!(!list.remove_node(foreign).unwrap());
    assert_eq!(list.size(), 3);
    assert_eq!(list.to_string(), "{0,1,2}");
}

#[test]
fn test_remove_node_interior() {
    let mut list = numbered(4);
    let id = list.get_node(2).unwrap().map(|n| n.id()).unwrap();

    assert!(list.remove_node(id).unwrap());
    assert_eq!(list.to_string(), "{0,1,3}");
    assert_eq!(tail_value(&list), Some(3));
}

#[test]
fn test_value_and_node_removal_reject_empty_list() {
    let mut list = numbered(1);
    let id = list.first().map(|n| n.id()).unwrap();
    list.remove(0).unwrap();

    assert_eq!(
        list.remove_block(&0).unwrap_err(),
        ListError::EmptyList {
            operation: "remove_block"
        }
    );
    assert_eq!(
        list.remove_node(id).unwrap_err(),
        ListError::EmptyList {
            operation: "remove_node"
        }
    );
}

#[test]
fn test_stale_node_id_never_removes_a_newer_node() {
    let mut list = numbered(2);
    let stale = list.last().map(|n| n.id()).unwrap();
    assert!(list.remove_node(stale).unwrap());

    // New nodes may land at the freed address; the old id must not match them
    for value in 10..20 {
        list.add_last(value);
        assert!(!list.remove_node(stale).unwrap());
    }
    assert_eq!(list.size(), 11);
    assert_eq!(list.first().map(|n| *n.block()), Some(0));
}

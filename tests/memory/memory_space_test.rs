/*!
 * Memory Space Tests
 * Allocation, release and defragmentation over block lists
 */

use block_list::memory::{Allocator, MemoryInfo, MemoryPressure};
use block_list::{MemoryBlock, MemoryError, MemorySpace};
use pretty_assertions::assert_eq;

#[test]
fn test_fresh_space_has_one_free_block() {
    let space = MemorySpace::new(100);

    assert_eq!(space.capacity(), 100);
    assert_eq!(space.free_list().to_string(), "{(0 , 100)}");
    assert!(space.allocated_list().is_empty());
    assert_eq!(space.to_string(), "free: {(0 , 100)}\nallocated: {}");
}

#[test]
fn test_malloc_is_first_fit() {
    let mut space = MemorySpace::new(100);
    let a = space.malloc(20).unwrap();
    let b = space.malloc(30).unwrap();
    space.malloc(10).unwrap();

    // Free list now: (60 , 40), (0 , 20), (20 , 30)
    space.free(a).unwrap();
    space.free(b).unwrap();

    // 25 bytes: the first fitting block is the tail remainder at 60
    let c = space.malloc(25).unwrap();
    assert_eq!(c, 60);
    assert_eq!(
        space.free_list().to_string(),
        "{(85 , 15),(0 , 20),(20 , 30)}"
    );
}

#[test]
fn test_free_moves_block_to_free_tail() {
    let mut space = MemorySpace::new(64);
    let a = space.malloc(16).unwrap();
    let b = space.malloc(16).unwrap();

    space.free(a).unwrap();

    assert_eq!(space.allocated_list().to_string(), "{(16 , 16)}");
    assert_eq!(space.free_list().to_string(), "{(32 , 32),(0 , 16)}");
    assert_eq!(space.allocated_list().index_of(&MemoryBlock::new(b, 16)), Some(0));
}

#[test]
fn test_malloc_errors() {
    let mut space = MemorySpace::new(32);

    assert_eq!(space.malloc(0), Err(MemoryError::InvalidLength));
    space.malloc(32).unwrap();
    assert_eq!(
        space.malloc(1),
        Err(MemoryError::OutOfMemory {
            requested: 1,
            largest_free: 0,
            free_total: 0,
        })
    );
}

#[test]
fn test_fragmentation_blocks_large_request_until_defrag() {
    let mut space = MemorySpace::new(30);
    let addrs: Vec<usize> = (0..3).map(|_| space.malloc(10).unwrap()).collect();
    for addr in &addrs {
        space.free(*addr).unwrap();
    }

    assert!(matches!(
        space.malloc(30),
        Err(MemoryError::OutOfMemory { largest_free: 10, free_total: 30, .. })
    ));

    assert_eq!(space.defrag().unwrap(), 2);
    assert_eq!(space.free_list().to_string(), "{(0 , 30)}");
    assert_eq!(space.malloc(30).unwrap(), 0);
}

#[test]
fn test_defrag_leaves_gaps_alone() {
    let mut space = MemorySpace::new(40);
    let a = space.malloc(10).unwrap();
    space.malloc(10).unwrap();
    let c = space.malloc(10).unwrap();

    space.free(a).unwrap();
    space.free(c).unwrap();

    // (20 , 10) touches the tail remainder (30 , 10); (0 , 10) touches nothing
    assert_eq!(space.defrag().unwrap(), 1);
    assert_eq!(space.free_list().to_string(), "{(0 , 10),(20 , 20)}");
    assert_eq!(space.defrag().unwrap(), 0);
}

#[test]
fn test_free_errors() {
    let mut space = MemorySpace::new(16);
    assert_eq!(space.free(0), Err(MemoryError::NothingAllocated));

    space.malloc(8).unwrap();
    assert_eq!(space.free(4), Err(MemoryError::InvalidAddress(4)));
    assert_eq!(space.allocated_list().size(), 1);
}

#[test]
fn test_stats_and_pressure() {
    let mut space = MemorySpace::new(100);
    space.malloc(50).unwrap();
    let b = space.malloc(40).unwrap();
    space.free(b).unwrap();

    // Free list is (90 , 10), (50 , 40); only the second fits
    assert_eq!(space.malloc(35).unwrap(), 50);

    let stats = space.stats();
    assert_eq!(stats.allocated_bytes, 85);
    assert_eq!(stats.free_bytes, 15);
    assert_eq!(stats.allocated_blocks, 2);
    assert_eq!(stats.free_blocks, 2);
    assert_eq!(stats.largest_free_block, 10);
    assert_eq!(stats.fragmented_blocks(), 1);
    assert_eq!(space.pressure(), MemoryPressure::High);

    space.malloc(10).unwrap();
    assert_eq!(space.pressure(), MemoryPressure::Critical);
}

#[test]
fn test_allocator_trait_object() {
    fn churn(allocator: &mut dyn Allocator) -> usize {
        let a = allocator.malloc(8).unwrap();
        let b = allocator.malloc(8).unwrap();
        allocator.free(a).unwrap();
        allocator.free(b).unwrap();
        allocator.defrag().unwrap()
    }

    let mut space = MemorySpace::default();
    // (16 , rest) + (0 , 8) + (8 , 8) collapse into one block
    assert_eq!(churn(&mut space), 2);
    assert_eq!(space.free_list().size(), 1);
}

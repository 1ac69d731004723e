mod common;

use atrium::{BlockPatch, BlockSize, EngineError, OrderingError, SpaceId};
use common::{TestResult, indices_of, sized_block, test_engine};
use std::collections::HashSet;
use std::sync::Arc;

#[test]
fn test_insert_at_front_renumbers_originals() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let engine = test_engine();

    for i in 0..3 {
        engine.place_block(sized_block(0, Some(i), BlockSize::Medium))?;
    }
    let front = engine.place_block(sized_block(0, Some(0), BlockSize::Medium))?;

    assert_eq!(front.block_index, 0);
    let snapshot = engine.snapshot_row(&SpaceId::root(), 0)?;
    assert_eq!(indices_of(&snapshot.blocks), vec![0, 1, 2, 3]);
    Ok(())
}

#[test]
fn test_empty_row_rejects_nonzero_index() -> TestResult {
    let engine = test_engine();

    let result = engine.place_block(sized_block(0, Some(1), BlockSize::Medium));
    assert!(matches!(
        result,
        Err(EngineError::Ordering(OrderingError::InvalidIndex { .. }))
    ));
    Ok(())
}

#[test]
fn test_mid_row_insert_keeps_density() -> TestResult {
    let engine = test_engine();

    for i in 0..4 {
        engine.place_block(sized_block(0, Some(i), BlockSize::Small))?;
    }
    engine.place_block(sized_block(0, Some(2), BlockSize::Large))?;

    let snapshot = engine.snapshot_row(&SpaceId::root(), 0)?;
    assert_eq!(indices_of(&snapshot.blocks), vec![0, 1, 2, 3, 4]);
    assert_eq!(snapshot.blocks[2].size, BlockSize::Large);
    Ok(())
}

#[test]
fn test_concurrent_inserts_never_collide() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let engine = Arc::new(test_engine());
    engine.place_block(sized_block(0, Some(0), BlockSize::Small))?;

    let handles: Vec<_> = (0..12)
        .map(|i| {
            let engine = engine.clone();
            std::thread::spawn(move || {
                // Half append, half insert at the front.
                let index = if i % 2 == 0 { Some(0) } else { None };
                engine
                    .place_block(sized_block(0, index, BlockSize::Small))
                    .unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let snapshot = engine.snapshot_row(&SpaceId::root(), 0)?;
    let indices = indices_of(&snapshot.blocks);
    let unique: HashSet<u32> = indices.iter().copied().collect();
    assert_eq!(unique.len(), indices.len());
    // No deletions happened, so the range stays contiguous from 0.
    assert_eq!(indices, (0..13).collect::<Vec<u32>>());
    Ok(())
}

#[test]
fn test_rows_mutate_independently() -> TestResult {
    let engine = Arc::new(test_engine());

    let handles: Vec<_> = (0..4)
        .map(|row| {
            let engine = engine.clone();
            std::thread::spawn(move || {
                for _ in 0..5 {
                    engine
                        .place_block(sized_block(row, None, BlockSize::Small))
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    for row in 0..4 {
        let snapshot = engine.snapshot_row(&SpaceId::root(), row)?;
        assert_eq!(indices_of(&snapshot.blocks), vec![0, 1, 2, 3, 4]);
    }
    Ok(())
}

#[test]
fn test_delete_gap_is_not_compacted() -> TestResult {
    let engine = test_engine();

    for i in 0..3 {
        engine.place_block(sized_block(0, Some(i), BlockSize::Medium))?;
    }
    let middle = engine.snapshot_row(&SpaceId::root(), 0)?.blocks[1].id;
    engine.remove_block(middle)?;

    let snapshot = engine.snapshot_row(&SpaceId::root(), 0)?;
    assert_eq!(indices_of(&snapshot.blocks), vec![0, 2]);

    // Appends continue past the gap.
    let appended = engine.place_block(sized_block(0, None, BlockSize::Medium))?;
    assert_eq!(appended.block_index, 3);
    Ok(())
}

#[test]
fn test_move_to_other_row_appends_when_index_unset() -> TestResult {
    let engine = test_engine();

    let moving = engine.place_block(sized_block(0, Some(0), BlockSize::Medium))?;
    engine.place_block(sized_block(1, Some(0), BlockSize::Medium))?;

    let moved = engine.update_block(
        moving.id,
        BlockPatch {
            row_index: 1,
            block_index: None,
            size: moving.size,
            entities: vec![],
        },
    )?;

    assert_eq!(moved.row_index, 1);
    assert_eq!(moved.block_index, 1);
    Ok(())
}

#[test]
fn test_move_with_explicit_index_shifts_target() -> TestResult {
    let engine = test_engine();

    let moving = engine.place_block(sized_block(0, Some(0), BlockSize::Medium))?;
    engine.place_block(sized_block(1, Some(0), BlockSize::Medium))?;
    engine.place_block(sized_block(1, Some(1), BlockSize::Medium))?;

    engine.update_block(
        moving.id,
        BlockPatch {
            row_index: 1,
            block_index: Some(1),
            size: moving.size,
            entities: vec![],
        },
    )?;

    let target = engine.snapshot_row(&SpaceId::root(), 1)?;
    assert_eq!(indices_of(&target.blocks), vec![0, 1, 2]);
    assert_eq!(target.blocks[1].id, moving.id);
    Ok(())
}

#[test]
fn test_capacity_rejection_precedes_mutation() -> TestResult {
    use atrium::{InMemoryBlockStore, RendererRegistry, SpaceEngine, SpaceLimits};

    let engine = SpaceEngine::new(
        Arc::new(InMemoryBlockStore::new()),
        SpaceLimits {
            max_blocks_per_space: 3,
            ..SpaceLimits::default()
        },
        RendererRegistry::new(),
    );
    for i in 0..3 {
        engine.place_block(sized_block(0, Some(i), BlockSize::Small))?;
    }

    let rejected = engine.place_block(sized_block(0, Some(0), BlockSize::Small));
    assert!(matches!(
        rejected,
        Err(EngineError::Ordering(OrderingError::CapacityExceeded {
            limit: 3,
            ..
        }))
    ));
    let snapshot = engine.snapshot_row(&SpaceId::root(), 0)?;
    assert_eq!(indices_of(&snapshot.blocks), vec![0, 1, 2]);
    Ok(())
}

#[test]
fn test_spaces_are_isolated() -> TestResult {
    let engine = test_engine();

    engine.place_block(sized_block(0, Some(0), BlockSize::Small))?;
    let mut other = sized_block(0, Some(0), BlockSize::Small);
    other.space = SpaceId::new("sidebar");
    engine.place_block(other)?;

    let root = engine.snapshot_row(&SpaceId::root(), 0)?;
    let sidebar = engine.snapshot_row(&SpaceId::new("sidebar"), 0)?;
    assert_eq!(root.blocks.len(), 1);
    assert_eq!(sidebar.blocks.len(), 1);
    Ok(())
}

use rand::rngs::StdRng;
use rand::SeedableRng;

use voxtone::grid::{ops, Tone, VoxelGrid};
use voxtone::morph::{catalog, select, ExecutionStrategy, ToneComposer};
use voxtone::place::{plan_blocks, Palette, PlaceOptions};

/// A hollow 5x5 square of walls, two layers tall, with corner posts three
/// layers tall.
fn sample_house() -> VoxelGrid<u8> {
    let mut grid = VoxelGrid::<u8>::zeros([5, 5, 3].into());
    for d in 0..5 {
        for h in 0..5 {
            let on_edge = d == 0 || d == 4 || h == 0 || h == 4;
            if !on_edge {
                continue;
            }
            let corner = (d == 0 || d == 4) && (h == 0 || h == 4);
            let top = if corner { 3 } else { 2 };
            for w in 0..top {
                grid.set(d, h, w, 1);
            }
        }
    }
    grid
}

#[test]
fn straight_pair_misaligned_with_unrotated_kernel_is_missed() {
    // 4x4x1 grid, a 2-cell run along the first horizontal axis
    let mut grid = VoxelGrid::<u8>::zeros([4, 4, 1].into());
    grid.set(1, 1, 0, 1);
    grid.set(2, 1, 0, 1);

    let template = catalog::pillar_pair().unwrap();
    let mut hits = VoxelGrid::<u8>::from_size_val(grid.size(), 9);
    select(
        &grid,
        &mut hits,
        template.include(),
        template.exclude(),
        ExecutionStrategy::Serial,
    )
    .unwrap();

    assert!(hits.as_slice().iter().all(|&v| v == 0));
}

#[test]
fn isolated_cell_is_never_a_pillar() {
    let mut grid = VoxelGrid::<u8>::zeros([4, 4, 1].into());
    grid.set(1, 1, 0, 1);

    let template = catalog::pillar_pair().unwrap();
    let mut hits = VoxelGrid::<u8>::zeros(grid.size());
    template
        .detect(&grid, &mut hits, ExecutionStrategy::Serial)
        .unwrap();

    assert!(hits.as_slice().iter().all(|&v| v == 0));
}

#[test]
fn pair_along_every_cardinal_direction_is_found_after_rotation_merge() {
    let template = catalog::pillar_pair().unwrap();

    for (dd, dh) in [(0i32, 1i32), (0, -1), (1, 0), (-1, 0)] {
        let mut grid = VoxelGrid::<u8>::zeros([5, 5, 1].into());
        grid.set(2, 2, 0, 1);
        grid.set((2 + dd) as usize, (2 + dh) as usize, 0, 1);

        let mut hits = VoxelGrid::<u8>::zeros(grid.size());
        template
            .detect(&grid, &mut hits, ExecutionStrategy::Serial)
            .unwrap();

        assert_eq!(hits.get(2, 2, 0), 1, "pair along ({dd},{dh})");
    }
}

#[test]
fn wall_fires_at_the_cell_with_an_occupied_upward_neighbor() {
    // 2-cell vertical stack
    let mut grid = VoxelGrid::<u8>::zeros([3, 3, 3].into());
    grid.set(1, 1, 0, 1);
    grid.set(1, 1, 1, 1);

    let template = catalog::wall().unwrap();
    let mut hits = VoxelGrid::<u8>::zeros(grid.size());
    template
        .detect(&grid, &mut hits, ExecutionStrategy::Serial)
        .unwrap();

    assert_eq!(hits.get(1, 1, 0), 1);
    // nothing beyond the top of the stack
    assert_eq!(hits.get(1, 1, 1), 0);
    assert_eq!(hits.get(0, 0, 0), 0);
}

#[test]
fn two_tone_without_matches_is_the_identity_tagging() {
    let mut grid = VoxelGrid::<u8>::zeros([4, 4, 1].into());
    grid.set(0, 0, 0, 1);
    grid.set(2, 3, 0, 1);

    let composer = ToneComposer::new(ExecutionStrategy::Serial).unwrap();
    let mut tagged = VoxelGrid::<u8>::zeros(grid.size());
    composer.two_tone(&grid, &mut tagged).unwrap();

    assert_eq!(tagged, grid);
}

#[test]
fn merge_is_idempotent() {
    let composer = ToneComposer::new(ExecutionStrategy::Serial).unwrap();
    let grid = sample_house();
    let mut tagged = VoxelGrid::<u8>::zeros(grid.size());
    composer.three_tone(&grid, &mut tagged).unwrap();

    let merged = ops::merge(&[&tagged, &tagged]).unwrap();
    assert_eq!(merged, tagged);
}

#[test]
fn house_walls_and_posts_are_classified() {
    let composer = ToneComposer::new(ExecutionStrategy::Parallel).unwrap();
    let grid = sample_house();
    let mut tagged = VoxelGrid::<u8>::zeros(grid.size());
    composer.three_tone(&grid, &mut tagged).unwrap();

    // every occupied cell keeps a nonzero tag, background stays 0
    for (s, t) in grid.as_slice().iter().zip(tagged.as_slice()) {
        assert_eq!(*s == 0, *t == 0);
    }

    // corners sit at an L of two wall runs: the pillar tag wins over the
    // wall tag there, and the lone cell topping the post is plain fill
    assert_eq!(tagged.get(0, 0, 0), Tone::Pillar.value());
    assert_eq!(tagged.get(0, 0, 1), Tone::Pillar.value());
    assert_eq!(tagged.get(0, 0, 2), Tone::Fill.value());

    // a straight edge cell with an occupied cell above is a wall segment
    assert_eq!(tagged.get(0, 2, 0), Tone::Wall.value());
    assert_ne!(tagged.get(0, 2, 0), Tone::Pillar.value());
}

#[test]
fn tagged_house_resolves_to_a_placement_plan() {
    let composer = ToneComposer::new(ExecutionStrategy::Serial).unwrap();
    let grid = sample_house();
    let mut tagged = VoxelGrid::<u8>::zeros(grid.size());
    composer.three_tone(&grid, &mut tagged).unwrap();

    let options = PlaceOptions {
        offset_x: 32,
        offset_y: 0,
        ground_y: -61,
        clear_space: false,
    };
    let mut rng = StdRng::seed_from_u64(1);
    let blocks = plan_blocks(&tagged, &Palette::ruins(), &options, &mut rng).unwrap();

    let occupied = grid.as_slice().iter().filter(|&&v| v != 0).count();
    assert_eq!(blocks.len(), occupied);
    assert!(blocks.iter().all(|b| b.id != "minecraft:air"));
    assert!(blocks.iter().all(|b| b.x >= 32 && b.y >= -61));
}

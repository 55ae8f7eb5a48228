use hex_life::application::{Driver, SharedGrid};
use hex_life::domain::layout::{self, CELL_COUNT};
use hex_life::domain::neighbors::SHARED_EDGES;
use hex_life::domain::{
    Cell, HexGrid, LevelData, LevelError, Pattern, PatternError, Turn, neighbor_coord, presets,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::thread;
use std::time::Duration;

fn assert_borders_match(grid: &HexGrid) {
    let mut checked = 0;
    for hexagon in grid.tiles().filter(|h| h.is_active()) {
        for edge in &SHARED_EDGES {
            let coord = neighbor_coord(hexagon.coord(), edge.direction);
            let neighbor = grid.hexagon(coord.x, coord.y);
            if !neighbor.is_active() {
                continue;
            }
            for pair in edge.pairs {
                assert_eq!(
                    hexagon.cell_at(pair.own),
                    neighbor.cell_at(pair.theirs),
                    "{} {:?} vs {} {:?}",
                    hexagon.coord(),
                    pair.own,
                    coord,
                    pair.theirs
                );
                checked += 1;
            }
        }
    }
    assert!(checked > 0);
}

#[test]
fn glider_on_two_by_two_board() {
    let mut grid = HexGrid::new(2, 2);
    assert!(grid.stamp_pattern(1, 0, &presets::glider().template()));
    assert_eq!(grid.hexagon(0, 1).cell(6, 8), Cell::Alive);
    assert_borders_match(&grid);

    let mut counts = vec![grid.alive_count()];
    for _ in 0..10 {
        grid.step();
        assert_borders_match(&grid);
        counts.push(grid.alive_count());
    }
    assert_eq!(grid.generation(), 10);
    assert_eq!(counts, [4, 7, 12, 17, 23, 23, 36, 42, 56, 63, 74]);
    assert_eq!(grid.hexagon(1, 0).alive_count(), 46);
    assert_eq!(grid.hexagon(0, 1).alive_count(), 28);
    assert_eq!(grid.hexagon(0, 0).alive_count(), 0);
}

#[test]
fn every_shared_edge_agrees_after_population() {
    let mut grid = HexGrid::new(4, 9);
    grid.populate_random(&mut StdRng::seed_from_u64(2024), 0.5);
    assert_borders_match(&grid);

    for direction_edges in SHARED_EDGES.iter().map(|edge| edge.direction) {
        let pairs = grid
            .coords()
            .filter(|&c| {
                let n = neighbor_coord(c, direction_edges);
                grid.hexagon(n.x, n.y).is_alive()
            })
            .count();
        assert!(pairs > 0, "no neighbours towards {direction_edges:?}");
    }

    for _ in 0..5 {
        grid.step();
        assert_borders_match(&grid);
    }
}

#[test]
fn rotation_keeps_borders_consistent() {
    let mut grid = HexGrid::new(3, 5);
    grid.populate_random(&mut StdRng::seed_from_u64(77), 0.4);
    for turn in [Turn::Clockwise, Turn::Clockwise, Turn::Counterclockwise] {
        assert!(grid.rotate(1, 2, turn));
        assert_borders_match(&grid);
        grid.step();
        assert_borders_match(&grid);
    }
}

#[test]
fn evaluation_reads_only_the_current_generation() {
    let mut grid = HexGrid::new(3, 5);
    grid.populate_random(&mut StdRng::seed_from_u64(3), 0.35);
    let before: Vec<Cell> = grid
        .tiles()
        .flat_map(|h| layout::positions().map(move |p| h.cell_at(p)))
        .collect();

    let pending = grid.evaluate();
    let during: Vec<Cell> = grid
        .tiles()
        .flat_map(|h| layout::positions().map(move |p| h.cell_at(p)))
        .collect();
    assert_eq!(before, during);

    let mut reference = HexGrid::new(3, 5);
    reference.populate_random(&mut StdRng::seed_from_u64(3), 0.35);
    reference.step();

    grid.commit(pending).unwrap();
    let after: Vec<Cell> = grid
        .tiles()
        .flat_map(|h| layout::positions().map(move |p| h.cell_at(p)))
        .collect();
    let expected: Vec<Cell> = reference
        .tiles()
        .flat_map(|h| layout::positions().map(move |p| h.cell_at(p)))
        .collect();
    assert_eq!(after, expected);
}

#[test]
fn pattern_with_wrong_cell_count_is_rejected() {
    let short = "x".repeat(CELL_COUNT - 1);
    let long = "x".repeat(CELL_COUNT + 1);
    assert_eq!(
        Pattern::parse("short", &short),
        Err(PatternError::TooFewCells {
            expected: CELL_COUNT,
            got: CELL_COUNT - 1
        })
    );
    assert_eq!(
        Pattern::parse("long", &long),
        Err(PatternError::TooManyCells { expected: CELL_COUNT })
    );
}

#[test]
fn malformed_level_is_rejected() {
    assert_eq!(
        LevelData::parse("level.width=2\nlevel.height=2\no o o o\n"),
        Err(LevelError::MissingDataSection)
    );
    assert!(matches!(
        LevelData::parse("level.width=2\nlevel.height=2\ndata\no o o\n"),
        Err(LevelError::TileCountMismatch { expected: 4, got: 3 })
    ));
}

#[test]
fn sample_files_load_from_disk() {
    let root = env!("CARGO_MANIFEST_DIR");
    let level = LevelData::load(format!("{root}/data/levels/level1.lvl")).unwrap();
    let mut grid = level.build().unwrap();
    let glider = Pattern::load(format!("{root}/data/patterns/glider.pat")).unwrap();
    assert_eq!(glider.name, "glider");
    assert!(grid.stamp_pattern(0, 6, &glider.template()));
    grid.step();
    assert!(grid.shared_cells_consistent());
}

#[test]
fn edits_and_driver_share_the_grid_lock() {
    let shared = SharedGrid::new(HexGrid::new(3, 5));
    let driver = Driver::spawn(shared.clone(), Duration::from_millis(1));

    let editors: Vec<_> = (0..4)
        .map(|i| {
            let shared = shared.clone();
            thread::spawn(move || {
                let template = presets::glider().template();
                for round in 0..25 {
                    let x = (i + round) % 3;
                    shared.stamp_pattern(x, 0, &template);
                    shared.toggle_cell(x, 2, 3, 20);
                    if shared.begin_rotation(x, 4, Turn::Clockwise) {
                        thread::sleep(Duration::from_micros(200));
                        shared.commit_rotation(x, 4);
                    }
                }
            })
        })
        .collect();
    for editor in editors {
        editor.join().unwrap();
    }

    let steps = driver.stop();
    let grid = shared.lock();
    assert_eq!(grid.generation(), steps);
    assert!(grid.tiles().all(|h| !h.is_rotating()));
    assert!(grid.shared_cells_consistent());
}

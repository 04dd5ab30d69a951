use levelgen_core::mapgen::exposed_floor_cells;
use levelgen_core::{
    CellState, DEFAULT_MAX_ITERATIONS, GenError, Generator, GeneratorConfig, Grid, Pos, RunState,
    Termination, ValidatedConfig,
};

fn straight_walker_config(percent_to_fill: f64, max_iterations: u32) -> ValidatedConfig {
    GeneratorConfig {
        amount_of_starting_walkers: 1,
        max_walkers: 10,
        chance_walker_spawn: 0.0,
        chance_walker_destroy: 0.0,
        chance_walker_change_dir: 0.0,
        percent_to_fill,
        max_iterations,
        ..GeneratorConfig::for_grid(10, 10)
    }
    .validate()
    .expect("scenario config should be valid")
}

fn floor_cells(grid: &Grid) -> Vec<Pos> {
    grid.cells().filter(|&(_, cell)| cell == CellState::Floor).map(|(pos, _)| pos).collect()
}

#[test]
fn single_straight_walker_reaches_small_target_in_fewer_than_width_iterations() {
    let config = straight_walker_config(0.03, 100_000);
    for seed in 0..32 {
        let mut generator = Generator::new(&config, seed);
        let direction = generator.walkers()[0].direction;
        let result = generator.finish().expect("run should succeed");

        assert_eq!(result.termination, Termination::Converged, "seed={seed}");
        assert!(result.iterations < 10, "seed={seed} took {} iterations", result.iterations);
        assert!(result.floor_ratio > 0.03);

        let (dx, dy) = direction.delta();
        let expected: Vec<Pos> =
            (0..4).map(|step| Pos { y: 5 + dy * step, x: 5 + dx * step }).collect();
        let mut floors = floor_cells(&result.grid);
        floors.sort();
        let mut expected_sorted = expected.clone();
        expected_sorted.sort();
        assert_eq!(floors, expected_sorted, "seed={seed} should carve a straight line");
    }
}

#[test]
fn single_straight_walker_stops_at_the_interior_edge() {
    // A 10x10 grid needs more than 5 floor cells to pass 5%, but a straight line from the
    // centre to the clamp boundary is at most 5 cells long, so the run exhausts.
    let config = straight_walker_config(0.05, 200);
    for seed in 0..16 {
        let mut generator = Generator::new(&config, seed);
        let direction = generator.walkers()[0].direction;
        while !generator.step().expect("step should succeed").is_finished() {
            let walker = generator.walkers()[0];
            assert_eq!(walker.direction, direction, "direction never changes");
        }
        assert_eq!(generator.state(), RunState::Exhausted);

        let floors = floor_cells(generator.grid());
        assert!(
            floors.iter().all(|pos| pos.x == 5) || floors.iter().all(|pos| pos.y == 5),
            "seed={seed} floor should lie on one line through the centre"
        );
        assert!((4..=5).contains(&floors.len()), "seed={seed} carved {}", floors.len());
        let edge = generator.walkers()[0].pos;
        assert!(edge.x == 1 || edge.x == 8 || edge.y == 1 || edge.y == 8);
    }
}

#[test]
fn max_walkers_of_one_never_spawns_a_second_walker() {
    let config = GeneratorConfig {
        amount_of_starting_walkers: 1,
        max_walkers: 1,
        chance_walker_spawn: 1.0,
        chance_walker_destroy: 0.0,
        percent_to_fill: 0.4,
        max_iterations: 5_000,
        ..GeneratorConfig::for_grid(12, 12)
    }
    .validate()
    .expect("scenario config should be valid");

    for seed in 0..8 {
        let mut generator = Generator::new(&config, seed);
        while !generator.step().expect("step should succeed").is_finished() {
            assert_eq!(generator.walkers().len(), 1, "seed={seed}");
        }
        assert_eq!(generator.walkers().len(), 1);
    }
}

#[test]
fn certain_destruction_culls_one_walker_per_iteration_down_to_one() {
    let config = GeneratorConfig {
        amount_of_starting_walkers: 3,
        max_walkers: 3,
        chance_walker_spawn: 0.0,
        chance_walker_destroy: 1.0,
        percent_to_fill: 0.9,
        max_iterations: 20,
        ..GeneratorConfig::for_grid(10, 10)
    }
    .validate()
    .expect("scenario config should be valid");

    let mut generator = Generator::new(&config, 31);
    assert_eq!(generator.walkers().len(), 3);

    let mut counts = Vec::new();
    while !generator.step().expect("step should succeed").is_finished() {
        counts.push(generator.walkers().len());
    }
    counts.push(generator.walkers().len());

    assert_eq!(&counts[..2], &[2, 1]);
    assert!(counts[2..].iter().all(|&count| count == 1), "counts: {counts:?}");
    assert_eq!(generator.state(), RunState::Exhausted);
}

#[test]
fn walls_close_every_floor_cell_of_a_default_run() {
    let config = GeneratorConfig::default().validate().expect("defaults are valid");
    let result = Generator::new(&config, 8_675_309).finish().expect("run should succeed");

    assert!(exposed_floor_cells(&result.grid).is_empty());
    assert_eq!(result.grid.count(CellState::Wall), result.wall_count);
    assert!(result.wall_count > 0);
}

#[test]
fn outer_ring_never_holds_floor() {
    let config = GeneratorConfig {
        chance_walker_spawn: 0.3,
        max_walkers: 20,
        percent_to_fill: 0.6,
        ..GeneratorConfig::for_grid(14, 9)
    }
    .validate()
    .expect("scenario config should be valid");

    let result = Generator::new(&config, 4).finish().expect("run should succeed");
    for (pos, cell) in result.grid.cells() {
        let on_ring = pos.x == 0 || pos.y == 0 || pos.x == 13 || pos.y == 8;
        if on_ring {
            assert_ne!(cell, CellState::Floor, "{pos:?} is on the border ring");
        }
    }
}

#[test]
fn out_of_range_reads_on_a_finished_grid_are_errors() {
    let result = levelgen_core::generate(&GeneratorConfig::for_grid(10, 10), 3)
        .expect("run should succeed");
    assert!(result.grid.get(10, 0).is_err());
    assert!(result.grid.get(-1, 0).is_err());
    assert!(result.grid.get(0, 0).is_ok());
}

#[test]
fn unreachable_target_never_runs_past_the_hard_cap() {
    let raw = GeneratorConfig {
        percent_to_fill: 1.0,
        max_iterations: 250_000,
        ..GeneratorConfig::for_grid(5, 5)
    };
    assert!(matches!(
        levelgen_core::generate(&raw, 1),
        Err(GenError::InvalidConfiguration { field: "max_iterations", .. })
    ));

    let capped = GeneratorConfig { max_iterations: DEFAULT_MAX_ITERATIONS, ..raw };
    let result = levelgen_core::generate(&capped, 1).expect("the cap itself is a valid budget");
    assert_eq!(result.termination, Termination::Exhausted);
    assert_eq!(result.iterations, DEFAULT_MAX_ITERATIONS);
}

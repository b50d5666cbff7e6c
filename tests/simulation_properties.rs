//! Property tests for grid geometry, targeting and tick invariants

use std::collections::HashSet;

use pokehunt::core::types::{Position, PreyId};
use pokehunt::core::SimulationConfig;
use pokehunt::entity::{Prey, Species};
use pokehunt::simulation::{generate_first_generation, nearest_visible, run_simulation_tick};
use pokehunt::spatial::is_within_sight;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

proptest! {
    #[test]
    fn own_cell_always_in_sight(x in -50i32..50, y in -50i32..50, r in 0u32..10) {
        let pos = Position::new(x, y);
        prop_assert!(is_within_sight(pos, pos, r));
    }

    #[test]
    fn sight_matches_squared_distance(
        x1 in -20i32..20, y1 in -20i32..20,
        x2 in -20i32..20, y2 in -20i32..20,
        r in 0u32..8,
    ) {
        let a = Position::new(x1, y1);
        let b = Position::new(x2, y2);
        let d2 = ((x1 - x2) * (x1 - x2) + (y1 - y2) * (y1 - y2)) as i64;
        prop_assert_eq!(is_within_sight(a, b, r), d2 <= (r as i64) * (r as i64));
    }

    #[test]
    fn equal_distance_tie_goes_to_first(d in 1i32..4, swap in any::<bool>()) {
        let origin = Position::new(10, 10);
        let (first, second) = if swap {
            (Position::new(10 + d, 10), Position::new(10, 10 - d))
        } else {
            (Position::new(10 - d, 10), Position::new(10, 10 + d))
        };
        let prey = vec![
            Prey::new(PreyId(1), first, Species::Eevee, 100),
            Prey::new(PreyId(2), second, Species::Eevee, 100),
        ];
        let found = nearest_visible(origin, d as u32, &prey);
        prop_assert_eq!(found.map(|p| p.id), Some(PreyId(1)));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn ticks_keep_entities_apart(
        seed in any::<u64>(),
        size in 6i32..16,
        police in 0usize..4,
    ) {
        let config = SimulationConfig {
            rows: size,
            cols: size,
            prey_count: 10,
            hunter_count: 6,
            police_count: police,
            tick_cap: 15,
            ..Default::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut state = generate_first_generation(&config, &mut rng).unwrap();
        let grid = config.grid();

        while !state.finished {
            run_simulation_tick(&mut state, &config, &mut rng);

            let cells: Vec<Position> = state.positions().collect();
            let unique: HashSet<Position> = cells.iter().copied().collect();
            prop_assert_eq!(unique.len(), cells.len());
            prop_assert!(cells.iter().all(|p| grid.contains(*p)));
            prop_assert_eq!(state.prey.len(), 10);
        }
        prop_assert_eq!(state.count, 15);
    }
}

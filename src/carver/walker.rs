// src/carver/walker.rs

use log::{debug, info, trace, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::Serialize;

use super::{CarveParams, RandomSource};
use crate::error::CarveError;
use crate::map::{Cell, Direction, Grid, Position};
use crate::utils::util::{clamp_index, scaled_sample};

/// One accepted straight run of opened cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tunnel {
    pub direction: Direction,
    pub start: Position,
    /// Cells opened by this tunnel, always in `1..=max_length`.
    pub length: usize,
}

impl Tunnel {
    /// The cells this tunnel opened, starting at `start`.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        let (dr, dc) = self.direction.delta();
        (0..self.length as isize).map(move |i| {
            Position::new(
                self.start.row.wrapping_add_signed(dr * i),
                self.start.col.wrapping_add_signed(dc * i),
            )
        })
    }
}

/// Result of a carve: the finished grid plus how it was walked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Carving {
    pub grid: Grid,
    pub start: Position,
    pub tunnels: Vec<Tunnel>,
}

/// Mutable state of a single walk. Lives only for one run.
#[derive(Debug)]
struct WalkState {
    position: Position,
    last_direction: Option<Direction>,
    tunnels_left: usize,
    max_length: usize,
    stalled: usize,
}

impl WalkState {
    fn accepts(&self, direction: Direction) -> bool {
        match self.last_direction {
            None => true,
            Some(last) => direction.is_perpendicular_to(last),
        }
    }
}

/// Random-walk tunnel carver.
///
/// Starting from a random cell of an all-wall grid, repeatedly picks a direction
/// perpendicular to the previous tunnel and a random length, then opens cells in
/// that direction until the length is used up or the next step would leave the map.
#[derive(Debug, Clone)]
pub struct GridCarver {
    params: CarveParams,
}

impl GridCarver {
    pub fn new(params: CarveParams) -> Result<Self, CarveError> {
        params.validate()?;
        Ok(GridCarver { params })
    }

    pub fn params(&self) -> &CarveParams {
        &self.params
    }

    /// Carves one map, drawing every random choice from `rng`.
    pub fn run<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<Carving, CarveError> {
        let dimension = self.params.dimension;
        let mut grid = Grid::new(dimension);

        let start = Position::new(
            clamp_index(scaled_sample(rng.next_f64(), dimension), dimension),
            clamp_index(scaled_sample(rng.next_f64(), dimension), dimension),
        );
        let mut state = WalkState {
            position: start,
            last_direction: None,
            tunnels_left: self.params.max_tunnels,
            max_length: self.params.max_length,
            stalled: 0,
        };
        let mut tunnels = Vec::new();
        debug!(
            "Carving {}x{} grid from ({}, {}) with {} tunnels",
            dimension, dimension, start.row, start.col, state.tunnels_left
        );

        while state.tunnels_left > 0 {
            let direction = self.pick_direction(&state, rng);
            let target = self.pick_length(&state, rng);
            let tunnel_start = state.position;
            let length = dig(&mut grid, &mut state.position, direction, target);

            if length == 0 {
                state.stalled += 1;
                trace!(
                    "{:?} from ({}, {}) is blocked ({} in a row)",
                    direction,
                    tunnel_start.row,
                    tunnel_start.col,
                    state.stalled
                );
                if state.stalled >= self.params.max_attempts {
                    warn!(
                        "Giving up after {} blocked attempts, {} tunnels left",
                        state.stalled, state.tunnels_left
                    );
                    return Err(CarveError::GenerationFailed {
                        attempts: state.stalled,
                        remaining: state.tunnels_left,
                    });
                }
                continue;
            }

            trace!(
                "Tunnel {:?} from ({}, {}): {} of {} cells",
                direction,
                tunnel_start.row,
                tunnel_start.col,
                length,
                target
            );
            tunnels.push(Tunnel {
                direction,
                start: tunnel_start,
                length,
            });
            state.last_direction = Some(direction);
            state.tunnels_left -= 1;
            state.stalled = 0;
        }

        debug!("Carved {} open cells", grid.open_count());
        Ok(Carving {
            grid,
            start,
            tunnels,
        })
    }

    /// Carves one map per seed in parallel. Results keep the order of `seeds`.
    pub fn run_batch(&self, seeds: &[u64]) -> Result<Vec<Carving>, CarveError> {
        info!("Carving {} maps in parallel", seeds.len());
        seeds
            .par_iter()
            .map(|&seed| {
                let mut rng = StdRng::seed_from_u64(seed);
                self.run(&mut rng)
            })
            .collect()
    }

    fn pick_direction<R: RandomSource + ?Sized>(
        &self,
        state: &WalkState,
        rng: &mut R,
    ) -> Direction {
        loop {
            let direction = Direction::ALL[rng.next_index(Direction::ALL.len())];
            if state.accepts(direction) {
                return direction;
            }
        }
    }

    fn pick_length<R: RandomSource + ?Sized>(&self, state: &WalkState, rng: &mut R) -> usize {
        let length = scaled_sample(rng.next_f64(), state.max_length).ceil();
        (length as usize).clamp(1, state.max_length)
    }
}

/// Opens up to `target` cells from `position` towards `direction`, stopping
/// before the walker would leave the grid. The cell the walker ends on is left
/// untouched. Returns the number of cells opened.
fn dig(grid: &mut Grid, position: &mut Position, direction: Direction, target: usize) -> usize {
    let mut length = 0;
    while length < target {
        let Some(next) = direction.step(*position, grid.dimension()) else {
            break;
        };
        grid.set(*position, Cell::Open);
        *position = next;
        length += 1;
    }
    length
}

/// Carves a `dimension` x `dimension` map with default attempt limits.
pub fn carve<R: RandomSource + ?Sized>(
    dimension: usize,
    max_tunnels: usize,
    max_length: usize,
    rng: &mut R,
) -> Result<Grid, CarveError> {
    let carver = GridCarver::new(CarveParams::new(dimension, max_tunnels, max_length))?;
    carver.run(rng).map(|carving| carving.grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carver::random::testing::ScriptedSource;

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn test_scripted_walk() {
        // start (2, 2); Up x3 stops at row 0 after 2 cells; Left x3 stops at col 0
        // after 2 cells; Right is rejected as a reversal; Down x2.
        let mut source = ScriptedSource::new(&[0.5, 0.5, 0.1, 0.99, 0.6, 0.99, 0.9, 0.3, 0.5]);
        let carver = GridCarver::new(CarveParams::new(5, 3, 3)).unwrap();
        let carving = carver.run(&mut source).unwrap();

        assert_eq!(source.consumed(), 9);
        assert_eq!(carving.start, Position::new(2, 2));
        assert_eq!(
            carving.tunnels,
            vec![
                Tunnel {
                    direction: Direction::Up,
                    start: Position::new(2, 2),
                    length: 2,
                },
                Tunnel {
                    direction: Direction::Left,
                    start: Position::new(0, 2),
                    length: 2,
                },
                Tunnel {
                    direction: Direction::Down,
                    start: Position::new(0, 0),
                    length: 2,
                },
            ]
        );
        assert_eq!(carving.grid.to_string(), "...##\n.#.##\n##.##\n#####\n#####\n");
    }

    #[test]
    fn test_blocked_attempt_does_not_use_budget() {
        // start (0, 0); Up is blocked at once, then Down opens a single cell.
        let mut source = ScriptedSource::new(&[0.0, 0.0, 0.1, 0.5, 0.3, 0.0]);
        let grid = carve(4, 1, 3, &mut source).unwrap();
        assert_eq!(source.consumed(), 6);
        assert_eq!(grid.open_cells().collect::<Vec<_>>(), vec![Position::new(0, 0)]);
    }

    #[test]
    fn test_start_is_clamped_into_grid() {
        // 0.999 * 0.9 * 5 rounds to 4, the last row and column.
        let mut source = ScriptedSource::new(&[0.999, 0.999, 0.1, 0.5]);
        let carver = GridCarver::new(CarveParams::new(5, 1, 2)).unwrap();
        let carving = carver.run(&mut source).unwrap();
        assert_eq!(carving.start, Position::new(4, 4));
        assert!(carving.grid.is_open(Position::new(4, 4)));
    }

    #[test]
    fn test_single_cell_grid_fails_instead_of_hanging() {
        let carver = GridCarver::new(CarveParams::new(1, 2, 3).with_max_attempts(50)).unwrap();
        let result = carver.run(&mut seeded(3));
        assert_eq!(
            result,
            Err(CarveError::GenerationFailed { attempts: 50, remaining: 2 })
        );
    }

    #[test]
    fn test_huge_tunnel_budget_does_not_preallocate() {
        let budget = usize::MAX / 8;
        let carver = GridCarver::new(CarveParams::new(1, budget, 3).with_max_attempts(10)).unwrap();
        assert_eq!(
            carver.run(&mut seeded(1)),
            Err(CarveError::GenerationFailed {
                attempts: 10,
                remaining: budget,
            })
        );
    }

    #[test]
    fn test_invalid_arguments() {
        let mut rng = seeded(1);
        assert!(matches!(
            carve(0, 3, 3, &mut rng),
            Err(CarveError::InvalidArgument { name: "dimension", .. })
        ));
        assert!(matches!(
            carve(5, 0, 3, &mut rng),
            Err(CarveError::InvalidArgument { name: "max_tunnels", .. })
        ));
        assert!(matches!(
            carve(5, 3, 0, &mut rng),
            Err(CarveError::InvalidArgument { name: "max_length", .. })
        ));
    }

    #[test]
    fn test_classic_scenario() {
        for seed in 0..200 {
            let carver = GridCarver::new(CarveParams::new(5, 3, 3)).unwrap();
            let carving = carver.run(&mut seeded(seed)).unwrap();
            assert_eq!(carving.tunnels.len(), 3);
            let open = carving.grid.open_count();
            assert!((3..=9).contains(&open), "seed {} opened {} cells", seed, open);
            assert!(carving.grid.open_cells().all(|p| p.row <= 4 && p.col <= 4));
        }
    }

    #[test]
    fn test_walk_properties() {
        let params = CarveParams::new(20, 40, 6);
        let carver = GridCarver::new(params).unwrap();
        for seed in 0..50 {
            let carving = carver.run(&mut seeded(seed)).unwrap();
            let grid = &carving.grid;

            assert_eq!(carving.tunnels.len(), params.max_tunnels);
            assert_eq!(carving.tunnels[0].start, carving.start);
            for tunnel in &carving.tunnels {
                assert!((1..=params.max_length).contains(&tunnel.length));
                for cell in tunnel.cells() {
                    assert!(grid.contains(cell));
                    assert!(grid.is_open(cell));
                }
            }
            for pair in carving.tunnels.windows(2) {
                assert!(pair[1].direction.is_perpendicular_to(pair[0].direction));
            }

            // Every open cell belongs to some tunnel.
            let opened: std::collections::HashSet<Position> =
                carving.tunnels.iter().flat_map(|t| t.cells()).collect();
            assert_eq!(opened.len(), grid.open_count());
        }
    }

    #[test]
    fn test_tunnels_are_chained() {
        let carver = GridCarver::new(CarveParams::new(12, 15, 5)).unwrap();
        let carving = carver.run(&mut seeded(99)).unwrap();
        for pair in carving.tunnels.windows(2) {
            let (dr, dc) = pair[0].direction.delta();
            let len = pair[0].length as isize;
            let end = Position::new(
                pair[0].start.row.wrapping_add_signed(dr * len),
                pair[0].start.col.wrapping_add_signed(dc * len),
            );
            assert_eq!(pair[1].start, end);
        }
    }

    #[test]
    fn test_same_seed_same_grid() {
        let carver = GridCarver::new(CarveParams::new(30, 50, 7)).unwrap();
        let first = carver.run(&mut seeded(2024)).unwrap();
        let second = carver.run(&mut seeded(2024)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_batch_matches_sequential_runs() {
        let carver = GridCarver::new(CarveParams::new(16, 20, 4)).unwrap();
        let seeds = [5, 1, 8, 13, 21];
        let batch = carver.run_batch(&seeds).unwrap();
        assert_eq!(batch.len(), seeds.len());
        for (carving, &seed) in batch.iter().zip(seeds.iter()) {
            assert_eq!(*carving, carver.run(&mut seeded(seed)).unwrap());
        }
    }

    #[test]
    fn test_batch_propagates_failure() {
        let carver = GridCarver::new(CarveParams::new(1, 1, 1).with_max_attempts(5)).unwrap();
        assert!(matches!(
            carver.run_batch(&[1, 2, 3]),
            Err(CarveError::GenerationFailed { .. })
        ));
    }
}

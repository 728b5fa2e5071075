use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use sapper::{reveal::reveal, Button, Game, GameState, Grid, Position};
use std::collections::{HashSet, VecDeque};

prop_compose! {
    fn board()(width in 1u32..12, height in 1u32..12)(
        mines in 0..=width * height,
        width in Just(width),
        height in Just(height),
        seed in any::<u64>(),
    ) -> Grid {
        Grid::generate(width, height, mines, &mut StdRng::seed_from_u64(seed)).unwrap()
    }
}

prop_compose! {
    fn board_and_position()(grid in board())(
        x in 0..grid.dimensions().0 as i32,
        y in 0..grid.dimensions().1 as i32,
        grid in Just(grid),
    ) -> (Grid, Position) {
        (grid, Position::new(x, y))
    }
}

fn is_mine(grid: &Grid, x: i32, y: i32) -> bool {
    grid.cell(Position::new(x, y)).is_some_and(|c| c.is_mine())
}

fn mine_positions(grid: &Grid) -> Vec<Position> {
    grid.cells()
        .filter(|c| c.is_mine())
        .map(|c| c.position())
        .collect()
}

fn revealed(grid: &Grid) -> HashSet<Position> {
    grid.cells()
        .filter(|c| c.is_revealed())
        .map(|c| c.position())
        .collect()
}

/// Breadth-first reference: the zero region around `origin` plus its border.
fn expected_flood(grid: &Grid, origin: Position) -> HashSet<Position> {
    let mut seen = HashSet::from([origin]);
    let mut queue = VecDeque::from([origin]);
    while let Some(pos) = queue.pop_front() {
        let cell = grid.cell(pos).unwrap();
        if cell.is_mine() || cell.adjacent_mines() != 0 {
            continue;
        }
        for n in grid.neighbors(pos) {
            if seen.insert(n) {
                queue.push_back(n);
            }
        }
    }
    seen
}

proptest! {
    #[test]
    fn generated_mine_count_is_exact(
        width in 1u32..20,
        height in 1u32..20,
        seed in any::<u64>(),
        fraction in 0.0f64..=1.0,
    ) {
        let mines = ((width * height) as f64 * fraction) as u32;
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = Grid::generate(width, height, mines, &mut rng).unwrap();
        prop_assert_eq!(grid.mine_count(), mines);
        prop_assert_eq!(grid.cells().filter(|c| c.is_mine()).count() as u32, mines);
    }

    #[test]
    fn too_many_mines_is_rejected(width in 1u32..10, height in 1u32..10, extra in 1u32..5) {
        let mut rng = StdRng::seed_from_u64(0);
        let result = Grid::generate(width, height, width * height + extra, &mut rng);
        prop_assert!(result.is_err());
    }

    #[test]
    fn adjacency_matches_brute_force(grid in board()) {
        for cell in grid.cells().filter(|c| !c.is_mine()) {
            let Position { x, y } = cell.position();
            let mut count = 0;
            for dy in -1..=1 {
                for dx in -1..=1 {
                    if (dx, dy) != (0, 0) && is_mine(&grid, x + dx, y + dy) {
                        count += 1;
                    }
                }
            }
            prop_assert_eq!(cell.adjacent_mines(), count);
        }
    }

    #[test]
    fn reveal_twice_equals_reveal_once((grid, pos) in board_and_position()) {
        let mut once = grid.clone();
        reveal(&mut once, pos);
        let mut twice = grid;
        reveal(&mut twice, pos);
        reveal(&mut twice, pos);
        prop_assert_eq!(revealed(&once), revealed(&twice));
    }

    #[test]
    fn flood_reveals_region_and_border_only((grid, pos) in board_and_position()) {
        prop_assume!(!grid.cell(pos).unwrap().is_mine());
        let mut flooded = grid.clone();
        reveal(&mut flooded, pos);

        let opened = revealed(&flooded);
        prop_assert_eq!(&opened, &expected_flood(&grid, pos));
        prop_assert!(opened.iter().all(|p| !flooded.cell(*p).unwrap().is_mine()));
    }

    #[test]
    fn mines_never_change_during_play(
        grid in board(),
        clicks in prop::collection::vec((any::<bool>(), 0i32..12, 0i32..12), 0..40),
    ) {
        let mines = mine_positions(&grid);
        let mut game = Game::from_grid(grid);
        for (primary, x, y) in clicks {
            let button = if primary { Button::Primary } else { Button::Secondary };
            game.handle_click(button, Position::new(x, y));
        }
        prop_assert_eq!(mines, mine_positions(game.grid()));
    }

    #[test]
    fn state_follows_unrevealed_count(
        grid in board(),
        clicks in prop::collection::vec((0i32..12, 0i32..12), 1..60),
    ) {
        let mine_count = grid.mine_count();
        let mut game = Game::from_grid(grid);
        for (x, y) in clicks {
            let pos = Position::new(x, y);
            let was_playing = game.state() == GameState::Playing;
            let hit_mine = game.grid().cell(pos).is_some_and(|c| c.is_mine());
            game.handle_click(Button::Primary, pos);

            if !was_playing || !game.grid().contains(pos) {
                continue;
            }
            let mine_open = game.grid().cells().any(|c| c.is_mine() && c.is_revealed());
            if hit_mine {
                prop_assert_eq!(game.state(), GameState::Lost);
            } else {
                prop_assert!(!mine_open);
                let expected = if game.grid().unrevealed_count() == mine_count {
                    GameState::Won
                } else {
                    GameState::Playing
                };
                prop_assert_eq!(game.state(), expected);
            }
        }
    }

    #[test]
    fn double_flag_restores((grid, pos) in board_and_position()) {
        let mut game = Game::from_grid(grid);
        let before = *game.grid().cell(pos).unwrap();
        game.handle_click(Button::Secondary, pos);
        game.handle_click(Button::Secondary, pos);
        prop_assert_eq!(*game.grid().cell(pos).unwrap(), before);
    }
}

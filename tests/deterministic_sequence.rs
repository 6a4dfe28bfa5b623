use snake_engine::{
    Direction, DirectionVector, Engine, EngineConfig, Position, RngSource, Snapshot,
};

fn run_script(engine: &mut Engine, script: &[Option<Direction>]) -> Vec<Snapshot> {
    script
        .iter()
        .map(|turn| {
            if let Some(direction) = turn {
                engine.set_direction_to(*direction);
            }
            engine.tick()
        })
        .collect()
}

fn zig_zag() -> Vec<Option<Direction>> {
    let mut script = Vec::new();
    for _ in 0..6 {
        script.push(Some(Direction::Up));
        script.extend([None, None]);
        script.push(Some(Direction::Right));
        script.push(Some(Direction::Down));
        script.extend([None, None]);
        script.push(Some(Direction::Right));
    }
    script
}

#[test]
fn default_board_with_zero_rng_matches_reference_scenario() {
    let mut engine = Engine::with_rng(EngineConfig::default(), || 0.0);

    engine.reset();
    let start = engine.snapshot();
    assert_eq!(
        start.snake,
        vec![
            Position::new(9, 10),
            Position::new(10, 10),
            Position::new(11, 10),
        ]
    );
    assert_eq!(start.direction, Direction::Right);
    assert_eq!(start.food, Some(Position::new(0, 0)));

    for x in 12..=14 {
        let snapshot = engine.tick();
        assert_eq!(snapshot.head(), Some(Position::new(x, 10)));
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot.score, 0);
        assert!(!snapshot.over);
    }
}

#[test]
fn seeded_engines_produce_identical_runs() {
    let config = EngineConfig::new(12, 9).with_wrap(true);
    let mut first = Engine::with_rng(config, RngSource::seeded(42));
    let mut second = Engine::with_rng(config, RngSource::seeded(42));

    assert_eq!(first.snapshot(), second.snapshot());
    assert_eq!(run_script(&mut first, &zig_zag()), run_script(&mut second, &zig_zag()));
}

fn assert_step_rules(previous: &Snapshot, next: &Snapshot) {
    let mut cells = next.snake.clone();
    cells.sort_by_key(|cell| (cell.y, cell.x));
    cells.dedup();
    assert_eq!(cells.len(), next.len(), "body cells must be distinct");

    if next.head() == previous.food {
        assert_eq!(next.len(), previous.len() + 1);
        assert_eq!(next.score, previous.score + 1);
    } else {
        assert_eq!(next.len(), previous.len());
        assert_eq!(next.score, previous.score);
        assert_eq!(next.food, previous.food);
    }

    if let Some(food) = next.food {
        assert!(!next.snake.contains(&food));
    }
}

#[test]
fn invariants_hold_over_a_long_wrapped_run() {
    let mut engine = Engine::with_rng(EngineConfig::new(10, 8).with_wrap(true), RngSource::seeded(3));
    let mut previous = engine.snapshot();

    for snapshot in run_script(&mut engine, &zig_zag()) {
        if snapshot.over {
            break;
        }
        assert_step_rules(&previous, &snapshot);
        previous = snapshot;
    }
}

#[test]
fn single_row_wrapped_run_eats_until_the_board_is_full() {
    // On a one-row torus every free cell lies ahead of the head, so each food
    // is reached without turning.
    let mut engine = Engine::with_rng(EngineConfig::new(10, 1).with_wrap(true), RngSource::seeded(3));
    let mut previous = engine.snapshot();
    let mut meals = 0;

    for _ in 0..200 {
        let snapshot = engine.tick();
        if snapshot.over {
            break;
        }
        assert_step_rules(&previous, &snapshot);
        if snapshot.score > previous.score {
            meals += 1;
        }
        previous = snapshot;
    }

    assert_eq!(meals, 7);
    assert_eq!(previous.score, 7);
    assert_eq!(previous.len(), 10);
    assert!(previous.board_full());
    assert!(engine.is_over());
}

#[test]
fn food_directly_ahead_is_eaten_and_relocated() {
    // Row-major index of (12, 10) among the 397 free cells of a fresh 20x20 board.
    let mut draws = vec![209.5 / 397.0, 0.0].into_iter();
    let mut engine = Engine::with_rng(EngineConfig::default(), move || {
        draws.next().unwrap_or(0.0)
    });
    assert_eq!(engine.food(), Some(Position::new(12, 10)));

    let snapshot = engine.tick();

    assert_eq!(snapshot.score, 1);
    assert_eq!(snapshot.len(), 4);
    assert_eq!(snapshot.head(), Some(Position::new(12, 10)));
    assert_eq!(snapshot.food, Some(Position::new(0, 0)));
}

#[test]
fn wall_hit_without_wrap_freezes_body() {
    let mut engine = Engine::with_rng(EngineConfig::new(6, 4), || 0.0);
    engine.set_direction(DirectionVector::UP);

    let first = engine.tick();
    let second = engine.tick();
    assert_eq!(first.head(), Some(Position::new(4, 1)));
    assert_eq!(second.head(), Some(Position::new(4, 0)));
    assert!(!second.over);

    let terminal = engine.tick();
    assert!(terminal.over);
    assert_eq!(terminal.snake, second.snake);
    assert_eq!(engine.tick(), terminal);
}

#[test]
fn same_move_wraps_instead_of_ending_when_enabled() {
    let mut engine = Engine::with_rng(EngineConfig::new(6, 4), || 0.0);
    engine.set_wrap(true);
    engine.set_direction(DirectionVector::UP);

    engine.tick();
    engine.tick();
    let wrapped = engine.tick();

    assert!(!wrapped.over);
    assert_eq!(wrapped.head(), Some(Position::new(4, 3)));
}

use pocket_arcade_core::{Point, Screen};
use pocket_arcade_system_spawn_points::{
    position_away_from, position_in_bounds, position_in_corner,
};

const SCREEN: Screen = Screen::DEFAULT;
const MARGIN: i32 = 10;

#[test]
fn in_bounds_points_respect_margins() {
    for seed in 0..100 {
        for index in 0..4 {
            let point = position_in_bounds(seed, index, MARGIN, SCREEN);
            assert!(point.x() >= MARGIN && point.x() <= SCREEN.width() - MARGIN);
            assert!(point.y() >= SCREEN.top_margin());
            assert!(point.y() >= MARGIN && point.y() <= SCREEN.height() - MARGIN);
        }
    }
}

#[test]
fn in_bounds_is_deterministic() {
    assert_eq!(
        position_in_bounds(1, 0, MARGIN, SCREEN),
        position_in_bounds(1, 0, MARGIN, SCREEN)
    );
    assert_eq!(position_in_bounds(1, 0, MARGIN, SCREEN), Point::new(41, 36));
}

#[test]
fn away_from_keeps_the_minimum_distance() {
    let avoid = Point::new(64, 32);
    for seed in 1..200 {
        let point = position_away_from(seed, 0, avoid, 40, MARGIN, SCREEN);
        // 40 is satisfiable inside the margins, so no seed in this range
        // reaches the exhaustion path.
        assert!(
            point.manhattan_distance(avoid) >= 40,
            "seed {seed} produced {point:?}"
        );
    }
}

#[test]
fn away_from_matches_the_documented_example() {
    let avoid = Point::new(64, 32);
    let point = position_away_from(1, 0, avoid, 40, MARGIN, SCREEN);
    assert_eq!(point, Point::new(110, 41));
    assert_eq!(point.manhattan_distance(avoid), 55);
}

#[test]
fn exhaustion_falls_back_to_the_opposite_quadrant() {
    // A minimum distance near the geometric maximum defeats all twenty
    // draws for this seed; the contract then demands a point in the
    // quadrant diagonally opposite the avoided position, not an error.
    let avoid = Point::new(64, 32);
    let point = position_away_from(1, 0, avoid, 94, MARGIN, SCREEN);
    assert_eq!(point, Point::new(42, 17));
    assert!(point.x() <= SCREEN.width() / 2);
    assert!(point.y() <= SCREEN.height() / 2);
}

#[test]
fn corner_points_land_in_a_corner_band() {
    for seed in 0..100 {
        let point = position_in_corner(seed, 0, MARGIN, SCREEN);
        let horizontal_band = point.x() <= SCREEN.width() / 4
            || point.x() >= SCREEN.width() * 3 / 4;
        let vertical_band = point.y() <= SCREEN.height() / 4
            || point.y() >= SCREEN.height() * 3 / 4;
        assert!(horizontal_band && vertical_band, "seed {seed}: {point:?}");
    }
}

#[test]
fn corner_choice_varies_with_seed() {
    let points: Vec<Point> = (0..16)
        .map(|seed| position_in_corner(seed, 0, MARGIN, SCREEN))
        .collect();
    let left = points.iter().any(|p| p.x() <= SCREEN.width() / 4);
    let right = points.iter().any(|p| p.x() >= SCREEN.width() * 3 / 4);
    let top = points.iter().any(|p| p.y() <= SCREEN.height() / 4);
    let bottom = points.iter().any(|p| p.y() >= SCREEN.height() * 3 / 4);
    assert!(left && right && top && bottom);
}

//! Property tests for obstacle motion and collision

use glam::Vec2;
use proptest::prelude::*;

use pixel_peril::Tuning;
use pixel_peril::sim::{GameState, Obstacle, Pattern, TickInput, boxes_overlap, collides, tick};

/// Coordinates on a 1/64 grid so sums and differences stay exact in f32
fn grid(range: std::ops::Range<i32>) -> impl Strategy<Value = f32> {
    range.prop_map(|v| v as f32 / 64.0)
}

fn point() -> impl Strategy<Value = Vec2> {
    (grid(-64..64), grid(-64..64)).prop_map(|(x, y)| Vec2::new(x, y))
}

proptest! {
    #[test]
    fn collision_is_translation_invariant(
        a in point(),
        b in point(),
        shift in point(),
        a_half in grid(1..16),
        b_half in grid(1..16),
    ) {
        prop_assert_eq!(
            boxes_overlap(a, a_half, b, b_half),
            boxes_overlap(a + shift, a_half, b + shift, b_half)
        );
    }

    #[test]
    fn collision_is_symmetric(a in point(), b in point(), a_half in grid(1..16), b_half in grid(1..16)) {
        prop_assert_eq!(
            boxes_overlap(a, a_half, b, b_half),
            boxes_overlap(b, b_half, a, a_half)
        );
    }

    #[test]
    fn touching_boxes_do_not_collide(
        p in point(),
        p_half in grid(1..16),
        o_half in grid(1..16),
        along_x in any::<bool>(),
        offset in grid(-8..8),
    ) {
        let reach = p_half + o_half;
        let delta = if along_x { Vec2::new(reach, offset) } else { Vec2::new(offset, reach) };
        let obstacle = Obstacle::new(p.x + delta.x, p.y + delta.y, o_half, [1.0; 3], 0.0);
        prop_assert!(!collides(p, p_half, &obstacle));
    }

    #[test]
    fn overlapping_centers_collide(p in point(), p_half in grid(1..16), o_half in grid(1..16)) {
        let obstacle = Obstacle::new(p.x, p.y, o_half, [1.0; 3], 0.0);
        prop_assert!(collides(p, p_half, &obstacle));
    }

    #[test]
    fn advance_subtracts_scaled_speed(
        y0 in -2.0f32..2.0,
        speed in 0.0f32..0.05,
        mults in prop::collection::vec(0.1f32..4.0, 0..50),
    ) {
        let mut obstacle = Obstacle::new(0.0, y0, 0.05, [1.0; 3], speed);
        let mut expected = y0;
        for &m in &mults {
            obstacle.advance(m);
            expected -= speed * m;
        }
        prop_assert_eq!(obstacle.pos.y, expected);
        prop_assert_eq!(obstacle.pos.x, 0.0);
    }

    #[test]
    fn pattern_complete_iff_all_below_line(ys in prop::collection::vec(-2.0f32..2.0, 1..12)) {
        let pattern = Pattern::new(
            ys.iter().map(|&y| Obstacle::new(0.0, y, 0.05, [1.0; 3], 0.01)).collect(),
        );
        let all_below = ys.iter().all(|&y| y <= -1.0);
        prop_assert_eq!(pattern.is_complete(-1.0), all_below);
    }

    #[test]
    fn score_and_level_never_decrease(seed in any::<u64>(), moves in prop::collection::vec(0u8..16, 1..300)) {
        let mut state = GameState::new(seed, Tuning::default());
        state.start();
        let (mut score, mut level) = (state.score, state.level);
        for bits in moves {
            let mut input = TickInput::default();
            input.movement.left = bits & 1 != 0;
            input.movement.right = bits & 2 != 0;
            input.movement.up = bits & 4 != 0;
            input.movement.down = bits & 8 != 0;
            tick(&mut state, &input);
            prop_assert!(state.score >= score);
            prop_assert!(state.level >= level);
            score = state.score;
            level = state.level;
        }
    }
}

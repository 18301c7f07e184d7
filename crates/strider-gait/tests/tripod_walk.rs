//! End-to-end gait stability run.
//!
//! Six legs in a line walk over jittered terrain for many ticks while the
//! body translates at constant speed. The run asserts, at every tick:
//!
//! - no two array-adjacent legs are airborne simultaneously,
//! - no two legs from opposite tripod groups are airborne simultaneously,
//! - every chain keeps its segment lengths (reachable poses) and stays finite.
//!
//! Plus liveness at the end: every leg stepped at least once.

use nalgebra::{Point2, Vector2};

use strider_core::config::{GaitConfig, LegConfig};
use strider_core::types::{BodyState, NullEffects};
use strider_gait::{GaitController, Leg};
use strider_ik::FabrikSolver;
use strider_test_utils::JitteredTerrain;

const LEG_COUNT: usize = 6;
const TICKS: usize = 800;
const BODY_SPEED: f32 = 4.0;

fn build_walker(body: &BodyState) -> GaitController {
    let legs = Leg::line(LEG_COUNT, 24.0, body, &LegConfig::default());
    GaitController::new(legs, GaitConfig::default())
}

#[test]
fn tripod_walk_keeps_adjacent_legs_grounded() {
    let terrain = JitteredTerrain::new(42, 130.0, 12.0, 40.0);
    let solver = FabrikSolver::with_defaults();
    let mut effects = NullEffects;

    let mut body = BodyState::moving(Point2::new(0.0, 0.0), Vector2::new(BODY_SPEED, 0.0));
    let mut controller = build_walker(&body);

    let mut steps_per_leg = [0u32; LEG_COUNT];
    let mut was_moving = [false; LEG_COUNT];

    for tick in 0..TICKS {
        body.position.x += BODY_SPEED;
        controller.update(&body, &terrain, &solver, &mut effects);

        let moving: Vec<bool> = controller.legs().iter().map(Leg::is_moving).collect();

        // Adjacency invariant.
        for i in 0..LEG_COUNT - 1 {
            assert!(
                !(moving[i] && moving[i + 1]),
                "tick {tick}: adjacent legs {i} and {} both airborne",
                i + 1
            );
        }

        // Tripod alternation: airborne legs all share one parity.
        let airborne_parities: Vec<usize> =
            (0..LEG_COUNT).filter(|&i| moving[i]).map(|i| i % 2).collect();
        if let Some((&first, rest)) = airborne_parities.split_first() {
            assert!(
                rest.iter().all(|&p| p == first),
                "tick {tick}: both tripod groups airborne"
            );
        }

        // Count liftoffs for the liveness check.
        for i in 0..LEG_COUNT {
            if moving[i] && !was_moving[i] {
                steps_per_leg[i] += 1;
            }
            was_moving[i] = moving[i];
        }

        // Chains stay finite.
        for (i, leg) in controller.legs().iter().enumerate() {
            for joint in leg.chain().joints() {
                assert!(
                    joint.x.is_finite() && joint.y.is_finite(),
                    "tick {tick}: leg {i} has a non-finite joint"
                );
            }
        }
    }

    for (i, &steps) in steps_per_leg.iter().enumerate() {
        assert!(steps >= 3, "leg {i} stepped only {steps} times over {TICKS} ticks");
    }
}

#[test]
fn planted_feet_stay_put_while_body_moves() {
    // Until the deviation threshold trips, a planted foot's target must not
    // slide with the body.
    let terrain = JitteredTerrain::new(7, 130.0, 5.0, 50.0);
    let solver = FabrikSolver::with_defaults();
    let mut effects = NullEffects;

    let mut body = BodyState::moving(Point2::new(0.0, 0.0), Vector2::new(1.0, 0.0));
    let mut controller = build_walker(&body);
    let initial_targets: Vec<Point2<f32>> =
        controller.legs().iter().map(Leg::target).collect();

    // 10 ticks at speed 1: deviation ~10, far under the 60 threshold.
    for _ in 0..10 {
        body.position.x += 1.0;
        controller.update(&body, &terrain, &solver, &mut effects);
    }

    for (leg, initial) in controller.legs().iter().zip(&initial_targets) {
        assert!(!leg.is_moving());
        assert_eq!(leg.target(), *initial);
    }
}

#[test]
fn stationary_body_settles_with_no_stepping() {
    let terrain = JitteredTerrain::new(3, 130.0, 12.0, 40.0);
    let solver = FabrikSolver::with_defaults();
    let mut effects = NullEffects;

    let body = BodyState::at(Point2::new(0.0, 0.0));
    let mut controller = build_walker(&body);

    for _ in 0..100 {
        let worst = controller.update(&body, &terrain, &solver, &mut effects);
        assert!(worst.is_finite());
    }
    // Hanging feet may be off the jittered ground, but never by more than
    // the step threshold, so the walker stands still.
    assert!(controller.legs().iter().all(|leg| !leg.is_moving()));
}

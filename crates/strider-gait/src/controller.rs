//! Tripod gait coordination across a set of legs.
//!
//! Once per tick the controller measures each planted foot's deviation from
//! its ideal foothold (terrain-projected below the leg's nominal offset) and
//! triggers a step when the deviation exceeds the threshold and stability
//! allows it. New footholds are led ahead along the body velocity so the
//! foot lands where the body will be, not where it was at liftoff.

use nalgebra::Point2;

use strider_core::config::GaitConfig;
use strider_core::types::{BodyState, StepEffects, Terrain};
use strider_ik::FabrikSolver;

use crate::leg::Leg;

/// Coordinates stepping across all legs. Owns no per-leg physics state;
/// legs only interact through the read-only `is_moving` checks here.
#[derive(Debug)]
pub struct GaitController {
    legs: Vec<Leg>,
    config: GaitConfig,
}

impl GaitController {
    #[must_use]
    pub fn new(legs: Vec<Leg>, config: GaitConfig) -> Self {
        Self { legs, config }
    }

    /// One coordination tick.
    ///
    /// Legs are visited in fixed index order: first the step-trigger scan
    /// (earlier legs can claim a step slot that later legs then see as
    /// taken — harmless, the denial rule is conservative either way), then
    /// every leg's own update.
    ///
    /// Returns the worst end-effector error any leg's solve reported this
    /// tick, for telemetry.
    pub fn update(
        &mut self,
        body: &BodyState,
        terrain: &dyn Terrain,
        solver: &FabrikSolver,
        effects: &mut dyn StepEffects,
    ) -> f32 {
        for i in 0..self.legs.len() {
            if self.legs[i].is_moving() {
                continue;
            }
            let ideal = self.ideal_foothold(body, terrain, i);
            if nalgebra::distance(&self.legs[i].target(), &ideal) <= self.config.step_threshold {
                continue;
            }
            if !self.can_step(i) {
                continue;
            }
            // Lead the foothold along the body velocity, re-projected onto
            // the terrain at the led x.
            let lead_x = body.velocity.x.mul_add(self.config.lead_gain, ideal.x);
            self.legs[i].step_to(Point2::new(lead_x, terrain.height(lead_x)));
        }

        let mut worst = 0.0f32;
        for leg in &mut self.legs {
            let report = leg.update(body, solver, effects);
            worst = worst.max(report.error);
        }
        worst
    }

    /// Stability policy: may leg `index` begin a step right now?
    ///
    /// Two denial rules, both enforced:
    /// - either array-adjacent neighbor is mid-step (the strict local
    ///   guarantee the stability tests pin down), or
    /// - any leg of the opposite tripod group (odd vs even indices) is
    ///   mid-step, which keeps the long-run pattern alternating in tripods.
    #[must_use]
    pub fn can_step(&self, index: usize) -> bool {
        if index > 0 && self.legs[index - 1].is_moving() {
            return false;
        }
        if index + 1 < self.legs.len() && self.legs[index + 1].is_moving() {
            return false;
        }
        let group = index % 2;
        !self
            .legs
            .iter()
            .enumerate()
            .any(|(i, leg)| i % 2 != group && leg.is_moving())
    }

    /// Terrain-projected foothold directly below the leg's nominal offset.
    fn ideal_foothold(&self, body: &BodyState, terrain: &dyn Terrain, index: usize) -> Point2<f32> {
        let x = body.position.x + self.legs[index].offset().x;
        Point2::new(x, terrain.height(x))
    }

    #[must_use]
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    pub fn legs_mut(&mut self) -> &mut [Leg] {
        &mut self.legs
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;
    use strider_core::config::LegConfig;
    use strider_core::types::{FlatTerrain, NullEffects};

    fn line_of_legs(count: usize, body: &BodyState) -> Vec<Leg> {
        Leg::line(count, 24.0, body, &LegConfig::default())
    }

    fn start_step(controller: &mut GaitController, index: usize) {
        let target = controller.legs()[index].target() + Vector2::new(80.0, 0.0);
        controller.legs_mut()[index].step_to(target);
    }

    #[test]
    fn can_step_denies_adjacent_neighbor() {
        let body = BodyState::at(Point2::new(0.0, 0.0));
        let mut controller = GaitController::new(line_of_legs(6, &body), GaitConfig::default());

        start_step(&mut controller, 2);
        assert!(!controller.can_step(1));
        assert!(!controller.can_step(3));
    }

    #[test]
    fn can_step_denies_opposite_group() {
        let body = BodyState::at(Point2::new(0.0, 0.0));
        let mut controller = GaitController::new(line_of_legs(6, &body), GaitConfig::default());

        // Leg 2 is in the even group; every odd leg is denied, even the
        // non-adjacent leg 5.
        start_step(&mut controller, 2);
        assert!(!controller.can_step(5));
        // Same-group, non-adjacent legs stay allowed.
        assert!(controller.can_step(0));
        assert!(controller.can_step(4));
    }

    #[test]
    fn can_step_allows_everyone_when_all_planted() {
        let body = BodyState::at(Point2::new(0.0, 0.0));
        let controller = GaitController::new(line_of_legs(6, &body), GaitConfig::default());
        for i in 0..6 {
            assert!(controller.can_step(i));
        }
    }

    #[test]
    fn edge_legs_check_single_neighbor() {
        let body = BodyState::at(Point2::new(0.0, 0.0));
        let mut controller = GaitController::new(line_of_legs(6, &body), GaitConfig::default());

        start_step(&mut controller, 1);
        assert!(!controller.can_step(0));
        // Leg 5 is odd like leg 1: same group, non-adjacent, allowed.
        assert!(controller.can_step(5));
    }

    #[test]
    fn small_deviation_triggers_no_step() {
        let terrain = FlatTerrain(160.0);
        let body = BodyState::at(Point2::new(0.0, 0.0));
        let mut controller = GaitController::new(line_of_legs(6, &body), GaitConfig::default());
        let solver = FabrikSolver::with_defaults();
        let mut effects = NullEffects;

        // Feet start exactly on their ideal footholds; nothing should move.
        controller.update(&body, &terrain, &solver, &mut effects);
        assert!(controller.legs().iter().all(|leg| !leg.is_moving()));
    }

    #[test]
    fn large_deviation_triggers_step_with_velocity_lead() {
        let terrain = FlatTerrain(160.0);
        let start_body = BodyState::at(Point2::new(0.0, 0.0));
        let mut controller = GaitController::new(line_of_legs(6, &start_body), GaitConfig::default());
        let solver = FabrikSolver::with_defaults();
        let mut effects = NullEffects;

        // Teleport the body well past the step threshold.
        let body = BodyState::moving(Point2::new(70.0, 0.0), Vector2::new(3.0, 0.0));
        controller.update(&body, &terrain, &solver, &mut effects);

        let moving: Vec<usize> = (0..6)
            .filter(|&i| controller.legs()[i].is_moving())
            .collect();
        assert!(!moving.is_empty());

        // Every stepping leg aims at its led foothold: ideal x plus
        // velocity.x * lead_gain.
        for &i in &moving {
            let leg = &controller.legs()[i];
            let ideal_x = body.position.x + leg.offset().x;
            let expected_x = ideal_x + 3.0 * GaitConfig::default().lead_gain;
            approx::assert_relative_eq!(leg.step_end().x, expected_x, epsilon = 1e-4);
            approx::assert_relative_eq!(leg.step_end().y, 160.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn first_tick_steps_only_one_tripod_group() {
        let terrain = FlatTerrain(160.0);
        let start_body = BodyState::at(Point2::new(0.0, 0.0));
        let mut controller = GaitController::new(line_of_legs(6, &start_body), GaitConfig::default());
        let solver = FabrikSolver::with_defaults();
        let mut effects = NullEffects;

        let body = BodyState::moving(Point2::new(70.0, 0.0), Vector2::new(3.0, 0.0));
        controller.update(&body, &terrain, &solver, &mut effects);

        // Index order means leg 0 wins; legs 2 and 4 share its group and
        // are non-adjacent, so the whole even tripod lifts while every odd
        // leg stays planted.
        for (i, leg) in controller.legs().iter().enumerate() {
            assert_eq!(leg.is_moving(), i % 2 == 0, "leg {i}");
        }
    }
}

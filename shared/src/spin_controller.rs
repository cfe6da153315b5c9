use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::collaborators::{Clock, FortuneTeller, GateStore, RandomIndex};
use crate::config::SpinConfig;
use crate::constants::FULL_TURN;
use crate::fortune;
use crate::prize::{Catalog, Prize};
use crate::wheel_geometry::WheelGeometry;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum SpinStatus {
    Idle,
    Spinning,
    Won,
}

/// What a started spin looks like: the draw and where the wheel must end up.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinPlan {
    pub prize_index: usize,
    pub prize: Prize,
    pub stop_angle: f64,
    pub extra_turns: u32,
    /// Accumulated rotation the wheel should animate to.
    pub rotation: f64,
}

/// Outcome handed back to the controller once the wheel has settled.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Reveal {
    pub prize_index: usize,
    pub prize: Prize,
    pub fortune: String,
}

/// Spin lifecycle: `Idle -> Spinning -> Won -> Idle`, with a persisted gate
/// that blocks every spin after the first completed one.
pub struct SpinController<R, G> {
    catalog: Catalog,
    geometry: WheelGeometry,
    config: SpinConfig,
    rng: R,
    gate: G,
    status: SpinStatus,
    accumulated_rotation: f64,
    pending: Option<SpinPlan>,
    selected_prize: Option<Prize>,
    fortune: Option<String>,
    has_spun_before: bool,
}

impl<R: RandomIndex, G: GateStore> SpinController<R, G> {
    pub fn new(catalog: Catalog, config: SpinConfig, rng: R, gate: G) -> Self {
        let has_spun_before = gate.load();
        if has_spun_before {
            log::info!("Spin gate already set, wheel is locked");
        }

        Self {
            geometry: WheelGeometry::new(catalog.len()),
            catalog,
            config,
            rng,
            gate,
            status: SpinStatus::Idle,
            accumulated_rotation: 0.0,
            pending: None,
            selected_prize: None,
            fortune: None,
            has_spun_before,
        }
    }

    pub fn status(&self) -> SpinStatus {
        self.status
    }

    pub fn rotation(&self) -> f64 {
        self.accumulated_rotation
    }

    pub fn selected_prize(&self) -> Option<&Prize> {
        self.selected_prize.as_ref()
    }

    pub fn fortune(&self) -> Option<&str> {
        self.fortune.as_deref()
    }

    pub fn has_spun_before(&self) -> bool {
        self.has_spun_before
    }

    pub fn can_spin(&self) -> bool {
        self.status != SpinStatus::Spinning && !self.has_spun_before
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn geometry(&self) -> &WheelGeometry {
        &self.geometry
    }

    pub fn config(&self) -> &SpinConfig {
        &self.config
    }

    /// Starts a spin. Returns `None`, changing nothing, while a spin is in
    /// flight or once the gate is set.
    pub fn spin(&mut self) -> Option<SpinPlan> {
        if !self.can_spin() {
            log::debug!(
                "Ignoring spin request (status: {:?}, gated: {})",
                self.status,
                self.has_spun_before
            );
            return None;
        }

        let prize_index = self.rng.next_index(self.catalog.len());
        let prize = self.catalog.get(prize_index)?.clone();
        let stop_angle = self.geometry.target_stop_angle(prize_index);
        let extra_turns = self.config.extra_turns.draw(&mut self.rng);

        // Start from the next whole turn so `rotation % 360 == stop_angle`
        // holds for every spin, not just the first.
        let base = (self.accumulated_rotation / FULL_TURN).ceil() * FULL_TURN;
        let rotation = base + f64::from(extra_turns) * FULL_TURN + stop_angle;
        self.accumulated_rotation = rotation;

        self.selected_prize = None;
        self.fortune = None;
        self.status = SpinStatus::Spinning;

        let plan = SpinPlan {
            prize_index,
            prize,
            stop_angle,
            extra_turns,
            rotation,
        };
        log::info!(
            "Spin started: segment {} ({}), stop angle {}, rotation {}",
            plan.prize_index,
            plan.prize.label,
            plan.stop_angle,
            plan.rotation
        );
        self.pending = Some(plan.clone());
        Some(plan)
    }

    /// `Spinning -> Won`. Sets and persists the gate. Returns whether the
    /// transition happened; a reveal that does not match the spin in flight
    /// is dropped.
    pub fn settle(&mut self, reveal: Reveal) -> bool {
        let matches_pending = self
            .pending
            .as_ref()
            .map_or(false, |plan| plan.prize_index == reveal.prize_index);
        if self.status != SpinStatus::Spinning || !matches_pending {
            log::warn!("Dropping reveal for segment {}, no matching spin", reveal.prize_index);
            return false;
        }

        self.pending = None;
        self.selected_prize = Some(reveal.prize);
        self.fortune = Some(reveal.fortune);
        self.status = SpinStatus::Won;
        self.has_spun_before = true;

        if let Err(e) = self.gate.save() {
            log::warn!("Could not persist spin gate: {}", e);
        }
        true
    }

    /// `Won -> Idle`. The gate stays set.
    pub fn close(&mut self) {
        if self.status != SpinStatus::Won {
            return;
        }
        self.selected_prize = None;
        self.fortune = None;
        self.status = SpinStatus::Idle;
    }
}

/// Waits out the spin animation while the flavor text is fetched, then
/// builds the reveal. The request starts right away but is only awaited
/// together with the timer, so a slow service stretches the reveal and a
/// failing one falls back to canned text.
pub async fn reveal<C, T>(plan: &SpinPlan, clock: &C, teller: &T, delay: Duration) -> Reveal
where
    C: Clock + ?Sized,
    T: FortuneTeller + ?Sized,
{
    let request = teller.fortune(&plan.prize.label);
    let timer = clock.sleep(delay);
    let ((), result) = futures::join!(timer, request);

    Reveal {
        prize_index: plan.prize_index,
        prize: plan.prize.clone(),
        fortune: fortune::resolve(result),
    }
}

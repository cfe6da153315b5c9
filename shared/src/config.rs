use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::collaborators::RandomIndex;
use crate::constants::{
    DEFAULT_EXTRA_TURNS, GATE_KEY, REVEAL_DELAY_MS, SPIN_TRANSITION_MS,
};

/// Full turns added on top of the stop angle. Purely cosmetic.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ExtraTurns {
    Fixed { turns: u32 },
    /// `base` plus a uniform draw from `0..=spread`.
    Randomized { base: u32, spread: u32 },
}

impl ExtraTurns {
    pub fn draw<R: RandomIndex + ?Sized>(&self, rng: &mut R) -> u32 {
        match *self {
            Self::Fixed { turns } => turns,
            Self::Randomized { base, spread } => {
                // `spread + 1` slots; saturate where usize is 32 bits wide
                let slots = usize::try_from(spread)
                    .ok()
                    .and_then(|s| s.checked_add(1))
                    .unwrap_or(usize::MAX);
                let extra = u32::try_from(rng.next_index(slots)).unwrap_or(spread);
                base.saturating_add(extra.min(spread))
            }
        }
    }
}

impl Default for ExtraTurns {
    fn default() -> Self {
        Self::Fixed { turns: DEFAULT_EXTRA_TURNS }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpinConfig {
    pub extra_turns: ExtraTurns,
    pub reveal_delay_ms: u32,
    pub gate_key: String,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            extra_turns: ExtraTurns::default(),
            reveal_delay_ms: REVEAL_DELAY_MS,
            gate_key: GATE_KEY.to_string(),
        }
    }
}

impl SpinConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Delay before the reveal, never shorter than the wheel's transition.
    pub fn reveal_delay(&self) -> Duration {
        if self.reveal_delay_ms < SPIN_TRANSITION_MS {
            log::warn!(
                "reveal delay {}ms is shorter than the spin transition, using {}ms",
                self.reveal_delay_ms,
                SPIN_TRANSITION_MS
            );
        }
        Duration::from_millis(u64::from(self.reveal_delay_ms.max(SPIN_TRANSITION_MS)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedIndex;

    #[test]
    fn test_defaults() {
        let config = SpinConfig::default();
        assert_eq!(config.extra_turns, ExtraTurns::Fixed { turns: 12 });
        assert_eq!(config.reveal_delay(), Duration::from_millis(10_500));
        assert_eq!(config.gate_key, "armani_spin_used");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SpinConfig::from_json(
            r#"{"extra_turns":{"mode":"randomized","base":12,"spread":5},"reveal_delay_ms":8500}"#,
        )
        .unwrap();
        assert_eq!(config.extra_turns, ExtraTurns::Randomized { base: 12, spread: 5 });
        assert_eq!(config.gate_key, GATE_KEY);
        // 8.5s is below the 10s transition
        assert_eq!(config.reveal_delay(), Duration::from_millis(10_000));
    }

    #[test]
    fn test_randomized_turns_stay_in_range() {
        let turns = ExtraTurns::Randomized { base: 12, spread: 5 };
        let mut rng = ScriptedIndex::new(vec![0, 5, 6]);
        assert_eq!(turns.draw(&mut rng), 12);
        assert_eq!(turns.draw(&mut rng), 17);
        assert_eq!(turns.draw(&mut rng), 12);
    }

    #[test]
    fn test_huge_spread_saturates() {
        let config = SpinConfig::from_json(
            r#"{"extra_turns":{"mode":"randomized","base":12,"spread":4294967295}}"#,
        )
        .unwrap();
        let mut rng = ScriptedIndex::new(vec![usize::MAX]);
        assert_eq!(config.extra_turns.draw(&mut rng), u32::MAX);

        let turns = ExtraTurns::Randomized { base: u32::MAX, spread: 3 };
        let mut rng = ScriptedIndex::new(vec![2]);
        assert_eq!(turns.draw(&mut rng), u32::MAX);
    }
}

pub mod collaborators;
pub mod config;
pub mod constants;
pub mod error;
pub mod fortune;
pub mod prize;
pub mod spin_controller;
#[cfg(any(test, feature = "test-util"))]
pub mod testing;
pub mod wheel_geometry;

pub use collaborators::*;
pub use config::{ExtraTurns, SpinConfig};
pub use error::{FortuneError, GateError, WheelError};
pub use prize::{Catalog, Prize, PRIZES};
pub use spin_controller::{reveal, Reveal, SpinController, SpinPlan, SpinStatus};
#[cfg(any(test, feature = "test-util"))]
pub use testing::*;

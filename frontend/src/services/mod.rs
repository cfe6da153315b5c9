pub mod fortune_service;
pub mod local_gate;
pub mod timer;

pub use fortune_service::GeminiTeller;
pub use local_gate::{local_gate, LocalStorage};
pub use timer::GlooClock;

pub const GATE_KEY: &str = "armani_spin_used";
pub const GATE_SPUN_VALUE: &str = "true";

pub const DEFAULT_EXTRA_TURNS: u32 = 12;

// Must stay above SPIN_TRANSITION_MS so the reveal never lands before the wheel settles.
pub const REVEAL_DELAY_MS: u32 = 10_500;
pub const SPIN_TRANSITION_MS: u32 = 10_000;

pub const FULL_TURN: f64 = 360.0;

pub const FORTUNE_MODEL: &str = "gemini-3-flash-preview";
pub const FORTUNE_TEMPERATURE: f32 = 0.7;
pub const FORTUNE_EMPTY_FALLBACK: &str = "Selamat! Keanggunan abadi Armani kini menjadi milik Anda.";
pub const FORTUNE_ERROR_FALLBACK: &str = "Keberuntungan yang luar biasa menyertai langkah Anda. Selamat menikmati kemewahan eksklusif dari Giorgio Armani.";

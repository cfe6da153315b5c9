pub mod prize_modal;
pub mod spin_button;
pub mod wheel;

pub use prize_modal::PrizeModal;
pub use spin_button::SpinButton;
pub use wheel::Wheel;

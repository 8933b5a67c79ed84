//! Headless calculator core (state/action/effect).

pub mod action;
pub mod calc;
pub mod display;
pub mod effect;
pub mod services;
pub mod state;
pub mod store;

pub use action::Action;
pub use display::{render_display, Display};
pub use effect::Effect;
pub use state::CalcState;
pub use store::{DispatchResult, Store};

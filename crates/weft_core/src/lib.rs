//! Weft Core
//!
//! Foundational primitives shared by weft components:
//!
//! - **Key Events**: platform-neutral key codes and modifier state
//! - **State Transitions**: the [`StateTransitions`] trait for small enum FSMs
//! - **Menu Registry**: the single "currently open menu" reference shared by
//!   every mounted popup
//! - **Errors**: the [`WeftError`] type for configuration failures
//!
//! # Example
//!
//! ```rust
//! use weft_core::fsm::{menu_events, MenuState, StateTransitions};
//!
//! let mut menu = MenuState::default();
//! assert!(menu.transition(menu_events::TOGGLE));
//! assert!(menu.is_open());
//! ```

pub mod error;
pub mod events;
pub mod fsm;
pub mod menu_state;

pub use error::{Result, WeftError};
pub use events::{key_codes, KeyEvent, KeyOutcome, Modifiers};
pub use fsm::{menu_events, MenuState, StateTransitions};
pub use menu_state::{MenuDismiss, MenuId, MenuRegistry};

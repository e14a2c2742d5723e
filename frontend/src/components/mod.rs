pub mod cards;
pub mod empty_state;
pub mod layout;
pub mod toast;

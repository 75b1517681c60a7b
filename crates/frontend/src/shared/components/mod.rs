pub mod modal;
pub mod stat_card;

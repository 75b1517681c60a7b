pub mod api;
pub mod context;
pub mod guard;
pub mod storage;

pub use context::{do_logout, establish_session};

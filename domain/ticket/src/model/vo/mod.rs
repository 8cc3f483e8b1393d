pub mod actor;
pub mod msg;

#[rustfmt::skip]
pub use {
    actor::Actor,
    actor::Role,
    msg::EventName,
    msg::RequestEvent,
};

pub mod employee;
pub mod equipment;
pub mod request;
pub mod request_history;
pub mod request_status;
pub mod request_type;

#[rustfmt::skip]
pub use {
    employee::Employee,
    equipment::Equipment,
    request::Request,
    request_history::RequestHistory,
    request_status::RequestStatus,
    request_status::StatusKind,
    request_type::RequestType,
};

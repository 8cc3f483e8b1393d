pub mod lifecycle;
mod request;

pub use request::RequestService;

mod diff;
mod history;
mod notify;
mod request;

#[rustfmt::skip]
pub use {
    diff::ChangeNarrator,
    history::HistoryRecorder,
    notify::NotificationHub,
    request::RequestServiceImpl,
};

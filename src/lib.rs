//! Schema-driven form with submit-time validation, rendered with iced.
//!
//! - src/form: field table, record, validation rules, submit step
//! - src/notify.rs: transient toasts
//! - src/app.rs: application state and update loop
//! - src/ui.rs: widget tree
//! - src/logging.rs: tracing setup

pub mod app;
pub mod form;
pub mod logging;
pub mod notify;
pub mod ui;

//! Trainer booking and availability screens.
//!
//! The one hard rule here lives in [`booking_form`]: a booking is only
//! submitted after a positive availability check for exactly the trainer
//! and interval currently selected.

pub mod availability_checker;
pub mod booking_edit;
pub mod booking_form;
pub mod calendar;
pub mod status_manager;

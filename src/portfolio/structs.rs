pub mod aggregate_stats;
pub mod contact_form;
pub mod contact_submission;
pub mod portfolio_tracker;
pub mod visit_event;

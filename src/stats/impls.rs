pub mod portfolio_tracker;

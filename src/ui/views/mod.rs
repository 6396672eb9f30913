pub mod auth;
pub mod dashboard;
pub mod quiz;
pub mod quiz_setup;
pub mod results;
pub mod review_history;
pub mod review_live;
pub mod upload;

pub mod challenge_store;
pub mod clock;
pub mod dashboard;
pub mod identity;
pub mod ledger;
pub mod login_signal;
pub mod notifier;
pub mod time_policy;

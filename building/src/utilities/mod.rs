pub mod dispatcher;
pub mod monitor;

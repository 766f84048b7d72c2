pub mod controller;
pub mod doors;

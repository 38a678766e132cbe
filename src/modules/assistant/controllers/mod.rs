pub mod assistant_controller;

pub use assistant_controller::configure;

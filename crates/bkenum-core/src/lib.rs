pub mod config;
pub mod logging;

pub mod control;
pub mod enumerate;
pub mod input;
pub mod mutation;
pub mod probe;
pub mod url_model;

pub mod prelude;

pub mod views;

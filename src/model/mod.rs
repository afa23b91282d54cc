pub mod lifecycle;
pub mod role;
pub mod selection;
pub mod view;

pub mod drawer;
pub mod user_header;

pub use drawer::{DrawerMode, Route, DRAWER_WIDTH};

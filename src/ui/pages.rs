//! Pages module
//! Full-page views routed by the drawer

pub mod detail;
pub mod home;
pub mod profile;
pub mod settings;

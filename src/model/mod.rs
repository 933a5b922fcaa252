//! Data structures shared by the store, the views and the HTTP clients.

pub mod dtos;
pub mod structs;

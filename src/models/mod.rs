//! Domain models and request/response types

pub mod booking;
pub mod city;
pub mod enums;
pub mod slot;
pub mod turf;
pub mod user;
pub mod venue;

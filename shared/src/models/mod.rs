//! Data models

pub mod employee;

pub use employee::{Employee, EmployeeId};

//! Use-case services
//!
//! Orchestrate repository calls; HTTP handlers never touch storage directly.

pub mod employee_service;

pub use employee_service::EmployeeService;

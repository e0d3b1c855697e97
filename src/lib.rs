//! student-marks: in-memory student, course and mark records behind a text menu.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;

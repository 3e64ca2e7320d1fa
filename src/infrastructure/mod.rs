//! Infrastructure layer - persistence and process plumbing

pub mod customer;
pub mod logging;
pub mod storage;

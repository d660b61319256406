pub mod controller;
pub mod memory;
pub mod model;
pub mod repo;
pub mod service;

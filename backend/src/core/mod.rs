//! Core bookkeeping shared by the simulation driver

pub mod pass_counter;

// src/lib.rs

//! Z-Xin course portal tools: homework deadline scanning with change
//! detection and notification.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;

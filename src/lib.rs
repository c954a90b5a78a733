#![no_std]

pub mod error;
pub mod hardware;

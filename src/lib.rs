//! Pomodoro countdown timer: a phase cycle state machine plus two front ends,
//! a console status line and an interactive terminal form.

pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod gui;
pub mod notify;
pub mod pomodoro;
pub mod runtime;

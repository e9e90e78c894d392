//! Core workflow logic: poll, parse, render

pub mod parser;
pub mod poller;
pub mod renderer;

#![deny(unused_doc_comments)]

pub mod button;
pub mod compute;
pub mod controller;
pub mod entities;
pub mod geometry;
pub mod scoreboard;
pub mod settings;
pub mod stats;

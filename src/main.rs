//! Dreamsweeper: a single window whose drawing surface is painted as one solid
//! rectangle.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]
#![deny(clippy::correctness)]

mod controller;
mod gui;
mod render;
mod widget;

const TITLE: &str = "Dreamsweeper";

fn main() {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .expect("Failed to initialize logger");

    gui::show_gui();
}

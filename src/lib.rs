#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod controller;
pub mod error;
pub mod export;
pub mod import;
pub mod input;
pub mod panels;
pub mod session;
pub mod surface;
pub mod text;

pub use app::SketchApp;
pub use controller::Controller;
pub use error::SketchError;
pub use input::{InputEvent, InputHandler};
pub use session::{LineCap, Mode, Session, StyleSnapshot};
pub use surface::Surface;
pub use text::TextStamper;

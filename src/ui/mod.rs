pub mod app;
pub mod monthpane;
pub mod paint;
pub mod screens;
pub mod widgets;

pub use app::App;
pub use monthpane::MonthPane;
pub use widgets::{Actions, GridWidgets, Style, Styled};

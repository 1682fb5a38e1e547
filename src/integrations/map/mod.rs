pub mod widget;

pub use widget::{MapWidget, WebviewMapWidget};

// WakeWatch — Task Loops

pub mod app;
pub mod clock;
pub mod link;
pub mod sensor;
pub mod ui;

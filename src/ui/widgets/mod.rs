pub mod popups;
pub mod recipients;

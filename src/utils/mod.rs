pub mod clipboard;
pub mod haptics;
pub mod test_utils;

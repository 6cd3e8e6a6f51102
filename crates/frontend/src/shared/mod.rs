pub mod api_error;
pub mod api_utils;
pub mod config;
pub mod icons;
pub mod notifications;
pub mod storage;

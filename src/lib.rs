//! ビールカタログ CLI
//!
//! 共通コントローラ（beer-catalog-common）をreqwestのストアで動かす。

pub mod browse;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod progress;
pub mod render;
pub mod store;

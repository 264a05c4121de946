//! 信号フィールド・MAC フィールドのパケット処理

pub mod core;
pub mod frame;
pub mod debug;

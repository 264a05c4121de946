//! 802.11 フレーム注入用の信号フィールドユーティリティ

pub mod packet;
pub mod utils;

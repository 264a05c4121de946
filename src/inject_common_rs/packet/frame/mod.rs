/// フレームバッファへの注入処理

pub mod splicer;
pub mod injector;

// 再エクスポート
pub use splicer::{FrameBuffer, inject_signal_field, inject_mac, copy_range};
pub use injector::SignalInjector;

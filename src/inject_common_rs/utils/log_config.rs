use std::io::Write;

use chrono::Local;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use super::config_loader::LogConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel { Trace=0, Debug=1, Info=2, Warn=3, Error=4 }
impl LogLevel {
    pub fn from_str(s: &str) -> Result<Self, String> { match s.to_lowercase().as_str(){"trace"=>Ok(LogLevel::Trace),"debug"=>Ok(LogLevel::Debug),"info"=>Ok(LogLevel::Info),"warn"=>Ok(LogLevel::Warn),"error"=>Ok(LogLevel::Error),_=>Err(format!("Invalid log level: {}", s))} }
    pub fn as_str(&self)->&'static str{match self{LogLevel::Trace=>"TRACE",LogLevel::Debug=>"DEBUG",LogLevel::Info=>"INFO",LogLevel::Warn=>"WARN",LogLevel::Error=>"ERROR"}}
    pub fn to_level_filter(self) -> LevelFilter { match self { LogLevel::Trace=>LevelFilter::Trace, LogLevel::Debug=>LevelFilter::Debug, LogLevel::Info=>LevelFilter::Info, LogLevel::Warn=>LevelFilter::Warn, LogLevel::Error=>LevelFilter::Error } }
}

/// `[時刻] [LEVEL] [module] message` 形式の1行を組み立てる
pub fn format_line(level: log::Level, module: &str, message: &str, include_timestamps: bool) -> String {
    let mut parts = Vec::new();
    if include_timestamps { parts.push(format!("[{}]", Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))); }
    parts.push(format!("[{}]", level));
    parts.push(format!("[{}]", module));
    parts.push(message.to_string());
    parts.join(" ")
}

/// env_logger をログ設定で初期化する。2回目以降の呼び出しは何もしない。
/// `RUST_LOG` が設定されていればそちらを優先する。
pub fn init_logging(config: &LogConfig) -> Result<(), String> {
    let level = LogLevel::from_str(&config.level)?;
    let include_timestamps = config.timestamps;
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level.to_level_filter());
    if let Ok(spec) = std::env::var("RUST_LOG") { builder.parse_filters(&spec); }
    builder.format(move |buf, record| {
        let module = record.module_path().unwrap_or("inject");
        writeln!(buf, "{}", format_line(record.level(), module, &record.args().to_string(), include_timestamps))
    });
    let _ = builder.try_init();
    Ok(())
}

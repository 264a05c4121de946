use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::inject_common_rs::packet::core::exceptions::{InjectError, InjectResult};
use crate::inject_common_rs::packet::core::layout::SignalKind;

/// 注入処理の設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InjectionConfig {
    /// 信号フィールドの種別
    pub signal_kind: SignalKind,
    /// 無線区間のビット順（各バイト LSB 先頭）で書き込むか
    pub bits_reverse_order: bool,
    /// 書き込み前にパリティビットを補正するか（レガシーのみ）
    pub auto_correct_parity: bool,
}
impl Default for InjectionConfig { fn default() -> Self { Self { signal_kind: SignalKind::Legacy, bits_reverse_order: true, auto_correct_parity: true } } }

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig { pub level: String, pub timestamps: bool }
impl Default for LogConfig { fn default() -> Self { Self { level: "info".into(), timestamps: true } } }

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InjectConfig {
    pub injection: InjectionConfig,
    pub logging: LogConfig,
}

pub struct ConfigLoader { config_paths: Vec<PathBuf>, env_prefix: String, load_dotenv: bool }
impl ConfigLoader {
    pub fn new() -> Self { Self { config_paths: vec![PathBuf::from("inject.config.toml"), PathBuf::from("inject.config.json"), PathBuf::from("config.toml"), PathBuf::from("config.json")], env_prefix: "INJECT_".into(), load_dotenv: true } }
    pub fn with_paths(paths: Vec<PathBuf>) -> Self { Self { config_paths: paths, ..Self::new() } }
    pub fn with_env_prefix(mut self, prefix: String) -> Self { self.env_prefix = prefix; self }
    pub fn with_dotenv(mut self, enabled: bool) -> Self { self.load_dotenv = enabled; self }

    /// 設定ファイル（最初に見つかったもの）→ 環境変数の順に適用して検証する
    pub fn load(&self) -> InjectResult<InjectConfig> {
        if self.load_dotenv { let _ = dotenvy::dotenv(); }
        let mut config = InjectConfig::default();
        for path in &self.config_paths {
            if path.exists() { match self.load_from_file(path) { Ok(fc) => { config = fc; break; }, Err(e) => { log::warn!("Failed to load config from {:?}: {}", path, e); } } }
        }
        config = self.apply_env_overrides(config)?;
        self.validate_config(&config)?;
        Ok(config)
    }
    pub fn load_from_file(&self, path: &Path) -> InjectResult<InjectConfig> {
        let content = fs::read_to_string(path).map_err(|e| Self::err(format!("Failed to read config file: {}", e)))?;
        match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::from_str(&content).map_err(|e| Self::err(format!("Failed to parse JSON config: {}", e))),
            Some("toml") => toml::from_str(&content).map_err(|e| Self::err(format!("Failed to parse TOML config: {}", e))),
            _ => Err(Self::err("Unsupported config file format".into())),
        }
    }
    fn apply_env_overrides(&self, mut config: InjectConfig) -> InjectResult<InjectConfig> {
        if let Ok(kind) = env::var(format!("{}SIGNAL_KIND", self.env_prefix)) { config.injection.signal_kind = kind.parse().map_err(Self::err)?; }
        if let Ok(flag) = env::var(format!("{}BITS_REVERSE_ORDER", self.env_prefix)) { config.injection.bits_reverse_order = flag.parse().map_err(|_| Self::err("Invalid bits reverse order flag in environment variable".into()))?; }
        if let Ok(flag) = env::var(format!("{}AUTO_CORRECT_PARITY", self.env_prefix)) { config.injection.auto_correct_parity = flag.parse().map_err(|_| Self::err("Invalid auto correct parity flag in environment variable".into()))?; }
        if let Ok(level) = env::var(format!("{}LOG_LEVEL", self.env_prefix)) { config.logging.level = level; }
        Ok(config)
    }
    pub fn validate_config(&self, config: &InjectConfig) -> InjectResult<()> {
        match config.logging.level.to_lowercase().as_str() { "trace"|"debug"|"info"|"warn"|"error" => {}, _ => return Err(Self::err("Invalid log level. Must be one of: trace, debug, info, warn, error".into())) }
        if config.injection.signal_kind == SignalKind::Ht && config.injection.auto_correct_parity { return Err(Self::err("auto_correct_parity is not supported for HT signal fields".into())); }
        Ok(())
    }
    pub fn save_config(&self, config: &InjectConfig, path: &Path) -> InjectResult<()> {
        let content = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::to_string_pretty(config).map_err(|e| Self::err(format!("Failed to serialize config to JSON: {}", e)))?,
            Some("toml") => toml::to_string_pretty(config).map_err(|e| Self::err(format!("Failed to serialize config to TOML: {}", e)))?,
            _ => return Err(Self::err("Unsupported config file format for saving".into())),
        };
        fs::write(path, content).map_err(|e| Self::err(format!("Failed to write config file: {}", e)))?;
        Ok(())
    }
    fn err(msg: String) -> InjectError { InjectError::Config(msg) }
}
impl Default for ConfigLoader { fn default() -> Self { Self::new() } }

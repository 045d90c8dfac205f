//! 应用配置管理
//!
//! 启动时从进程环境（以及本地 `.env` 文件）解析配置，解析结果注入到各组件中。

use std::net::SocketAddr;

use crate::error::AppError;

/// 上游 API 密钥（必填）
pub const ENV_API_KEY: &str = "OPENAI_API_KEY";
/// 上游 API 基础 URL
pub const ENV_BASE_URL: &str = "OPENAI_BASE_URL";
/// 模型名称
pub const ENV_MODEL: &str = "QGEN_MODEL";
/// 监听地址
pub const ENV_BIND_ADDR: &str = "QGEN_BIND_ADDR";
/// 允许的跨域来源
pub const ENV_ALLOWED_ORIGIN: &str = "QGEN_ALLOWED_ORIGIN";
/// 上游请求超时（秒）
pub const ENV_TIMEOUT_SECS: &str = "QGEN_TIMEOUT_SECS";

/// 应用配置结构体
#[derive(Clone)]
pub struct AppConfig {
    /// LLM API 密钥
    pub api_key: String,

    /// LLM API 基础 URL
    pub base_url: String,

    /// 模型名称
    pub model: String,

    /// HTTP 服务监听地址
    pub bind_addr: SocketAddr,

    /// CORS 允许的来源
    pub allowed_origin: String,

    /// 上游请求超时时间（秒）
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8000))
}

fn default_allowed_origin() -> String {
    "http://localhost:3000".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

impl AppConfig {
    /// 从进程环境加载配置
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 通过任意键值查找函数解析配置
    ///
    /// 空白值视为未设置。缺少 API 密钥属于致命错误。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = get(ENV_API_KEY).ok_or_else(|| {
            AppError::Config(format!(
                "Set {} in your environment or .env file",
                ENV_API_KEY
            ))
        })?;

        let bind_addr = match get(ENV_BIND_ADDR) {
            Some(raw) => raw.parse::<SocketAddr>().map_err(|e| {
                AppError::Config(format!("Invalid {} '{}': {}", ENV_BIND_ADDR, raw, e))
            })?,
            None => default_bind_addr(),
        };

        let timeout_secs = match get(ENV_TIMEOUT_SECS) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(AppError::Config(format!(
                        "Invalid {} '{}': expected a positive number of seconds",
                        ENV_TIMEOUT_SECS, raw
                    )))
                }
            },
            None => default_timeout_secs(),
        };

        Ok(Self {
            api_key,
            base_url: get(ENV_BASE_URL).unwrap_or_else(default_base_url),
            model: get(ENV_MODEL).unwrap_or_else(default_model),
            bind_addr,
            allowed_origin: get(ENV_ALLOWED_ORIGIN).unwrap_or_else(default_allowed_origin),
            timeout_secs,
        })
    }

    /// API 密钥脱敏，用于日志输出
    pub fn masked_api_key(&self) -> String {
        let key = &self.api_key;
        let chars: Vec<char> = key.chars().collect();
        if chars.len() <= 8 {
            "*".repeat(chars.len())
        } else {
            let head: String = chars[..4].iter().collect();
            let tail: String = chars[chars.len() - 4..].iter().collect();
            format!("{}...{}", head, tail)
        }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &self.masked_api_key())
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("bind_addr", &self.bind_addr)
            .field("allowed_origin", &self.allowed_origin)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

//! Server Configuration
//!
//! Command-line flags with environment fallbacks. Parsed once in `main`
//! and handed to constructors; nothing else reads the environment.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::llm::{ChatConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};

#[derive(Debug, Clone, Parser)]
#[command(name = "task-chat-server", version, about = "Task list and chat relay backend")]
pub struct Cli {
    /// Address to bind
    #[arg(long, env = "TASK_CHAT_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "TASK_CHAT_PORT", default_value_t = 3000)]
    pub port: u16,

    /// DashScope API key used by the chat relay
    #[arg(long, env = "DASHSCOPE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// OpenAI-compatible base URL of the chat provider
    #[arg(long, env = "DASHSCOPE_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Chat model identifier
    #[arg(long, env = "CHAT_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Sampling temperature forwarded to the provider
    #[arg(long, env = "CHAT_TEMPERATURE")]
    pub temperature: Option<f32>,

    /// Maximum completion tokens forwarded to the provider
    #[arg(long, env = "CHAT_MAX_TOKENS")]
    pub max_tokens: Option<u32>,

    /// Chat request timeout in seconds (unset = no timeout)
    #[arg(long, env = "CHAT_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Directory for rolling log files
    #[arg(long, env = "TASK_CHAT_LOG_DIR", default_value = "logs")]
    pub log_dir: PathBuf,

    /// Built frontend to serve for non-API paths
    #[arg(long, env = "TASK_CHAT_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Start with an empty task list instead of the mock tasks
    #[arg(long, env = "TASK_CHAT_NO_SEED")]
    pub no_seed: bool,
}

/// Settings for the HTTP listener and task store
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub static_dir: Option<PathBuf>,
    pub seed_tasks: bool,
}

impl Cli {
    pub fn server_config(&self) -> Result<ServerConfig, std::net::AddrParseError> {
        let addr = format!("{}:{}", self.host, self.port).parse()?;
        Ok(ServerConfig {
            addr,
            static_dir: self.static_dir.clone(),
            seed_tasks: !self.no_seed,
        })
    }

    pub fn chat_config(&self) -> ChatConfig {
        ChatConfig {
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            timeout_secs: self.timeout_secs,
        }
    }
}

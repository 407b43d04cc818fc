//! 配置：内置默认值 -> TOML 文件 -> 命令行参数，后者覆盖前者。

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use compound_core::DEFAULT_MAX_STATES;
use serde::Deserialize;
use thiserror::Error;

use crate::args::Args;

const DEFAULT_LOG_FILTER: &str = "compound_cli=info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub search: SearchConfig,
    pub log: LogConfig,
}

/// `[search]`：传给 `Matcher` 的参数。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    pub max_states: usize,
    pub dedup_states: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_states: DEFAULT_MAX_STATES,
            dedup_states: true,
        }
    }
}

/// `[log]`：`filter` 使用 `EnvFilter` 语法。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    pub filter: Option<String>,
}

impl CliConfig {
    /// 读取 `--config`（若有），再叠加命令行参数。
    pub fn resolve(args: &Args) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(path) => load_config(path)?,
            None => Self::default(),
        };
        config.apply_args(args);
        Ok(config)
    }

    pub fn apply_args(&mut self, args: &Args) {
        if let Some(limit) = args.max_states {
            self.search.max_states = limit;
        }
        if args.no_dedup {
            self.search.dedup_states = false;
        }
    }

    /// 日志过滤串（`RUST_LOG` 在初始化时另行优先）。
    pub fn log_filter(&self, verbose: u8) -> String {
        match verbose {
            0 => self
                .log
                .filter
                .clone()
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            1 => "compound_cli=debug,compound_dict=debug,compound_core=debug".to_string(),
            _ => "compound_cli=trace,compound_dict=trace,compound_core=trace".to_string(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<CliConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

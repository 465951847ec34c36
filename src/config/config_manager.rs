// ==========================================
// 教案时间编排引擎 - 配置管理器
// ==========================================
// 职责: 配置加载、校验、快照导出
// 存储: JSON 文件（显式路径或用户配置目录）
// ==========================================

use crate::config::allocation_profile::AllocationProfile;
use crate::config::balance_config::{BalanceConfig, GapThresholds, MicroAdjustPolicy};
use crate::config::config_reader::BalanceConfigReader;
use crate::config::error::ConfigError;
use crate::config::flexibility::FlexibilityTable;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 配置目录名
pub const CONFIG_DIR_NAME: &str = "lesson-balance";

/// 配置文件名
pub const CONFIG_FILE_NAME: &str = "config.json";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone)]
pub struct ConfigManager {
    /// 配置来源（None 表示内置默认值）
    source: Option<PathBuf>,
    config: BalanceConfig,
}

impl ConfigManager {
    /// 使用内置默认配置
    pub fn with_defaults() -> Self {
        Self {
            source: None,
            config: BalanceConfig::default(),
        }
    }

    /// 使用内存中的配置（会先校验）
    pub fn from_config(config: BalanceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            source: None,
            config,
        })
    }

    /// 从 JSON 文件加载配置
    ///
    /// # 参数
    /// - path: 配置文件路径
    ///
    /// # 返回
    /// - Ok(ConfigManager): 加载并校验通过
    /// - Err(ConfigError): 文件不可读、解析失败或校验失败
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: BalanceConfig =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;

        info!(path = %path.display(), "配置加载成功");

        Ok(Self {
            source: Some(path.to_path_buf()),
            config,
        })
    }

    /// 加载配置,未指定路径时回退到默认位置或内置默认值
    ///
    /// 显式路径必须存在；默认位置不存在时使用内置默认值
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match default_config_path() {
            Some(default_path) if default_path.is_file() => Self::load(&default_path),
            _ => {
                debug!("未找到配置文件,使用内置默认配置");
                Ok(Self::with_defaults())
            }
        }
    }

    /// 配置来源路径
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn config(&self) -> &BalanceConfig {
        &self.config
    }

    /// 获取配置快照（JSON格式）
    pub fn snapshot_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(&self.config)?)
    }
}

impl BalanceConfigReader for ConfigManager {
    fn gap_thresholds(&self) -> &GapThresholds {
        &self.config.gap
    }

    fn micro_adjust_policy(&self) -> &MicroAdjustPolicy {
        &self.config.micro_adjust
    }

    fn flexibility_table(&self) -> &FlexibilityTable {
        &self.config.flexibility
    }

    fn allocation_profile(&self) -> &AllocationProfile {
        &self.config.allocation
    }
}

/// 默认配置文件路径: <config_dir>/lesson-balance/config.json
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

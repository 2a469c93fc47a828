// ==========================================
// BOM 工时展开工具 - 配置管理器
// ==========================================
// 查找顺序: 显式路径 → 用户配置目录 → 内置默认值
// ==========================================

use crate::config::process_config::ProcessConfig;
use crate::importer::error::{ImportError, ImportResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 用户配置目录下的子目录名
pub const CONFIG_DIR_NAME: &str = "bom-processing";

/// 配置文件名
pub const CONFIG_FILE_NAME: &str = "config.json";

/// 配置来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    UserConfig(PathBuf),
    Defaults,
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: ProcessConfig,
    source: ConfigSource,
}

impl ConfigManager {
    /// 加载配置
    ///
    /// # 参数
    /// - explicit: 命令行指定的配置文件（必须存在）
    ///
    /// # 返回
    /// - Ok(ConfigManager): 已校验的配置
    /// - Err: 文件读取失败 / JSON 格式错误 / 配置值非法
    pub fn load(explicit: Option<&Path>) -> ImportResult<Self> {
        let manager = match explicit {
            Some(path) => Self {
                config: Self::read_file(path)?,
                source: ConfigSource::Explicit(path.to_path_buf()),
            },
            None => match Self::default_config_path().filter(|p| p.is_file()) {
                Some(path) => Self {
                    config: Self::read_file(&path)?,
                    source: ConfigSource::UserConfig(path),
                },
                None => Self::from_config(ProcessConfig::default()),
            },
        };

        manager.config.validate()?;
        info!(source = ?manager.source, "配置加载完成");
        Ok(manager)
    }

    /// 从已有配置创建（不读文件）
    pub fn from_config(config: ProcessConfig) -> Self {
        Self {
            config,
            source: ConfigSource::Defaults,
        }
    }

    /// 用户配置文件路径: <config_dir>/bom-processing/config.json
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    fn read_file(path: &Path) -> ImportResult<ProcessConfig> {
        debug!(path = %path.display(), "读取配置文件");
        let raw = fs::read_to_string(path).map_err(|e| ImportError::ConfigReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&raw).map_err(|e| ImportError::ConfigReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    pub fn config(&self) -> &ProcessConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ProcessConfig {
        &mut self.config
    }

    pub fn into_config(self) -> ProcessConfig {
        self.config
    }

    pub fn source(&self) -> &ConfigSource {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"part_key_column": "Part", "output_preview_rows": 5}}"#).unwrap();

        let manager = ConfigManager::load(Some(file.path())).unwrap();
        assert_eq!(manager.config().part_key_column, "Part");
        assert_eq!(manager.config().output_preview_rows, 5);
        assert_eq!(manager.config().input_preview_rows, 10);
        assert_eq!(
            manager.source(),
            &ConfigSource::Explicit(file.path().to_path_buf())
        );
    }

    #[test]
    fn test_load_explicit_missing_file_fails() {
        let result = ConfigManager::load(Some(Path::new("/definitely/not/here.json")));
        assert!(matches!(result, Err(ImportError::ConfigReadError { .. })));
    }

    #[test]
    fn test_load_invalid_json_fails() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let result = ConfigManager::load(Some(file.path()));
        assert!(matches!(result, Err(ImportError::ConfigReadError { .. })));
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"sheet_name": ""}}"#).unwrap();

        let result = ConfigManager::load(Some(file.path()));
        assert!(matches!(result, Err(ImportError::ConfigValueError { .. })));
    }

    #[test]
    fn test_from_config_marks_defaults() {
        let manager = ConfigManager::from_config(ProcessConfig::default());
        assert_eq!(manager.source(), &ConfigSource::Defaults);
        assert_eq!(manager.config().sheet_name, "Processed_BOM");
    }
}

// ==========================================
// BOM 工时展开工具 - 配置层
// ==========================================
// 职责: 处理配置加载与校验
// 存储: JSON 文件（可选）
// ==========================================

pub mod config_manager;
pub mod process_config;

// 重导出核心配置类型
pub use config_manager::{ConfigManager, ConfigSource};
pub use process_config::{InputColumns, ProcessConfig, DEFAULT_REFERENCE_PATH};

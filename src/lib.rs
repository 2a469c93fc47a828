// ==========================================
// BOM 工时展开工具 - 核心库
// ==========================================
// 职责: 上传 BOM / 销售订单 → 按工作中心展开工时 → 导出 Excel
// 流程: 解析 → 展开（× 数量）→ 清洗 → 导出
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 订单 / 参考工时 / 输出行
pub mod domain;

// 导入层 - 外部文件
pub mod importer;

// 引擎层 - 展开与清洗
pub mod engine;

// 导出层 - Excel / 预览
pub mod export;

// 配置层
pub mod config;

// API 层 - 业务接口
pub mod api;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

pub use api::{render_failure, ApiError, ProcessApi, ProcessResponse};
pub use config::{ConfigManager, ProcessConfig};
pub use domain::{OrderRow, OutputRow, ReferenceTable, WorkcenterMap, OUTPUT_HEADERS};
pub use engine::{transform, BomProcessor, Cleaner, Expander, ProcessStats};

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "BOM Processing Tool";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}

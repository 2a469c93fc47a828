// ==========================================
// BOM 工时展开工具 - API层
// ==========================================
// 职责: 对外业务接口（上传处理 / 预览 / 导出）
// ==========================================

pub mod error;
pub mod process_api;

pub use error::{render_failure, ApiError, ApiResult};
pub use process_api::{ProcessApi, ProcessResponse};

// ==========================================
// BOM 工时展开工具 - API层错误类型
// ==========================================
// 职责: 汇总导入/导出错误,统一渲染为用户可见的失败信息
// ==========================================

use crate::export::ExportError;
use crate::i18n::t_with_args;
use crate::importer::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// 渲染失败信息（单条,包含完整原因链）
pub fn render_failure(err: &anyhow::Error) -> String {
    t_with_args("process.failed", &[("error", &format!("{:#}", err))])
}

pub type ApiResult<T> = Result<T, ApiError>;

// ==========================================
// BOM 工时展开工具 - 导出模块错误类型
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to build workbook: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    #[error("failed to write file {path}: {message}")]
    WriteError { path: String, message: String },

    #[error("failed to serialize run report: {0}")]
    ReportError(#[from] serde_json::Error),
}

pub type ExportResult<T> = Result<T, ExportError>;

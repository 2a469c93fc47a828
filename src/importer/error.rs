// ==========================================
// BOM 工时展开工具 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("unsupported file format: {0} (expected .xlsx/.xls for orders, .csv for the reference table)")]
    UnsupportedFormat(String),

    #[error("failed to read file: {0}")]
    FileReadError(String),

    #[error("failed to parse Excel file: {0}")]
    ExcelParseError(String),

    #[error("failed to parse CSV file: {0}")]
    CsvParseError(String),

    // ===== 数据映射错误 =====
    #[error("required column '{column}' not found in {source_name}")]
    MissingColumn { column: String, source_name: String },

    #[error("row {row}: required field '{field}' is empty or missing")]
    MissingField { row: usize, field: String },

    #[error("row {row}: cannot convert field '{field}': {message}")]
    TypeConversionError {
        row: usize,
        field: String,
        message: String,
    },

    #[error("row {row}: field '{field}' is not a valid date: {value}")]
    DateFormatError {
        row: usize,
        field: String,
        value: String,
    },

    // ===== 配置错误 =====
    #[error("failed to read config {path}: {message}")]
    ConfigReadError { path: String, message: String },

    #[error("invalid config value (key: {key}, value: {value}): {message}")]
    ConfigValueError {
        key: String,
        value: String,
        message: String,
    },
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

// 实现 From<calamine::Error>
impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;

// ==========================================
// BOM 工时展开工具 - 处理配置
// ==========================================
// 格式: JSON,所有字段均有默认值（缺省即采用默认）
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 默认参考工时表路径
pub const DEFAULT_REFERENCE_PATH: &str = "Operational_Time_Totals_By_Top_Material_SML_Updated.csv";

// ==========================================
// InputColumns - 上传文件的列位置（0-based）
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputColumns {
    pub order_id: usize,    // A 列
    pub ship_date: usize,   // C 列
    pub part_number: usize, // D 列
    pub quantity: usize,    // F 列
}

impl Default for InputColumns {
    fn default() -> Self {
        Self {
            order_id: 0,
            ship_date: 2,
            part_number: 3,
            quantity: 5,
        }
    }
}

// ==========================================
// ProcessConfig - 处理配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessConfig {
    /// 参考工时表（CSV）
    pub reference_path: PathBuf,
    /// 参考表中零件号列名
    pub part_key_column: String,
    /// 上传文件列位置
    pub input_columns: InputColumns,
    /// 导出 sheet 名
    pub sheet_name: String,
    /// 导出默认文件名
    pub output_file_name: String,
    /// 上传数据预览行数
    pub input_preview_rows: usize,
    /// 处理结果预览行数
    pub output_preview_rows: usize,
    /// 导出列宽补白
    pub column_padding: usize,
    /// 界面语言（"en" / "zh-CN"）
    pub locale: String,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            reference_path: PathBuf::from(DEFAULT_REFERENCE_PATH),
            part_key_column: "Top_Material".to_string(),
            input_columns: InputColumns::default(),
            sheet_name: "Processed_BOM".to_string(),
            output_file_name: "processed_bom.xlsx".to_string(),
            input_preview_rows: 10,
            output_preview_rows: 20,
            column_padding: 2,
            locale: "en".to_string(),
        }
    }
}

impl ProcessConfig {
    /// 校验配置值
    pub fn validate(&self) -> ImportResult<()> {
        if self.part_key_column.trim().is_empty() {
            return Err(config_value_error(
                "part_key_column",
                &self.part_key_column,
                "must not be empty",
            ));
        }

        // Excel sheet 名约束: 1..=31 字符,不含 []:*?/\
        let name = &self.sheet_name;
        if name.is_empty() || name.chars().count() > 31 {
            return Err(config_value_error(
                "sheet_name",
                name,
                "must be 1 to 31 characters long",
            ));
        }
        if name.chars().any(|c| matches!(c, '[' | ']' | ':' | '*' | '?' | '/' | '\\')) {
            return Err(config_value_error(
                "sheet_name",
                name,
                "must not contain any of []:*?/\\",
            ));
        }

        if !matches!(self.locale.as_str(), "en" | "zh-CN") {
            return Err(config_value_error(
                "locale",
                &self.locale,
                "supported locales are en and zh-CN",
            ));
        }
        Ok(())
    }
}

fn config_value_error(key: &str, value: &str, message: &str) -> ImportError {
    ImportError::ConfigValueError {
        key: key.to_string(),
        value: value.to_string(),
        message: message.to_string(),
    }
}

// ==========================================
// BOM 工时展开工具 - 导入 Trait
// ==========================================
// 职责: 定义导入管道各阶段接口（不包含实现）
// 管道: 文件解析 → 单元格清洗 → 字段映射
// ==========================================

use crate::domain::OrderRow;
use crate::importer::error::ImportResult;
use crate::importer::file_parser::{RawRow, RawTable};
use chrono::NaiveDate;
use std::path::Path;

// ==========================================
// OrderImporter Trait
// ==========================================
// 用途: 订单导入主接口
// 实现者: OrderImporterImpl
pub trait OrderImporter: Send + Sync {
    /// 从上传文件导入订单行
    ///
    /// # 返回
    /// - Ok(OrderImport): 原始表格（预览用）+ 映射后的订单行
    /// - Err: 任一行映射失败即整体失败,不返回部分结果
    fn import_orders(&self, file_path: &Path) -> ImportResult<OrderImport>;
}

/// 订单导入结果
#[derive(Debug, Clone)]
pub struct OrderImport {
    pub raw: RawTable,
    pub orders: Vec<OrderRow>,
}

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口（所有单元格按文本读取）
// 实现者: ExcelParser, CsvParser
pub trait FileParser: Send + Sync {
    fn parse_to_raw_table(&self, file_path: &Path) -> ImportResult<RawTable>;
}

// ==========================================
// FieldMapper Trait
// ==========================================
// 用途: 按列位置把原始行映射为 OrderRow
// 实现者: FieldMapper
pub trait FieldMapper: Send + Sync {
    fn map_to_order_row(&self, row: &RawRow) -> ImportResult<OrderRow>;
}

// ==========================================
// DataCleaner Trait
// ==========================================
// 用途: 单元格级清洗与类型转换
// 实现者: DataCleaner
pub trait DataCleaner: Send + Sync {
    /// TRIM
    fn clean_text(&self, value: &str) -> String;

    /// 空白字符串 → None
    fn normalize_null(&self, value: Option<String>) -> Option<String>;

    /// 日期解析（多格式兼容）
    fn parse_date(&self, value: &str) -> Option<NaiveDate>;

    /// 严格数值解析: 必须是有限小数
    fn parse_decimal(&self, value: &str) -> Option<f64>;

    /// 宽松工时解析: 空值 / 非数值 / 非有限值 一律视为缺失
    fn parse_time_value(&self, value: &str) -> Option<f64> {
        self.parse_decimal(value)
    }
}

// ==========================================
// BOM 工时展开工具 - 文件解析器实现
// ==========================================
// 阶段 0: 文件读取与解析（所有单元格按文本读取）
// 支持: Excel (.xlsx/.xls) / CSV (.csv)
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::FileParser;
use calamine::{open_workbook_auto, Data, Reader};
use chrono::NaiveTime;
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

// ==========================================
// RawTable - 原始表格
// ==========================================
// 保留表头与列位置,供按位置映射和预览使用
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub row_number: usize, // 源文件行号（1-based，表头为第 1 行）
    pub cells: Vec<String>,
}

impl RawRow {
    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }

    fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }
}

impl RawTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 表头下标（精确匹配,已 TRIM）
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }
}

/// 检查文件存在与扩展名（大小写不敏感）
fn check_file(path: &Path, allowed: &[&str]) -> ImportResult<()> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    if !allowed.contains(&ext.as_str()) {
        return Err(ImportError::UnsupportedFormat(ext));
    }
    Ok(())
}

fn clean_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_string()
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_to_raw_table(&self, file_path: &Path) -> ImportResult<RawTable> {
        check_file(file_path, &["csv"])?;

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        let headers: Vec<String> = reader.headers()?.iter().map(clean_header).collect();

        let mut rows = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            let record = result?;
            let row = RawRow {
                row_number: row_idx + 2,
                cells: record.iter().map(|v| v.trim().to_string()).collect(),
            };

            // 跳过完全空白的行
            if row.is_blank() {
                continue;
            }
            rows.push(row);
        }

        Ok(RawTable { headers, rows })
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_to_raw_table(&self, file_path: &Path) -> ImportResult<RawTable> {
        check_file(file_path, &["xlsx", "xls"])?;

        let mut workbook = open_workbook_auto(file_path)?;

        // 读取第一个 sheet
        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| ImportError::ExcelParseError("workbook has no worksheets".to_string()))?;
        let range = workbook.worksheet_range(&sheet_name)?;

        // 数据区不一定从 A1 开始,补齐左侧空列以保证列位置不偏移
        let (row_offset, col_offset) = range
            .start()
            .map(|(row, col)| (row as usize, col as usize))
            .unwrap_or((0, 0));

        let mut rows_iter = range.rows();
        let header_row = rows_iter
            .next()
            .ok_or_else(|| ImportError::ExcelParseError("worksheet is empty".to_string()))?;

        let pad = || std::iter::repeat(String::new()).take(col_offset);
        let headers: Vec<String> = pad()
            .chain(header_row.iter().map(|c| clean_header(&cell_to_text(c))))
            .collect();

        let mut rows = Vec::new();
        for (row_idx, data_row) in rows_iter.enumerate() {
            let row = RawRow {
                row_number: row_offset + row_idx + 2,
                cells: pad().chain(data_row.iter().map(cell_to_text)).collect(),
            };

            // 跳过完全空白的行
            if row.is_blank() {
                continue;
            }
            rows.push(row);
        }

        Ok(RawTable { headers, rows })
    }
}

/// Excel 单元格 → 文本
///
/// 整数值的浮点数不带 ".0"；日期单元格渲染为 ISO 文本（按工作簿的 1900 / 1904 日期系统换算）
pub fn cell_to_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => format_float(*f),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) if dt.is_duration() => dt
            .as_duration()
            .map(|d| format_float(d.num_milliseconds() as f64 / 86_400_000.0))
            .unwrap_or_else(|| format_float(dt.as_f64())),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(datetime) if datetime.time() == NaiveTime::MIN => {
                datetime.format("%Y-%m-%d").to_string()
            }
            Some(datetime) => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => format_float(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.trim().to_string(),
    }
}

fn format_float(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

// ==========================================
// BOM 工时展开工具 - Excel 导出
// ==========================================
// 单 sheet；表头固定；列宽 = max(内容长度, 表头长度) + 补白
// ==========================================

use crate::domain::{OutputRow, OUTPUT_HEADERS};
use crate::export::error::{ExportError, ExportResult};
use chrono::NaiveDate;
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;
use tracing::{debug, info};

pub struct ExcelWriter {
    sheet_name: String,
    column_padding: usize,
}

impl ExcelWriter {
    pub fn new(sheet_name: impl Into<String>, column_padding: usize) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            column_padding,
        }
    }

    /// 写出到文件
    pub fn write_to_path(&self, rows: &[OutputRow], path: &Path) -> ExportResult<()> {
        let mut workbook = self.build_workbook(rows)?;
        workbook.save(path).map_err(|e| ExportError::WriteError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        info!(path = %path.display(), rows = rows.len(), "Excel 导出完成");
        Ok(())
    }

    /// 写出到内存（下载用）
    pub fn to_bytes(&self, rows: &[OutputRow]) -> ExportResult<Vec<u8>> {
        let mut workbook = self.build_workbook(rows)?;
        Ok(workbook.save_to_buffer()?)
    }

    fn build_workbook(&self, rows: &[OutputRow]) -> ExportResult<Workbook> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();
        let date_format = Format::new().set_num_format("yyyy-mm-dd");

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&self.sheet_name)?;

        for (col, header) in OUTPUT_HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }

        for (idx, row) in rows.iter().enumerate() {
            let r = (idx + 1) as u32;
            worksheet.write_string(r, 0, &row.order)?;
            worksheet.write_string(r, 1, &row.sku)?;
            worksheet.write_number(r, 2, row.qty)?;
            worksheet.write_number_with_format(
                r,
                3,
                excel_serial(row.planned_ship_date),
                &date_format,
            )?;
            worksheet.write_string(r, 4, &row.asset)?;
            worksheet.write_number(r, 5, row.total_setup_time)?;
            worksheet.write_number(r, 6, row.total_machine_time)?;
            worksheet.write_number(r, 7, row.total_labour_time)?;
        }

        for (col, width) in column_widths(rows, self.column_padding).into_iter().enumerate() {
            worksheet.set_column_width(col as u16, width as f64)?;
        }

        debug!(sheet = %self.sheet_name, rows = rows.len(), "工作簿构建完成");
        Ok(workbook)
    }
}

/// 各列宽度（字符数）
pub fn column_widths(rows: &[OutputRow], padding: usize) -> [usize; 8] {
    let mut widths = OUTPUT_HEADERS.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.to_cells().iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths.map(|w| w + padding)
}

/// NaiveDate → Excel 序列日期（1900 日期系统）
fn excel_serial(date: NaiveDate) -> f64 {
    NaiveDate::from_ymd_opt(1899, 12, 30)
        .map(|epoch| (date - epoch).num_days() as f64)
        .unwrap_or_default()
}

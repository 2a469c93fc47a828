// ==========================================
// BOM 工时展开工具 - 文本预览
// ==========================================

use crate::domain::{OutputRow, OUTPUT_HEADERS};
use crate::importer::RawTable;

/// 上传数据预览（前 limit 行）
pub fn preview_raw(table: &RawTable, limit: usize) -> String {
    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .take(limit)
        .map(|row| row.cells.clone())
        .collect();
    render_table(&table.headers, &rows)
}

/// 处理结果预览（前 limit 行）
pub fn preview_output(rows: &[OutputRow], limit: usize) -> String {
    let headers: Vec<String> = OUTPUT_HEADERS.iter().map(|h| h.to_string()).collect();
    let cells: Vec<Vec<String>> = rows
        .iter()
        .take(limit)
        .map(|row| row.to_cells().to_vec())
        .collect();
    render_table(&headers, &cells)
}

/// 等宽文本表格（列间两个空格）
pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let columns = rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(headers.len()))
        .max()
        .unwrap_or(0);

    let mut widths = vec![0usize; columns];
    for line in std::iter::once(headers).chain(rows.iter().map(Vec::as_slice)) {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |line: &[String]| -> String {
        widths
            .iter()
            .enumerate()
            .map(|(idx, width)| {
                let cell = line.get(idx).map(String::as_str).unwrap_or("");
                format!("{:<width$}", cell, width = *width)
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = Vec::with_capacity(rows.len() + 2);
    out.push(format_line(headers));
    out.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    out.extend(rows.iter().map(|row| format_line(row.as_slice())));
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::RawRow;
    use chrono::NaiveDate;

    #[test]
    fn test_render_table_aligns_columns() {
        let headers = vec!["A".to_string(), "Long".to_string()];
        let rows = vec![vec!["xyz".to_string(), "1".to_string()]];

        let text = render_table(&headers, &rows);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "A    Long");
        assert_eq!(lines[1], "---  ----");
        assert_eq!(lines[2], "xyz  1");
    }

    #[test]
    fn test_preview_raw_limits_rows() {
        let table = RawTable {
            headers: vec!["Order".to_string()],
            rows: (0..15)
                .map(|i| RawRow {
                    row_number: i + 2,
                    cells: vec![i.to_string()],
                })
                .collect(),
        };

        let text = preview_raw(&table, 10);
        assert_eq!(text.lines().count(), 12);
    }

    #[test]
    fn test_preview_output_has_fixed_headers() {
        let row = OutputRow {
            order: "1001".to_string(),
            sku: "A1".to_string(),
            qty: 5.0,
            planned_ship_date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            asset: "61".to_string(),
            total_setup_time: 10.0,
            total_machine_time: 0.0,
            total_labour_time: 0.0,
        };

        let text = preview_output(&[row], 20);
        assert!(text.starts_with("Order"));
        assert!(text.contains("Total Labour Time"));
        assert!(text.contains("2026-02-01"));
    }
}

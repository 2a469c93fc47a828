// ==========================================
// 集成测试辅助 - 夹具文件生成 / 结果回读
// ==========================================

#![allow(dead_code)]

use bom_processing::config::ProcessConfig;
use calamine::{open_workbook, Data, Reader, Xlsx};
use rust_xlsxwriter::{Format, Workbook};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// 上传文件表头（A..F）
pub const INPUT_HEADERS: [&str; 6] = [
    "Sales Number",
    "Customer",
    "Ship Date",
    "Part Number",
    "Description",
    "Qty",
];

/// 上传单元格
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Date(u16, u8, u8),
    Empty,
}

/// 测试工作目录（参考表 + 上传文件 + 输出）
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("创建临时目录失败"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// 写参考工时表 CSV
    pub fn write_reference(&self, content: &str) -> PathBuf {
        let path = self.path("reference.csv");
        fs::write(&path, content).expect("写参考表失败");
        path
    }

    /// 写上传文件（全部文本单元格）
    pub fn write_orders(&self, rows: &[[&str; 6]]) -> PathBuf {
        let cells: Vec<Vec<Cell>> = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|v| if v.is_empty() { Cell::Empty } else { Cell::Text(*v) })
                    .collect()
            })
            .collect();
        self.write_order_cells("orders.xlsx", &cells)
    }

    /// 写上传文件（指定单元格类型）
    pub fn write_order_cells(&self, name: &str, rows: &[Vec<Cell>]) -> PathBuf {
        let path = self.path(name);
        let mut workbook = Workbook::new();
        let date_format = Format::new().set_num_format("yyyy-mm-dd");
        let worksheet = workbook.add_worksheet();

        for (col, header) in INPUT_HEADERS.iter().enumerate() {
            worksheet.write_string(0, col as u16, *header).unwrap();
        }
        for (idx, row) in rows.iter().enumerate() {
            let r = (idx + 1) as u32;
            for (col, cell) in row.iter().enumerate() {
                let c = col as u16;
                match cell {
                    Cell::Text(v) => {
                        worksheet.write_string(r, c, *v).unwrap();
                    }
                    Cell::Number(v) => {
                        worksheet.write_number(r, c, *v).unwrap();
                    }
                    Cell::Date(y, m, d) => {
                        worksheet
                            .write_number_with_format(r, c, excel_serial(*y, *m, *d), &date_format)
                            .unwrap();
                    }
                    Cell::Empty => {}
                }
            }
        }

        workbook.save(&path).expect("写上传文件失败");
        path
    }

    /// 指向本工作目录参考表的配置
    pub fn config(&self) -> ProcessConfig {
        ProcessConfig {
            reference_path: self.path("reference.csv"),
            ..ProcessConfig::default()
        }
    }
}

fn excel_serial(y: u16, m: u8, d: u8) -> f64 {
    let date = chrono::NaiveDate::from_ymd_opt(y as i32, m as u32, d as u32).unwrap();
    let epoch = chrono::NaiveDate::from_ymd_opt(1899, 12, 30).unwrap();
    (date - epoch).num_days() as f64
}

/// 回读导出文件: (sheet 名列表, 所有行)
pub fn read_output(path: &Path) -> (Vec<String>, Vec<Vec<Data>>) {
    let mut workbook: Xlsx<_> = open_workbook(path).expect("打开导出文件失败");
    let sheet_names = workbook.sheet_names().to_vec();
    let range = workbook
        .worksheet_range(&sheet_names[0])
        .expect("读取 sheet 失败");
    let rows = range.rows().map(|r| r.to_vec()).collect();
    (sheet_names, rows)
}

pub fn as_text(cell: &Data) -> String {
    bom_processing::importer::file_parser::cell_to_text(cell)
}

pub fn as_number(cell: &Data) -> f64 {
    match cell {
        Data::Float(f) => *f,
        Data::Int(i) => *i as f64,
        other => panic!("期望数值单元格, 实际: {:?}", other),
    }
}

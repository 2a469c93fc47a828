// ==========================================
// BOM 工时展开工具 - 参考工时表加载器
// ==========================================
// 职责: 工作中心识别（列名模式匹配）+ 参考记录类型化
// 红线: 每次运行重新读取,不做缓存
// ==========================================

use crate::domain::{ReferenceRecord, ReferenceTable, TimeKind, WorkcenterMap, WorkcenterTimes};
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::{CsvParser, RawTable};
use crate::importer::importer_trait::{DataCleaner as _, FileParser};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, info, instrument, warn};

/// 工作中心列名: "<数字> <Setup|Machine|Labour>"（前缀匹配）
fn workcenter_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\d+)\s+(Setup|Machine|Labour)").expect("workcenter pattern is valid")
    })
}

/// 从表头识别工作中心
///
/// 顺序按首次出现的列；同一 (工作中心, 工时类型) 重复时后者覆盖前者
pub fn discover_workcenters(headers: &[String]) -> WorkcenterMap {
    let mut map = WorkcenterMap::new();

    for (column, header) in headers.iter().enumerate() {
        let Some(caps) = workcenter_pattern().captures(header) else {
            continue;
        };
        let Some(kind) = TimeKind::parse(&caps[2]) else {
            continue;
        };

        if let Some(previous) = map.insert(&caps[1], kind, column) {
            warn!(
                workcenter = &caps[1],
                kind = %kind,
                previous_column = previous,
                column,
                "工作中心列重复,使用后出现的列"
            );
        }
    }

    map
}

// ==========================================
// ReferenceLoader - 参考工时表加载器
// ==========================================
pub struct ReferenceLoader {
    part_key_column: String,
    parser: Box<dyn FileParser>,
    cleaner: DataCleaner,
}

impl ReferenceLoader {
    pub fn new(part_key_column: impl Into<String>) -> Self {
        Self::with_parser(part_key_column, Box::new(CsvParser))
    }

    pub fn with_parser(part_key_column: impl Into<String>, parser: Box<dyn FileParser>) -> Self {
        Self {
            part_key_column: part_key_column.into(),
            parser,
            cleaner: DataCleaner,
        }
    }

    /// 读取并类型化参考工时表
    #[instrument(skip(self, path), fields(path = %path.display()))]
    pub fn load(&self, path: &Path) -> ImportResult<ReferenceTable> {
        let raw = self.parser.parse_to_raw_table(path)?;
        let table = self.build_table(&raw, &path.display().to_string())?;

        info!(
            parts = table.len(),
            workcenters = table.workcenters().len(),
            duplicate_parts = table.duplicate_parts(),
            "参考工时表加载完成"
        );
        Ok(table)
    }

    /// 原始表格 → ReferenceTable
    pub fn build_table(&self, raw: &RawTable, source_name: &str) -> ImportResult<ReferenceTable> {
        let key_index =
            raw.column_index(&self.part_key_column)
                .ok_or_else(|| ImportError::MissingColumn {
                    column: self.part_key_column.clone(),
                    source_name: source_name.to_string(),
                })?;

        let workcenters = discover_workcenters(&raw.headers);
        debug!(workcenters = ?workcenters.ids(), "工作中心识别完成");

        let mut table = ReferenceTable::new(workcenters.clone());
        let mut negative_values = 0usize;

        for row in &raw.rows {
            let part_number = self.cleaner.clean_text(row.cell(key_index).unwrap_or(""));
            if part_number.is_empty() {
                warn!(row = row.row_number, "参考表零件号为空,跳过");
                continue;
            }

            let times: Vec<WorkcenterTimes> = workcenters
                .iter()
                .map(|(_, columns)| {
                    let mut times = WorkcenterTimes::default();
                    for kind in TimeKind::ALL {
                        let value = columns
                            .get(kind)
                            .and_then(|col| row.cell(col))
                            .and_then(|v| self.cleaner.parse_time_value(v));
                        times.set(kind, value);
                    }
                    times
                })
                .collect();

            negative_values += times
                .iter()
                .flat_map(|t| TimeKind::ALL.map(|kind| t.get(kind)))
                .filter(|v| matches!(v, Some(x) if *x < 0.0))
                .count();

            let record = ReferenceRecord {
                part_number,
                times,
                row_number: row.row_number,
            };
            let part = record.part_number.clone();
            if !table.insert(record) {
                warn!(part = %part, row = row.row_number, "零件号重复,沿用首次出现的记录");
            }
        }

        if negative_values > 0 {
            warn!(negative_values, "参考表存在负工时");
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::file_parser::RawRow;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn table(names: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable {
            headers: headers(names),
            rows: rows
                .iter()
                .enumerate()
                .map(|(idx, cells)| RawRow {
                    row_number: idx + 2,
                    cells: cells.iter().map(|c| c.to_string()).collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_discover_workcenters_in_column_order() {
        let map = discover_workcenters(&headers(&[
            "Top_Material",
            "62 Labour",
            "61 Setup",
            "Description",
            "61 Machine",
            "62 Setup Time",
            "Setup 63",
        ]));

        assert_eq!(map.ids(), vec!["62", "61"]);
        let wc62 = map.get("62").unwrap();
        assert_eq!(wc62.labour, Some(1));
        assert_eq!(wc62.setup, Some(5));
        assert_eq!(wc62.machine, None);
        let wc61 = map.get("61").unwrap();
        assert_eq!(wc61.setup, Some(2));
        assert_eq!(wc61.machine, Some(4));
    }

    #[test]
    fn test_discover_workcenters_case_sensitive() {
        let map = discover_workcenters(&headers(&["61 setup", "61  Machine"]));
        assert_eq!(map.ids(), vec!["61"]);
        assert_eq!(map.get("61").unwrap().machine, Some(1));
        assert_eq!(map.get("61").unwrap().setup, None);
    }

    #[test]
    fn test_build_table_types_values() {
        let raw = table(
            &["Top_Material", "61 Setup", "61 Machine", "62 Labour"],
            &[&["A1", "2", "0", "3"], &["B2", "N/A", "4", ""]],
        );

        let table = ReferenceLoader::new("Top_Material")
            .build_table(&raw, "ref.csv")
            .unwrap();

        assert_eq!(table.len(), 2);
        let a1 = table.lookup("A1").unwrap();
        assert_eq!(a1.times[0].setup, Some(2.0));
        assert_eq!(a1.times[0].machine, Some(0.0));
        assert_eq!(a1.times[1].labour, Some(3.0));

        let b2 = table.lookup("B2").unwrap();
        assert_eq!(b2.times[0].setup, None);
        assert_eq!(b2.times[0].machine, Some(4.0));
        assert_eq!(b2.times[1].labour, None);
    }

    #[test]
    fn test_build_table_first_duplicate_wins() {
        let raw = table(
            &["Top_Material", "61 Setup"],
            &[&["A1", "2"], &["A1", "7"], &["", "9"]],
        );

        let table = ReferenceLoader::new("Top_Material")
            .build_table(&raw, "ref.csv")
            .unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.duplicate_parts(), 1);
        assert_eq!(table.lookup("A1").unwrap().times[0].setup, Some(2.0));
    }

    #[test]
    fn test_build_table_missing_key_column() {
        let raw = table(&["Part", "61 Setup"], &[&["A1", "2"]]);

        let result = ReferenceLoader::new("Top_Material").build_table(&raw, "ref.csv");
        assert!(matches!(
            result,
            Err(ImportError::MissingColumn { column, .. }) if column == "Top_Material"
        ));
    }

    #[test]
    fn test_short_reference_row_reads_missing() {
        let raw = table(&["Top_Material", "61 Setup", "61 Machine"], &[&["A1", "2"]]);

        let table = ReferenceLoader::new("Top_Material")
            .build_table(&raw, "ref.csv")
            .unwrap();
        assert_eq!(table.lookup("A1").unwrap().times[0].machine, None);
    }
}

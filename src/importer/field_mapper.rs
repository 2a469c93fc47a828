// ==========================================
// BOM 工时展开工具 - 字段映射器实现
// ==========================================
// 职责: 原始行（按列位置）→ OrderRow + 类型转换
// 列位置: A=订单号 C=发货日期 D=零件号 F=数量（可配置）
// ==========================================

use crate::config::InputColumns;
use crate::domain::OrderRow;
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::RawRow;
use crate::importer::importer_trait::{DataCleaner as _, FieldMapper as FieldMapperTrait};

pub struct FieldMapper {
    columns: InputColumns,
    cleaner: DataCleaner,
}

impl FieldMapper {
    pub fn new(columns: InputColumns) -> Self {
        Self {
            columns,
            cleaner: DataCleaner,
        }
    }

    /// 可选文本字段（缺列或空白 → 空串）
    fn get_string(&self, row: &RawRow, index: usize) -> String {
        row.cell(index)
            .map(|v| self.cleaner.clean_text(v))
            .unwrap_or_default()
    }

    /// 必填文本字段
    fn get_required(&self, row: &RawRow, index: usize, field: &str) -> ImportResult<String> {
        self.cleaner
            .normalize_null(row.cell(index).map(str::to_string))
            .ok_or_else(|| ImportError::MissingField {
                row: row.row_number,
                field: field.to_string(),
            })
    }
}

impl Default for FieldMapper {
    fn default() -> Self {
        Self::new(InputColumns::default())
    }
}

impl FieldMapperTrait for FieldMapper {
    fn map_to_order_row(&self, row: &RawRow) -> ImportResult<OrderRow> {
        let raw_date = self.get_required(row, self.columns.ship_date, "ship_date")?;
        let ship_date =
            self.cleaner
                .parse_date(&raw_date)
                .ok_or_else(|| ImportError::DateFormatError {
                    row: row.row_number,
                    field: "ship_date".to_string(),
                    value: raw_date.clone(),
                })?;

        let raw_qty = self.get_required(row, self.columns.quantity, "quantity")?;
        let quantity =
            self.cleaner
                .parse_decimal(&raw_qty)
                .ok_or_else(|| ImportError::TypeConversionError {
                    row: row.row_number,
                    field: "quantity".to_string(),
                    message: format!("not a decimal number: {}", raw_qty),
                })?;

        Ok(OrderRow {
            order_id: self.get_string(row, self.columns.order_id),
            ship_date,
            // 空零件号不报错: 在参考表中查不到,整行静默跳过
            part_number: self.get_string(row, self.columns.part_number),
            quantity,
            row_number: row.row_number,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn raw(cells: &[&str]) -> RawRow {
        RawRow {
            row_number: 2,
            cells: cells.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn test_map_positional_columns() {
        let mapper = FieldMapper::default();
        let row = raw(&["1001", "Acme", "2026-02-01", "A1", "Widget", "5"]);

        let order = mapper.map_to_order_row(&row).unwrap();
        assert_eq!(order.order_id, "1001");
        assert_eq!(order.ship_date, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
        assert_eq!(order.part_number, "A1");
        assert_eq!(order.quantity, 5.0);
        assert_eq!(order.row_number, 2);
    }

    #[test]
    fn test_bad_date_is_error() {
        let mapper = FieldMapper::default();
        let row = raw(&["1001", "", "someday", "A1", "", "5"]);

        let err = mapper.map_to_order_row(&row).unwrap_err();
        assert!(matches!(err, ImportError::DateFormatError { row: 2, .. }));
    }

    #[test]
    fn test_non_numeric_quantity_is_error() {
        let mapper = FieldMapper::default();
        let row = raw(&["1001", "", "2026-02-01", "A1", "", "five"]);

        let err = mapper.map_to_order_row(&row).unwrap_err();
        assert!(matches!(err, ImportError::TypeConversionError { field, .. } if field == "quantity"));
    }

    #[test]
    fn test_short_row_is_missing_field() {
        let mapper = FieldMapper::default();
        let row = raw(&["1001", "", "2026-02-01", "A1"]);

        let err = mapper.map_to_order_row(&row).unwrap_err();
        assert!(matches!(err, ImportError::MissingField { field, .. } if field == "quantity"));
    }

    #[test]
    fn test_empty_part_number_is_allowed() {
        let mapper = FieldMapper::default();
        let row = raw(&["1001", "", "2026-02-01", "", "", "1"]);

        let order = mapper.map_to_order_row(&row).unwrap();
        assert_eq!(order.part_number, "");
    }

    #[test]
    fn test_custom_columns() {
        let mapper = FieldMapper::new(InputColumns {
            order_id: 3,
            ship_date: 2,
            part_number: 1,
            quantity: 0,
        });
        let row = raw(&["2", "B7", "20260301", "9001"]);

        let order = mapper.map_to_order_row(&row).unwrap();
        assert_eq!(order.order_id, "9001");
        assert_eq!(order.part_number, "B7");
        assert_eq!(order.quantity, 2.0);
    }
}

// ==========================================
// BOM 工时展开工具 - 结果清洗
// ==========================================
// 步骤:
//   1. 工时列转数值,非数值（NaN）记为缺失
//   2. 缺失按 0 求和,和为 0 的行删除
//   3. 剩余缺失填 0
//   4. 结果为连续序列
// 性质: 幂等
// ==========================================

use crate::domain::OutputRow;

#[derive(Debug, Clone, Copy, Default)]
pub struct Cleaner;

impl Cleaner {
    pub fn new() -> Self {
        Self
    }

    pub fn clean<I>(&self, rows: I) -> Vec<OutputRow>
    where
        I: IntoIterator<Item = OutputRow>,
    {
        rows.into_iter().filter_map(|row| self.clean_row(row)).collect()
    }

    /// 单行清洗；返回 None 表示删除该行
    pub fn clean_row(&self, mut row: OutputRow) -> Option<OutputRow> {
        let times = row.times().map(coerce);

        let total: f64 = times.iter().flatten().sum();
        if total == 0.0 {
            return None;
        }

        row.set_times(times.map(|v| v.unwrap_or(0.0)));
        Some(row)
    }
}

fn coerce(value: f64) -> Option<f64> {
    if value.is_nan() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(asset: &str, times: [f64; 3]) -> OutputRow {
        OutputRow {
            order: "1001".to_string(),
            sku: "A1".to_string(),
            qty: 1.0,
            planned_ship_date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            asset: asset.to_string(),
            total_setup_time: times[0],
            total_machine_time: times[1],
            total_labour_time: times[2],
        }
    }

    #[test]
    fn test_drops_all_zero_rows() {
        let cleaned = Cleaner.clean(vec![
            row("61", [0.0, 0.0, 0.0]),
            row("62", [1.0, 0.0, 0.0]),
        ]);

        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].asset, "62");
    }

    #[test]
    fn test_missing_counts_as_zero_for_drop_test() {
        let cleaned = Cleaner.clean(vec![
            row("61", [f64::NAN, 0.0, f64::NAN]),
            row("62", [f64::NAN, f64::NAN, f64::NAN]),
            row("63", [f64::NAN, 4.0, 0.0]),
        ]);

        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].asset, "63");
        assert_eq!(cleaned[0].times(), [0.0, 4.0, 0.0]);
    }

    #[test]
    fn test_sum_to_zero_is_dropped() {
        let cleaned = Cleaner.clean(vec![row("61", [2.0, -2.0, 0.0])]);
        assert!(cleaned.is_empty());
    }

    #[test]
    fn test_clean_is_idempotent() {
        let once = Cleaner.clean(vec![
            row("61", [f64::NAN, 3.0, 0.0]),
            row("62", [0.0, 0.0, 0.0]),
            row("63", [1.5, 2.5, 0.5]),
        ]);
        let twice = Cleaner.clean(once.clone());

        assert_eq!(once, twice);
        assert_eq!(once.len(), 2);
    }

    #[test]
    fn test_no_output_row_is_all_zero() {
        let cleaned = Cleaner.clean(vec![
            row("61", [0.0, 0.0, 0.0]),
            row("62", [0.0, 0.0, 0.1]),
            row("63", [f64::NAN, 0.0, 0.0]),
        ]);

        assert!(cleaned
            .iter()
            .all(|r| r.times().iter().any(|v| *v != 0.0)));
    }
}

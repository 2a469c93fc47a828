// ==========================================
// BOM 工时展开工具 - 输出领域模型
// ==========================================
// 一行 = (订单行 × 工作中心),工时已乘以数量
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 导出表头（顺序固定,不参与国际化）
pub const OUTPUT_HEADERS: [&str; 8] = [
    "Order",
    "SKU",
    "Qty",
    "Planned Ship Date",
    "Asset",
    "Total Setup Time",
    "Total Machine Time",
    "Total Labour Time",
];

// ==========================================
// OutputRow - 展开结果行
// ==========================================
// NaN 表示"缺失",由 Cleaner 统一处理
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRow {
    #[serde(rename = "Order")]
    pub order: String,
    #[serde(rename = "SKU")]
    pub sku: String,
    #[serde(rename = "Qty")]
    pub qty: f64,
    #[serde(rename = "Planned Ship Date")]
    pub planned_ship_date: NaiveDate,
    #[serde(rename = "Asset")]
    pub asset: String, // 工作中心编号
    #[serde(rename = "Total Setup Time")]
    pub total_setup_time: f64,
    #[serde(rename = "Total Machine Time")]
    pub total_machine_time: f64,
    #[serde(rename = "Total Labour Time")]
    pub total_labour_time: f64,
}

impl OutputRow {
    /// [setup, machine, labour]
    pub fn times(&self) -> [f64; 3] {
        [
            self.total_setup_time,
            self.total_machine_time,
            self.total_labour_time,
        ]
    }

    pub fn set_times(&mut self, [setup, machine, labour]: [f64; 3]) {
        self.total_setup_time = setup;
        self.total_machine_time = machine;
        self.total_labour_time = labour;
    }

    /// 按表头顺序渲染为文本（预览与列宽计算共用）
    pub fn to_cells(&self) -> [String; 8] {
        [
            self.order.clone(),
            self.sku.clone(),
            format_number(self.qty),
            self.planned_ship_date.format("%Y-%m-%d").to_string(),
            self.asset.clone(),
            format_number(self.total_setup_time),
            format_number(self.total_machine_time),
            format_number(self.total_labour_time),
        ]
    }
}

/// 数值文本化: 保留一位小数以上精度,整数补 ".0"
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_cells_follow_header_order() {
        let row = OutputRow {
            order: "1001".to_string(),
            sku: "A1".to_string(),
            qty: 5.0,
            planned_ship_date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            asset: "61".to_string(),
            total_setup_time: 10.0,
            total_machine_time: 0.0,
            total_labour_time: 2.5,
        };

        let cells = row.to_cells();
        assert_eq!(cells.len(), OUTPUT_HEADERS.len());
        assert_eq!(cells[0], "1001");
        assert_eq!(cells[2], "5.0");
        assert_eq!(cells[3], "2026-02-01");
        assert_eq!(cells[7], "2.5");
    }

    #[test]
    fn test_serialize_uses_header_names() {
        let row = OutputRow {
            order: "1".to_string(),
            sku: "X".to_string(),
            qty: 1.0,
            planned_ship_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            asset: "70".to_string(),
            total_setup_time: 1.0,
            total_machine_time: 0.0,
            total_labour_time: 0.0,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["Planned Ship Date"], "2026-01-01");
        assert_eq!(json["Asset"], "70");
    }
}

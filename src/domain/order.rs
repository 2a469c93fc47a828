// ==========================================
// BOM 工时展开工具 - 订单领域模型
// ==========================================
// 来源: 上传的 BOM / 销售订单 Excel（按列位置读取）
// 用途: 导入层写入,引擎层只读
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// OrderRow - 订单行
// ==========================================
// 红线: 一次运行内不可变
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRow {
    pub order_id: String,       // 销售订单号（A 列）
    pub ship_date: NaiveDate,   // 计划发货日期（C 列）
    pub part_number: String,    // 零件号 / SKU（D 列）
    pub quantity: f64,          // 数量（F 列）

    // ===== 元信息 =====
    pub row_number: usize,      // 源表格行号（1-based，含表头行）
}

impl OrderRow {
    pub fn new(
        order_id: impl Into<String>,
        ship_date: NaiveDate,
        part_number: impl Into<String>,
        quantity: f64,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            ship_date,
            part_number: part_number.into(),
            quantity,
            row_number: 0,
        }
    }
}

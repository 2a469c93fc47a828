// ==========================================
// BOM 工时展开工具 - 展开引擎
// ==========================================
// 职责: 订单行 × 参考工时表 → 每个工作中心一行（工时 × 数量）
// 规则:
//   - 零件号精确匹配,查不到 → 整行静默跳过（不是错误）
//   - 缺失 / 非数值工时按 0 处理
//   - 三项放大后全为 0 → 丢弃该工作中心
// 顺序: 订单行顺序 × 参考表工作中心列顺序
// ==========================================

use crate::domain::{OrderRow, OutputRow, ReferenceTable};
use tracing::debug;

#[derive(Debug, Clone, Copy)]
pub struct Expander<'a> {
    reference: &'a ReferenceTable,
}

impl<'a> Expander<'a> {
    pub fn new(reference: &'a ReferenceTable) -> Self {
        Self { reference }
    }

    /// 零件号是否存在于参考表
    pub fn is_known(&self, part_number: &str) -> bool {
        self.reference.lookup(part_number).is_some()
    }

    /// 展开单个订单行（惰性）
    pub fn expand_order(&self, order: &'a OrderRow) -> impl Iterator<Item = OutputRow> + 'a {
        let reference: &'a ReferenceTable = self.reference;
        let workcenters = reference.workcenters();
        let record = reference.lookup(&order.part_number);

        if record.is_none() {
            debug!(
                row = order.row_number,
                part = %order.part_number,
                "零件号不在参考表中,跳过"
            );
        }

        record.into_iter().flat_map(move |record| {
            workcenters
                .iter()
                .zip(record.times.iter())
                .filter_map(move |((asset, _), times)| {
                    let [setup, machine, labour] = times.scaled(order.quantity);

                    if setup == 0.0 && machine == 0.0 && labour == 0.0 {
                        return None;
                    }

                    Some(OutputRow {
                        order: order.order_id.clone(),
                        sku: order.part_number.clone(),
                        qty: order.quantity,
                        planned_ship_date: order.ship_date,
                        asset: asset.to_string(),
                        total_setup_time: setup,
                        total_machine_time: machine,
                        total_labour_time: labour,
                    })
                })
        })
    }

    /// 展开订单序列（惰性）
    pub fn expand<I>(&self, orders: I) -> impl Iterator<Item = OutputRow> + 'a
    where
        I: IntoIterator<Item = &'a OrderRow>,
        I::IntoIter: 'a,
    {
        let expander = *self;
        orders
            .into_iter()
            .flat_map(move |order| expander.expand_order(order))
    }
}

//! Default category set.
//!
//! Both backends seed these on first use so the UI never starts from an
//! empty category picker: the volatile backend on construction, the
//! durable backend only when its category table is empty.

use crate::categories::NewCategory;
use crate::transactions::TransactionKind;

fn category(name: &str, kind: TransactionKind, icon: &str, color: &str) -> NewCategory {
    NewCategory {
        name: name.to_string(),
        kind,
        icon: icon.to_string(),
        color: color.to_string(),
    }
}

/// The canonical starter set: seven expense categories, three income.
pub fn default_categories() -> Vec<NewCategory> {
    use TransactionKind::{Expense, Income};

    vec![
        category("อาหาร", Expense, "fas fa-utensils", "hsl(var(--chart-1))"),
        category("การเดินทาง", Expense, "fas fa-car", "hsl(var(--chart-2))"),
        category("ที่อยู่อาศัย", Expense, "fas fa-home", "hsl(var(--chart-3))"),
        category("ความบันเทิง", Expense, "fas fa-film", "hsl(var(--chart-4))"),
        category("สาธารณูปโภค", Expense, "fas fa-bolt", "hsl(var(--chart-5))"),
        category("สุขภาพ", Expense, "fas fa-heart", "hsl(var(--destructive))"),
        category("ช้อปปิ้ง", Expense, "fas fa-shopping-cart", "hsl(var(--warning))"),
        category("เงินเดือน", Income, "fas fa-briefcase", "hsl(var(--success))"),
        category("งานฟรีแลนซ์", Income, "fas fa-laptop", "hsl(var(--success))"),
        category("การลงทุน", Income, "fas fa-chart-line", "hsl(var(--success))"),
    ]
}

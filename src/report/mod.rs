/// Отчет: статистика, консольный вывод и графики

pub mod console;
pub mod plots;
pub mod stats;

pub use stats::{feature_ranges, label_counts};

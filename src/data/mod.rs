/// Ввод и вывод табличных данных

pub mod loader;
pub mod writer;

pub use loader::{DataLoader, UrlDataset};
pub use writer::DataWriter;

pub mod notice;
pub mod page;

pub use page::ReportsPage;

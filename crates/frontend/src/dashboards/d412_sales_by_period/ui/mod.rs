pub mod report;

pub use report::SalesReport;

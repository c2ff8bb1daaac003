pub mod d400_reports_panel;
pub mod d410_cost_profit;
pub mod d411_seasonality;
pub mod d412_sales_by_period;
pub mod d413_cancellations;
pub mod d414_top_customers;

pub mod dashboard;
pub mod sales_chart;

pub use dashboard::OverviewDashboard;
pub use sales_chart::SalesChart;

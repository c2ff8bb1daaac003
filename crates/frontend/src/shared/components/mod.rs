pub mod date_input;
pub mod go_back_button;
pub mod page_header;
pub mod report_card;
pub mod scroll_to_top;
pub mod stat_card;
pub mod table;

pub use date_input::DateInput;
pub use go_back_button::GoBackButton;
pub use page_header::PageHeader;
pub use report_card::ReportCard;
pub use scroll_to_top::ScrollToTopButton;
pub use stat_card::{StatArrow, StatCard};

//! Core modules for Trikona

pub mod api;
pub mod combine;
pub mod date;
pub mod drivers;
pub mod polarity;
pub mod reads;
pub mod reduce;
pub mod report;
pub mod rules;
pub mod scanner;
pub mod triangle;

pub use api::{create_router, run_server};
pub use combine::combine;
pub use date::{parse_date, InvalidDateFormat};
pub use drivers::{
    daily_combined_triangle, month_year_driver, month_year_driver_selected,
    monthly_combined_triangle, mulank_bhagyank, resolve_day, year_only_triangle,
    yearly_combined_triangle,
};
pub use polarity::summarize_polarity;
pub use reads::build_reads;
pub use reduce::full_reduce;
pub use report::{
    daily_report, monthly_report, person_report, yearly_report, CycleReport, Glance,
    Panel, PersonReport,
};
pub use rules::{SAME_TRIPLES, SPECIAL_RULES};
pub use scanner::scan_special_signals;
pub use triangle::{
    today_triangle, triangle_from_date, triangle_from_dob, triangle_from_seeds,
    used_numbers, year_halves,
};

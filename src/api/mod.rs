mod chart_view;
mod engine;
mod engine_config;
mod json_contract;
mod label_format;

pub use chart_view::ChartView;
pub use engine::ChartLayoutEngine;
pub use engine_config::LayoutConfig;
pub use json_contract::{DRAW_PLAN_JSON_SCHEMA_V1, DrawPlanJsonContractV1};
pub use label_format::{format_date_label, format_price_label};

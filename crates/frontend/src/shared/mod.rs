pub mod api_utils;
pub mod chart;
pub mod components;
pub mod icons;
pub mod navigation;
pub mod scroll;

pub mod chart;
pub mod dto;

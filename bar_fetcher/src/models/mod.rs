pub mod bar;
pub mod fetch_result;
pub mod interval;
pub mod request_params;

use crate::schema::{ConfigPoint, PERCENT_F};

pub fn format_point(point: &ConfigPoint) -> String {
    format!(
        "r[{} {}] p[{} {}] overlap[{}]",
        point.receiver_kind,
        point.receiver_size,
        point.parameter_kind,
        point.parameter_size,
        format_ratio(point.overlap),
    )
}

pub fn format_ratio(ratio: u32) -> String {
    format!("{:.2}", ratio as f64 / PERCENT_F)
}

pub fn format_time(nanos: u64) -> String {
    if nanos < 10u64.pow(3) {
        format!("{}ns", nanos)
    }
    else if nanos < 10u64.pow(6) {
        format!("{}µs", nanos as f64 / 10usize.pow(3) as f64)
    }
    else if nanos < 10u64.pow(9) {
        format!("{}ms", nanos as f64 / 10usize.pow(6) as f64)
    }
    else {
        format!("{}s", nanos as f64 / 10usize.pow(9) as f64)
    }
}

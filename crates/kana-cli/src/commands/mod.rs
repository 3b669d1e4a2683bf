//! Subcommand implementations for `kanatool`. Each prints its result and
//! exits with status 1 on error.

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod analyze_ops;
pub mod catalog_ops;
pub mod config_ops;
pub mod match_ops;

/// Print `value` as pretty JSON.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) {
    let json = die!(serde_json::to_string_pretty(value), "Error encoding JSON: {}");
    println!("{json}");
}

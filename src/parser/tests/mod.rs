//! Test fixtures and helpers shared across the parser test modules.

mod parser_tests;

/// A small two-characteristic DFQ file with tab-separated key records
pub fn create_test_dfq() -> String {
    "K1001\tHousing Front\n\
     K1002\t4711\n\
     K2002\tDiameter\n\
     K2101\t10.5\n\
     12.01\n\
     12.02\n\
     11.99\n\
     K2002\tLength_mm\n\
     1.01\n\
     1.02\n\
     0.99\n"
        .to_string()
}

/// A DFQ file using the DC4 control character as field separator, with
/// per-line timestamps in the measurement payload
pub fn create_timestamped_dfq() -> String {
    "K1001\u{14}Shaft\n\
     K2002\u{14}Runout\n\
     0.10\u{14}01.02.2024/08:30:00\n\
     0.12\u{14}01.02.2024/09:30:00\n\
     K2002\u{14}Twist\n\
     0.20\u{14}01.02.2024/08:30:00\n\
     0.22\u{14}01.02.2024/10:30:00\n"
        .to_string()
}

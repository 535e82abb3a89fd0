/// Formatted output built-ins: `yapping`, `yappin` and `baka`.
///
/// Routes the optional value argument to the host with the format
/// specification it needs.
pub mod print;
/// Process control built-ins: `ragequit` and `chill`.
pub mod process;

/// The built-in table and call dispatch.
pub mod core;

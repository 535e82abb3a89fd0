/// Numeric helpers.
///
/// This module holds the floating-point rules shared by the float and double
/// evaluation contexts (guarded division, epsilon comparisons) and the
/// conversions between those contexts and the 32-bit integer context.
///
/// # Responsibilities
/// - Implement division that never produces an infinity.
/// - Compare floating-point values with an epsilon tolerance.
/// - Narrow floating-point values to `i32` with the language's saturation
///   rule.
pub mod num;

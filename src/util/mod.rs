/// Round to the nearest integer, ties to the even neighbour.
///
/// Same behaviour as .NET's `Math.Round(double)` so that simulated
/// hitresults agree with osu!tools.
pub fn round_half_even(value: f64) -> f64 {
    value.round_ties_even()
}

/// Round to `decimals` decimal places, ties to even.
pub fn round_half_even_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);

    round_half_even(value * factor) / factor
}

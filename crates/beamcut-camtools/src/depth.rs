//! Step-down depth levels.

/// Z levels for a cut down to `cut_depth`.
///
/// Starting from zero, levels advance by `step_down` while the next level
/// stays strictly short of `cut_depth`; `cut_depth` itself is always the last
/// level. A non-positive `step_down` disables stepping.
pub fn z_levels(step_down: f64, cut_depth: f64) -> Vec<f64> {
    let mut levels = Vec::new();
    if step_down > 0.0 {
        let mut z = 0.0;
        while z + step_down < cut_depth {
            z += step_down;
            levels.push(z);
        }
    }
    levels.push(cut_depth);
    levels
}

/// One-dimensional elastic collision between two masses.
///
/// Returns the post-collision velocities `(v1', v2')`. Both masses must be
/// positive; with equal masses the velocities swap.
#[inline]
pub fn elastic_1d(m1: f32, v1: f32, m2: f32, v2: f32) -> (f32, f32) {
    let total = m1 + m2;
    let v1_after = ((m1 - m2) * v1 + 2.0 * m2 * v2) / total;
    let v2_after = ((m2 - m1) * v2 + 2.0 * m1 * v1) / total;
    (v1_after, v2_after)
}

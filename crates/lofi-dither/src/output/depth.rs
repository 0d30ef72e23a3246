//! Depth/echo: a horizontal smear of dark cells that fakes parallax.

use crate::luma::LumaBuffer;

/// Shift every non-white cell `depth` columns to the left.
///
/// Reads always come from the input buffer, so an echo never echoes itself.
/// Cells with `x < depth` are never read, nothing wraps around, and pure
/// white (255) cells never overwrite anything. `depth == 0` returns an
/// unchanged copy.
pub fn apply_depth(luma: &LumaBuffer, depth: u32) -> LumaBuffer {
    let offset = depth as usize;
    let mut out = luma.clone();
    if offset == 0 {
        return out;
    }

    let width = luma.width();
    let src = luma.as_slice();
    let dst = out.as_mut_slice();
    for y in 0..luma.height() {
        let row = y * width;
        for x in offset..width {
            let v = src[row + x];
            if v < 255 {
                dst[row + x - offset] = v;
            }
        }
    }
    out
}

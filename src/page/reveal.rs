use crate::page::Page;
use crate::utils::error::Result;

pub const REVEAL_CLASS: &str = "reveal";
pub const REVEALED_CLASS: &str = "in";

/// With reduced motion there is nothing to animate: mark every `.reveal`
/// element as already visible. Otherwise the page script handles it.
pub fn settle(page: &mut Page, reduced_motion: bool) -> Result<usize> {
    if !reduced_motion {
        return Ok(0);
    }
    let shown = page.add_class_where(REVEAL_CLASS, REVEALED_CLASS)?;
    tracing::debug!("Reduced motion: revealed {} elements up front", shown);
    Ok(shown)
}

use crate::page::Page;
use crate::utils::error::Result;
use chrono::Datelike;

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Write `year` into the footer mount; a missing mount is fine.
pub fn stamp_year(page: &mut Page, year_id: &str, year: i32) -> Result<bool> {
    let stamped = page.set_text(year_id, &year.to_string())?;
    if !stamped {
        tracing::debug!("No footer year element '{}'", year_id);
    }
    Ok(stamped)
}

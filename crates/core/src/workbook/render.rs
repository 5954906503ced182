//! XLSX rendering of sheet plans.

use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook, Worksheet};
use tracing::debug;

use super::error::RenderError;
use super::layout::{SheetPlan, plan_sheets};
use crate::buckets::StatementBuckets;

/// Header fill colour.
pub const HEADER_FILL: u32 = 0x0036_6092;

/// Renders merged buckets into one workbook.
pub struct WorkbookRenderer;

impl WorkbookRenderer {
    /// Renders `buckets` to XLSX bytes.
    ///
    /// # Errors
    ///
    /// [`RenderError::NoData`] when every sheet would be empty, otherwise
    /// any failure from the writer.
    pub fn render(buckets: &StatementBuckets) -> Result<Vec<u8>, RenderError> {
        let plans = plan_sheets(buckets);
        if plans.is_empty() {
            return Err(RenderError::NoData);
        }

        let header = header_format();
        let mut workbook = Workbook::new();
        for plan in &plans {
            let worksheet = workbook.add_worksheet();
            write_sheet(worksheet, plan, &header)?;
            debug!(sheet = plan.name, rows = plan.rows.len(), "Rendered sheet");
        }

        Ok(workbook.save_to_buffer()?)
    }
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_align(FormatAlign::Center)
}

fn write_sheet(
    worksheet: &mut Worksheet,
    plan: &SheetPlan,
    header: &Format,
) -> Result<(), RenderError> {
    let too_large = || RenderError::TooLarge { sheet: plan.name };
    worksheet.set_name(plan.name)?;

    let columns = plan.column_count();
    for (r, row) in plan.rows.iter().enumerate() {
        let row_num = u32::try_from(r).map_err(|_| too_large())?;
        let is_header = plan.header_row == Some(r);

        for c in 0..columns {
            let col_num = u16::try_from(c).map_err(|_| too_large())?;
            let cell = row.get(c).map_or("", String::as_str);
            match (is_header, cell.is_empty()) {
                (true, true) => {
                    worksheet.write_blank(row_num, col_num, header)?;
                }
                (true, false) => {
                    worksheet.write_string_with_format(row_num, col_num, cell, header)?;
                }
                (false, false) => {
                    worksheet.write_string(row_num, col_num, cell)?;
                }
                (false, true) => {}
            }
        }
    }

    for (c, width) in plan.column_widths.iter().enumerate() {
        let col_num = u16::try_from(c).map_err(|_| too_large())?;
        worksheet.set_column_width(col_num, *width)?;
    }
    Ok(())
}

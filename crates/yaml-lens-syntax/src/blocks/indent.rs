use crate::classify::is_line_break;

/// Columns a tab counts for.
pub const TAB_WIDTH: usize = 4;

const SPACE: u16 = b' ' as u16;
const TAB: u16 = b'\t' as u16;

/// Indentation column of the line holding `offset`.
///
/// Walks back to the start of the line counting spaces as 1 and tabs as
/// [`TAB_WIDTH`]. Other units (such as a leading `- `) count 0, so a key
/// after a list marker sits one column deeper than the marker.
/// Returns `None` when `offset` lies outside `units`.
pub fn indent_of(units: &[u16], offset: usize) -> Option<usize> {
    let before = units.get(..offset)?;
    Some(
        before
            .iter()
            .rev()
            .take_while(|&&u| !is_line_break(u))
            .map(|&u| match u {
                SPACE => 1,
                TAB => TAB_WIDTH,
                _ => 0,
            })
            .sum(),
    )
}

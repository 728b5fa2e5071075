use crate::{Grid, Position};
use log::trace;

/// Opens `origin` and, if it is a safe cell with no adjacent mines, floods
/// outward through the connected zero region and its numbered border.
///
/// Flagged and already-open cells are left alone, which also makes the call
/// idempotent. The flood runs off an explicit stack, so its depth is bounded
/// by the board rather than the call stack. Out-of-bounds origins are ignored.
///
/// Returns the number of cells this call opened.
pub fn reveal(grid: &mut Grid, origin: Position) -> usize {
    let mut pending = vec![origin];
    let mut opened = 0;

    while let Some(pos) = pending.pop() {
        let expand = match grid.cell_mut(pos) {
            Some(cell) => {
                if cell.reveal() {
                    opened += 1;
                    !cell.is_mine() && cell.adjacent_mines() == 0
                } else {
                    false
                }
            }
            None => false,
        };

        if expand {
            pending.extend(grid.neighbors(pos).filter(|n| {
                grid.cell(*n).is_some_and(|c| !c.is_revealed() && !c.is_flagged())
            }));
        }
    }

    trace!("Reveal at {:?} opened {} cells", origin, opened);
    opened
}

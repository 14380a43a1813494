use crate::palette::{Catalog, ColorEntry, Coordinate, LayoutName};

/// Visible entries laid out on one layout's grid
#[derive(Debug, Clone)]
pub struct Grid<'c> {
    pub layout: LayoutName,
    pub cols: u16,
    pub rows: u16,
    /// `cells[row - 1][col - 1]`
    pub cells: Vec<Vec<Option<&'c ColorEntry>>>,
}

impl<'c> Grid<'c> {
    pub fn cell(&self, coordinate: Coordinate) -> Option<&'c ColorEntry> {
        let row = usize::from(coordinate.row).checked_sub(1)?;
        let col = usize::from(coordinate.col).checked_sub(1)?;
        self.cells.get(row)?.get(col).copied().flatten()
    }

    pub fn occupied(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }
}

/// Place `entries` into the layout's grid.
///
/// The grid spans the largest column and row any catalog entry uses in the
/// layout, so it keeps its shape while filters hide cells. Entries without a
/// position in the layout are skipped; on duplicate coordinates the later
/// entry wins.
pub fn place_into_grid<'c>(entries: &[&'c ColorEntry], catalog: &Catalog, layout: LayoutName) -> Grid<'c> {
    let (cols, rows) = catalog.extent(layout);
    let mut cells = vec![vec![None; usize::from(cols)]; usize::from(rows)];

    for entry in entries {
        let Some(coordinate) = entry.placement(layout) else {
            continue;
        };
        let row = usize::from(coordinate.row).saturating_sub(1);
        let col = usize::from(coordinate.col).saturating_sub(1);
        if let Some(cell) = cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = Some(*entry);
        } else {
            tracing::warn!(%layout, %coordinate, name = %entry.name, "entry outside grid extent");
        }
    }

    Grid {
        layout,
        cols,
        rows,
        cells,
    }
}

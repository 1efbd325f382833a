use std::collections::HashSet;
use crate::core::{Grid, Sausage, Vec2};

const GRILL: char = 'G';
const FLOOR: char = 'L';

impl Grid {
    /// Classifies a layout. `'G'` cells grill and hold weight, `'L'` cells only hold weight,
    /// anything else is void.
    pub fn new<S: AsRef<str>>(rows: &[S]) -> Grid {
        let mut grill_cells = HashSet::new();
        let mut support_cells = HashSet::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.as_ref().chars().enumerate() {
                let cell = Vec2::new(x as i32, y as i32);
                if ch == GRILL {
                    grill_cells.insert(cell);
                }
                if ch == GRILL || ch == FLOOR {
                    support_cells.insert(cell);
                }
            }
        }

        Grid {
            rows: rows.iter().map(|r| r.as_ref().to_string()).collect(),
            grill_cells,
            support_cells,
        }
    }

    pub fn is_support(&self, cell: &Vec2) -> bool {
        self.support_cells.contains(cell)
    }

    pub fn is_grill(&self, cell: &Vec2) -> bool {
        self.grill_cells.contains(cell)
    }

    pub fn grill_cells(&self) -> &HashSet<Vec2> {
        &self.grill_cells
    }

    pub fn support_cells(&self) -> &HashSet<Vec2> {
        &self.support_cells
    }

    /// The player stands on floor, never on the grill itself.
    pub fn is_player_position_valid(&self, cell: &Vec2) -> bool {
        self.is_support(cell) && !self.is_grill(cell)
    }

    pub fn is_sausage_supported(&self, sausage: &Sausage) -> bool {
        sausage.cells().iter().any(|c| self.is_support(c))
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn height(&self) -> i32 {
        self.rows.len() as i32
    }

    pub fn width(&self) -> i32 {
        self.rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as i32
    }
}

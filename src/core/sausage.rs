use std::collections::HashSet;
use crate::core::{GameError, Grid, GrillCount, Sausage, Vec2};

impl Sausage {
    /// A fresh, uncooked sausage. Cells must be collinear.
    pub fn new(cells: Vec<Vec2>) -> Result<Sausage, GameError> {
        let grilled = vec![GrillCount::default(); cells.len()];
        Sausage::with_grill_counts(cells, grilled)
    }

    pub fn with_grill_counts(cells: Vec<Vec2>, grilled: Vec<GrillCount>) -> Result<Sausage, GameError> {
        if cells.is_empty() {
            return Err(GameError::MalformedSausage { cells, reason: "no cells" });
        }
        if cells.len() != grilled.len() {
            return Err(GameError::MalformedSausage { cells, reason: "one grill count is needed per cell" });
        }
        let sausage = Sausage { cells, grilled };
        if !sausage.is_horizontal() && !sausage.is_vertical() {
            return Err(GameError::MalformedSausage { cells: sausage.cells, reason: "cells are not collinear" });
        }
        Ok(sausage)
    }

    pub fn cells(&self) -> &[Vec2] {
        &self.cells
    }

    pub fn grilled(&self) -> &[GrillCount] {
        &self.grilled
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_vertical(&self) -> bool {
        self.cells.iter().all(|c| c.x == self.cells[0].x)
    }

    pub fn is_horizontal(&self) -> bool {
        self.cells.iter().all(|c| c.y == self.cells[0].y)
    }

    pub fn is_burned(&self) -> bool {
        self.grilled.iter().any(|g| g.bottom > 1 || g.top > 1)
    }

    pub fn is_ready(&self) -> bool {
        self.grilled.iter().all(|g| g.bottom == 1 && g.top == 1)
    }

    /// Shifts every cell by `direction`. Rolling across the long axis an odd distance
    /// turns the sausage over, so the faces swap.
    pub fn roll(&mut self, direction: Vec2) {
        for cell in self.cells.iter_mut() {
            *cell = *cell + direction;
        }
        let flips = (self.is_horizontal() && direction.y.abs() % 2 == 1)
            || (self.is_vertical() && direction.x.abs() % 2 == 1);
        if flips {
            for g in self.grilled.iter_mut() {
                std::mem::swap(&mut g.bottom, &mut g.top);
            }
        }
    }

    pub fn grill_against(&mut self, grid: &Grid) {
        for (cell, g) in self.cells.iter().zip(self.grilled.iter_mut()) {
            if grid.is_grill(cell) {
                g.bottom += 1;
            }
        }
    }

    pub fn has_cell(&self, cell: &Vec2) -> bool {
        self.cells.contains(cell)
    }

    pub fn has_any_of_cells(&self, cells: &HashSet<Vec2>) -> bool {
        self.cells.iter().any(|c| cells.contains(c))
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;
    use super::*;

    fn counts(pairs: &[(u8, u8)]) -> Vec<GrillCount> {
        pairs.iter().map(|&(bottom, top)| GrillCount { bottom, top }).collect()
    }

    fn horizontal() -> Sausage {
        Sausage::new(vec![Vec2::new(0, 0), Vec2::new(1, 0)]).unwrap()
    }

    #[test]
    fn rejects_diagonal_cells() {
        let result = Sausage::new(vec![Vec2::new(0, 0), Vec2::new(1, 1)]);
        assert!(matches!(result, Err(GameError::MalformedSausage { .. })));
    }

    #[test]
    fn rejects_empty_and_mismatched_counts() {
        assert!(Sausage::new(vec![]).is_err());
        let result = Sausage::with_grill_counts(vec![Vec2::new(0, 0), Vec2::new(0, 1)], counts(&[(0, 0)]));
        assert!(matches!(result, Err(GameError::MalformedSausage { .. })));
    }

    #[test]
    fn orientation_follows_shared_axis() {
        let h = horizontal();
        assert!(h.is_horizontal());
        assert!(!h.is_vertical());

        let v = Sausage::new(vec![Vec2::new(3, 2), Vec2::new(3, 3)]).unwrap();
        assert!(v.is_vertical());
        assert!(!v.is_horizontal());
    }

    #[test]
    fn grilling_only_cooks_cells_over_grill() {
        let grid = Grid::new(&["GLG"]);
        let mut sausage = horizontal();

        sausage.grill_against(&grid);

        assert_eq!(sausage.grilled(), counts(&[(1, 0), (0, 0)]).as_slice());
    }

    #[test]
    fn single_overcooked_face_burns() {
        let sausage = Sausage::with_grill_counts(vec![Vec2::new(0, 0)], counts(&[(2, 0)])).unwrap();
        assert!(sausage.is_burned());
        assert!(!sausage.is_ready());
    }

    #[test]
    fn ready_requires_every_face_once() {
        let cells = vec![Vec2::new(0, 0), Vec2::new(1, 0)];
        let ready = Sausage::with_grill_counts(cells.clone(), counts(&[(1, 1), (1, 1)])).unwrap();
        assert!(ready.is_ready());
        assert!(!ready.is_burned());

        let partial = Sausage::with_grill_counts(cells, counts(&[(0, 0), (1, 0)])).unwrap();
        assert!(!partial.is_ready());
        assert!(!partial.is_burned());
    }

    #[test]
    fn rolling_sideways_swaps_faces() {
        let mut sausage = Sausage::with_grill_counts(
            vec![Vec2::new(0, 0), Vec2::new(1, 0)],
            counts(&[(1, 0), (0, 0)]),
        ).unwrap();

        sausage.roll(Vec2::new(0, 1));

        assert_eq!(sausage.cells(), &[Vec2::new(0, 1), Vec2::new(1, 1)]);
        assert_eq!(sausage.grilled(), counts(&[(0, 1), (0, 0)]).as_slice());
    }

    #[test]
    fn rolling_lengthwise_keeps_faces() {
        let mut sausage = Sausage::with_grill_counts(
            vec![Vec2::new(0, 0), Vec2::new(1, 0)],
            counts(&[(1, 0), (0, 0)]),
        ).unwrap();

        sausage.roll(Vec2::new(-1, 0));

        assert_eq!(sausage.cells(), &[Vec2::new(-1, 0), Vec2::new(0, 0)]);
        assert_eq!(sausage.grilled(), counts(&[(1, 0), (0, 0)]).as_slice());
    }

    #[test]
    fn has_any_of_cells_checks_intersection() {
        let sausage = horizontal();
        let touched: HashSet<Vec2> = [Vec2::new(1, 0), Vec2::new(5, 5)].into_iter().collect();
        let missed: HashSet<Vec2> = [Vec2::new(2, 0)].into_iter().collect();

        assert!(sausage.has_any_of_cells(&touched));
        assert!(!sausage.has_any_of_cells(&missed));
        assert!(sausage.has_cell(&Vec2::new(0, 0)));
    }

    fn unit_direction() -> impl Strategy<Value = Vec2> {
        prop_oneof![
            Just(Vec2::new(-1, 0)),
            Just(Vec2::new(1, 0)),
            Just(Vec2::new(0, -1)),
            Just(Vec2::new(0, 1)),
        ]
    }

    proptest! {
        #[test]
        fn rolls_keep_length_and_undo_restores_cells(
            len in 1usize..5,
            vertical in any::<bool>(),
            moves in proptest::collection::vec(unit_direction(), 0..12),
        ) {
            let cells: Vec<Vec2> = (0..len as i32)
                .map(|i| if vertical { Vec2::new(0, i) } else { Vec2::new(i, 0) })
                .collect();
            let mut sausage = Sausage::new(cells.clone()).unwrap();

            for &m in &moves {
                sausage.roll(m);
                prop_assert_eq!(sausage.len(), len);
            }
            for &m in moves.iter().rev() {
                sausage.roll(-m);
            }
            prop_assert_eq!(sausage.cells(), cells.as_slice());
        }

        #[test]
        fn grilling_never_decreases_counters(
            moves in proptest::collection::vec(unit_direction(), 0..12),
        ) {
            let rows = vec!["G".repeat(40); 40];
            let grid = Grid::new(rows.as_slice());
            let mut sausage = Sausage::new(vec![Vec2::new(18, 18), Vec2::new(19, 18)]).unwrap();

            for &m in &moves {
                let before: u32 = sausage.grilled().iter().map(|g| (g.bottom + g.top) as u32).sum();
                sausage.roll(m);
                sausage.grill_against(&grid);
                let after: u32 = sausage.grilled().iter().map(|g| (g.bottom + g.top) as u32).sum();
                prop_assert_eq!(after, before + sausage.len() as u32);
            }
        }
    }
}

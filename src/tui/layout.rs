//! Proportional grid composer.
//!
//! A [`Grid`] is built once from a declarative [`Node`] tree and stored as an
//! arena of cells whose children are referenced by index. Rectangles are never
//! persisted across resizes: [`Grid::resize`] derives every one of them again
//! from the terminal dimensions.

use std::fmt;

use ratatui::layout::{Direction, Rect};

use super::error::{DashboardError, Result};

/// Allowed deviation of a split's proportion sum from 1.0.
pub const PROPORTION_TOLERANCE: f64 = 1e-9;

/// Index of a cell inside its grid.
pub type CellId = usize;

/// Declarative description of a grid, consumed by [`Grid::compose`].
#[derive(Debug, Clone)]
pub enum Node<K> {
    /// A pane bound to one widget.
    Leaf { proportion: f64, widget: K },
    /// A pane subdivided along `direction` into proportioned children.
    Split {
        proportion: f64,
        direction: Direction,
        children: Vec<Node<K>>,
    },
}

impl<K> Node<K> {
    pub fn leaf(proportion: f64, widget: K) -> Self {
        Node::Leaf { proportion, widget }
    }

    /// Children stacked top to bottom.
    pub fn rows(proportion: f64, children: Vec<Node<K>>) -> Self {
        Node::Split {
            proportion,
            direction: Direction::Vertical,
            children,
        }
    }

    /// Children placed left to right.
    pub fn columns(proportion: f64, children: Vec<Node<K>>) -> Self {
        Node::Split {
            proportion,
            direction: Direction::Horizontal,
            children,
        }
    }

    fn proportion(&self) -> f64 {
        match self {
            Node::Leaf { proportion, .. } | Node::Split { proportion, .. } => *proportion,
        }
    }
}

/// Shape of a composed cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellKind<K> {
    Leaf(K),
    Split {
        direction: Direction,
        children: Vec<CellId>,
    },
}

/// A composed cell with its current absolute rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell<K> {
    pub proportion: f64,
    pub kind: CellKind<K>,
    pub rect: Rect,
}

/// Composed grid of proportioned cells.
///
/// Cells are stored in pre-order, so every parent precedes its children and
/// the root is always [`Grid::ROOT`].
#[derive(Debug, Clone)]
pub struct Grid<K> {
    name: &'static str,
    cells: Vec<Cell<K>>,
    area: Rect,
}

impl<K: Copy + PartialEq + fmt::Debug> Grid<K> {
    pub const ROOT: CellId = 0;

    /// Validates `root` and builds the cell arena. All rectangles start empty
    /// until the first [`Grid::resize`].
    pub fn compose(name: &'static str, root: Node<K>) -> Result<Self> {
        let mut cells = Vec::new();
        let mut bound = Vec::new();
        push_node(&mut cells, &mut bound, root, "root".to_string())?;
        Ok(Self {
            name,
            cells,
            area: Rect::default(),
        })
    }

    /// Recomputes every cell rectangle for a `width` x `height` terminal.
    ///
    /// Fails with `DegenerateSize` when the terminal is empty or too small for
    /// every leaf to get a non-empty rectangle; the previous rectangles are
    /// kept in that case.
    pub fn resize(&mut self, width: u16, height: u16) -> Result<()> {
        let degenerate = DashboardError::DegenerateSize {
            page: self.name,
            width,
            height,
        };
        if width == 0 || height == 0 {
            return Err(degenerate);
        }

        let area = Rect::new(0, 0, width, height);
        let rects = self.compute(area);
        let leaf_is_empty = self
            .cells
            .iter()
            .zip(&rects)
            .any(|(cell, rect)| matches!(cell.kind, CellKind::Leaf(_)) && rect.is_empty());
        if leaf_is_empty {
            return Err(degenerate);
        }

        for (cell, rect) in self.cells.iter_mut().zip(rects) {
            cell.rect = rect;
        }
        self.area = area;
        Ok(())
    }

    /// Computes the rectangle of every cell (indexed by [`CellId`]) for `area`
    /// without committing it. Children always tile their parent exactly.
    pub fn compute(&self, area: Rect) -> Vec<Rect> {
        if self.is_empty() {
            return Vec::new();
        }
        let mut rects = vec![Rect::default(); self.cells.len()];
        rects[Self::ROOT] = area;

        for (id, cell) in self.cells.iter().enumerate() {
            if let CellKind::Split {
                direction,
                children,
            } = &cell.kind
            {
                let proportions = children.iter().map(|&c| self.cells[c].proportion);
                let parts = split_rect(rects[id], *direction, proportions);
                for (&child, rect) in children.iter().zip(parts) {
                    rects[child] = rect;
                }
            }
        }
        rects
    }

    /// Rectangle covered by the whole grid.
    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn cell(&self, id: CellId) -> Option<&Cell<K>> {
        self.cells.get(id)
    }

    /// Children of a split cell, empty for leaves and unknown ids.
    pub fn children(&self, id: CellId) -> &[CellId] {
        match self.cells.get(id).map(|c| &c.kind) {
            Some(CellKind::Split { children, .. }) => children,
            _ => &[],
        }
    }

    /// Leaves in layout order with their current rectangles.
    pub fn leaves(&self) -> impl Iterator<Item = (K, Rect)> + '_ {
        self.cells.iter().filter_map(|cell| match cell.kind {
            CellKind::Leaf(widget) => Some((widget, cell.rect)),
            CellKind::Split { .. } => None,
        })
    }

    /// Current rectangle of the leaf bound to `widget`.
    pub fn leaf_rect(&self, widget: K) -> Option<Rect> {
        self.leaves()
            .find(|(bound, _)| *bound == widget)
            .map(|(_, rect)| rect)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

fn push_node<K: Copy + PartialEq + fmt::Debug>(
    cells: &mut Vec<Cell<K>>,
    bound: &mut Vec<K>,
    node: Node<K>,
    path: String,
) -> Result<CellId> {
    let proportion = node.proportion();
    if !proportion.is_finite() || proportion <= 0.0 || proportion > 1.0 + PROPORTION_TOLERANCE {
        return Err(DashboardError::LayoutConfig {
            path,
            message: format!("proportion {} is outside (0, 1]", proportion),
        });
    }

    let id = cells.len();
    match node {
        Node::Leaf { widget, .. } => {
            if bound.contains(&widget) {
                return Err(DashboardError::LayoutConfig {
                    path,
                    message: format!("widget {:?} is bound to more than one cell", widget),
                });
            }
            bound.push(widget);
            cells.push(Cell {
                proportion,
                kind: CellKind::Leaf(widget),
                rect: Rect::default(),
            });
        }
        Node::Split {
            direction,
            children,
            ..
        } => {
            if children.is_empty() {
                return Err(DashboardError::LayoutConfig {
                    path,
                    message: "split has no children".to_string(),
                });
            }
            let sum: f64 = children.iter().map(Node::proportion).sum();
            if (sum - 1.0).abs() > PROPORTION_TOLERANCE {
                return Err(DashboardError::LayoutConfig {
                    path,
                    message: format!("child proportions sum to {}, expected 1.0", sum),
                });
            }

            cells.push(Cell {
                proportion,
                kind: CellKind::Split {
                    direction,
                    children: Vec::new(),
                },
                rect: Rect::default(),
            });
            let mut ids = Vec::with_capacity(children.len());
            for (i, child) in children.into_iter().enumerate() {
                ids.push(push_node(cells, bound, child, format!("{}/{}", path, i))?);
            }
            cells[id].kind = CellKind::Split {
                direction,
                children: ids,
            };
        }
    }
    Ok(id)
}

/// Splits `area` along `direction`. Every part but the last is floored; the
/// last one takes the remainder so the parts tile `area` exactly.
fn split_rect(
    area: Rect,
    direction: Direction,
    proportions: impl ExactSizeIterator<Item = f64>,
) -> Vec<Rect> {
    let total = match direction {
        Direction::Horizontal => area.width,
        Direction::Vertical => area.height,
    };
    let count = proportions.len();
    let mut offset: u16 = 0;
    let mut parts = Vec::with_capacity(count);

    for (i, proportion) in proportions.enumerate() {
        let remaining = total - offset;
        let len = if i + 1 == count {
            remaining
        } else {
            let share = (proportion * f64::from(total) + PROPORTION_TOLERANCE).floor();
            (share as u16).min(remaining)
        };
        let rect = match direction {
            Direction::Horizontal => Rect {
                x: area.x.saturating_add(offset),
                y: area.y,
                width: len,
                height: area.height,
            },
            Direction::Vertical => Rect {
                x: area.x,
                y: area.y.saturating_add(offset),
                width: area.width,
                height: len,
            },
        };
        parts.push(rect);
        offset += len;
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::page::{AllProcessesPage, ListingPane, ProcessPane, SingleProcessPage};
    use proptest::prelude::*;

    fn sample() -> Node<u8> {
        Node::columns(
            1.0,
            vec![
                Node::rows(
                    0.5,
                    vec![
                        Node::leaf(0.125, 0),
                        Node::leaf(0.125, 1),
                        Node::leaf(0.35, 2),
                        Node::leaf(0.4, 3),
                    ],
                ),
                Node::rows(
                    0.5,
                    vec![
                        Node::columns(0.6, vec![Node::leaf(0.5, 4), Node::leaf(0.5, 5)]),
                        Node::leaf(0.4, 6),
                    ],
                ),
            ],
        )
    }

    fn assert_tiles(leaves: &[Rect], area: Rect) {
        let covered: u32 = leaves
            .iter()
            .map(|r| u32::from(r.width) * u32::from(r.height))
            .sum();
        assert_eq!(covered, u32::from(area.width) * u32::from(area.height));
        for (i, a) in leaves.iter().enumerate() {
            assert!(
                a.x >= area.x
                    && a.y >= area.y
                    && a.right() <= area.right()
                    && a.bottom() <= area.bottom(),
                "leaf {} leaves the area",
                i
            );
            for b in &leaves[i + 1..] {
                assert!(
                    a.is_empty() || b.is_empty() || !a.intersects(*b),
                    "{:?} overlaps {:?}",
                    a,
                    b
                );
            }
        }
    }

    fn leaf_rects<K: Copy + PartialEq + fmt::Debug>(grid: &Grid<K>, area: Rect) -> Vec<Rect> {
        let rects = grid.compute(area);
        (0..grid.len())
            .filter(|&id| matches!(grid.cell(id).map(|c| &c.kind), Some(CellKind::Leaf(_))))
            .map(|id| rects[id])
            .collect()
    }

    #[test]
    fn test_compose_preorder_arena() {
        let grid = Grid::compose("test", sample()).unwrap();
        assert_eq!(grid.len(), 11);
        assert_eq!(grid.children(Grid::<u8>::ROOT), &[1, 6]);
        assert_eq!(grid.children(6), &[7, 10]);
        assert_eq!(grid.children(7), &[8, 9]);
        assert!(grid.children(2).is_empty());
        let widgets: Vec<u8> = grid.leaves().map(|(w, _)| w).collect();
        assert_eq!(widgets, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    fn assert_split_sums<K: Copy + PartialEq + fmt::Debug>(grid: &Grid<K>) {
        for id in 0..grid.len() {
            let children = grid.children(id);
            if children.is_empty() {
                continue;
            }
            let sum: f64 = children
                .iter()
                .map(|&c| grid.cell(c).unwrap().proportion)
                .sum();
            assert!(
                (sum - 1.0).abs() <= PROPORTION_TOLERANCE,
                "{}: children of cell {} sum to {}",
                grid.name(),
                id,
                sum
            );
        }
    }

    fn single_process_grid() -> Grid<ProcessPane> {
        Grid::compose(SingleProcessPage::NAME, SingleProcessPage::layout()).unwrap()
    }

    fn all_processes_grid() -> Grid<ListingPane> {
        Grid::compose(AllProcessesPage::NAME, AllProcessesPage::layout()).unwrap()
    }

    #[test]
    fn test_split_proportions_sum_to_one() {
        assert_split_sums(&Grid::compose("test", sample()).unwrap());
        assert_split_sums(&single_process_grid());
        assert_split_sums(&all_processes_grid());
    }

    #[test]
    fn test_empty_grid_computes_nothing() {
        let grid: Grid<u8> = Grid {
            name: "empty",
            cells: Vec::new(),
            area: Rect::default(),
        };
        assert!(grid.is_empty());
        assert!(grid.compute(Rect::new(0, 0, 10, 10)).is_empty());
    }

    #[test]
    fn test_compose_rejects_bad_sum() {
        let node = Node::rows(1.0, vec![Node::leaf(0.5, 0u8), Node::leaf(0.4, 1)]);
        let err = Grid::compose("test", node).unwrap_err();
        match err {
            DashboardError::LayoutConfig { path, message } => {
                assert_eq!(path, "root");
                assert!(message.contains("0.9"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_compose_rejects_nested_bad_sum_with_path() {
        let node = Node::columns(
            1.0,
            vec![
                Node::leaf(0.5, 0u8),
                Node::rows(0.5, vec![Node::leaf(0.7, 1), Node::leaf(0.7, 2)]),
            ],
        );
        let err = Grid::compose("test", node).unwrap_err();
        assert!(matches!(err, DashboardError::LayoutConfig { ref path, .. } if path == "root/1"));
    }

    #[test]
    fn test_compose_rejects_out_of_range_proportion() {
        for bad in [0.0, -0.5, 1.5, f64::NAN] {
            let node = Node::rows(1.0, vec![Node::leaf(bad, 0u8)]);
            assert!(matches!(
                Grid::compose("test", node),
                Err(DashboardError::LayoutConfig { .. })
            ));
        }
    }

    #[test]
    fn test_compose_rejects_empty_split_and_shared_widget() {
        let empty: Node<u8> = Node::rows(1.0, vec![]);
        assert!(Grid::compose("test", empty).is_err());

        let shared = Node::rows(1.0, vec![Node::leaf(0.5, 3u8), Node::leaf(0.5, 3)]);
        let err = Grid::compose("test", shared).unwrap_err();
        assert!(err.to_string().contains("more than one cell"));
    }

    #[test]
    fn test_resize_floors_and_gives_remainder_to_last() {
        let node = Node::rows(
            1.0,
            vec![Node::leaf(1.0 / 3.0, 0u8), Node::leaf(1.0 / 3.0, 1), Node::leaf(1.0 / 3.0, 2)],
        );
        let mut grid = Grid::compose("test", node).unwrap();
        grid.resize(10, 10).unwrap();
        let heights: Vec<u16> = grid.leaves().map(|(_, r)| r.height).collect();
        assert_eq!(heights, vec![3, 3, 4]);
        assert_eq!(grid.leaf_rect(2), Some(Rect::new(0, 6, 10, 4)));
    }

    #[test]
    fn test_resize_rejects_degenerate_and_keeps_previous() {
        let mut grid = Grid::compose("test", sample()).unwrap();
        grid.resize(80, 24).unwrap();
        let before: Vec<Rect> = grid.leaves().map(|(_, r)| r).collect();

        assert!(matches!(
            grid.resize(0, 24),
            Err(DashboardError::DegenerateSize { width: 0, .. })
        ));
        // 0.125 of 4 rows floors to zero for the first gauge.
        assert!(matches!(
            grid.resize(80, 4),
            Err(DashboardError::DegenerateSize { height: 4, .. })
        ));

        let after: Vec<Rect> = grid.leaves().map(|(_, r)| r).collect();
        assert_eq!(before, after);
        assert_eq!(grid.area(), Rect::new(0, 0, 80, 24));
    }

    #[test]
    fn test_resize_is_idempotent() {
        let mut grid = Grid::compose("test", sample()).unwrap();
        grid.resize(137, 41).unwrap();
        let first: Vec<(u8, Rect)> = grid.leaves().collect();
        grid.resize(137, 41).unwrap();
        let second: Vec<(u8, Rect)> = grid.leaves().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_compute_respects_area_origin() {
        let grid = Grid::compose("test", sample()).unwrap();
        let area = Rect::new(5, 7, 60, 30);
        assert_tiles(&leaf_rects(&grid, area), area);
    }

    proptest! {
        #[test]
        fn prop_leaves_tile_terminal(width in 1u16..500, height in 1u16..300) {
            let grid = Grid::compose("test", sample()).unwrap();
            let area = Rect::new(0, 0, width, height);
            assert_tiles(&leaf_rects(&grid, area), area);
        }

        #[test]
        fn prop_page_layouts_tile_terminal(width in 1u16..500, height in 1u16..300) {
            let area = Rect::new(0, 0, width, height);
            assert_tiles(&leaf_rects(&single_process_grid(), area), area);
            assert_tiles(&leaf_rects(&all_processes_grid(), area), area);
        }

        #[test]
        fn prop_page_layouts_resize_idempotent(width in 1u16..500, height in 1u16..300) {
            let mut single = single_process_grid();
            let first = single.resize(width, height).map(|_| single.leaves().collect::<Vec<_>>());
            let second = single.resize(width, height).map(|_| single.leaves().collect::<Vec<_>>());
            prop_assert_eq!(first.is_ok(), second.is_ok());
            if let (Ok(a), Ok(b)) = (first, second) {
                prop_assert_eq!(a, b);
            }

            let mut all = all_processes_grid();
            let first = all.resize(width, height).map(|_| all.leaves().collect::<Vec<_>>());
            let second = all.resize(width, height).map(|_| all.leaves().collect::<Vec<_>>());
            prop_assert_eq!(first.is_ok(), second.is_ok());
            if let (Ok(a), Ok(b)) = (first, second) {
                prop_assert_eq!(a, b);
            }
        }

        #[test]
        fn prop_resize_idempotent(width in 1u16..500, height in 1u16..300) {
            let mut grid = Grid::compose("test", sample()).unwrap();
            let first = grid.resize(width, height).map(|_| grid.leaves().collect::<Vec<_>>());
            let second = grid.resize(width, height).map(|_| grid.leaves().collect::<Vec<_>>());
            prop_assert_eq!(first.is_ok(), second.is_ok());
            if let (Ok(a), Ok(b)) = (first, second) {
                prop_assert_eq!(a, b);
            }
        }
    }
}

use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame allocation once warmed
///
/// # Layers
///
/// Renderers draw one [`ZIndex`] at a time so that a circle recorded on a
/// higher layer covers lines recorded below it, regardless of which renderer
/// runs first within a layer.
///
/// ```ignore
/// for z in draw_list.layers() {
///     circles.draw_layer(target, z);
///     lines.draw_layer(target, z);
/// }
/// ```
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Pushes a draw command on layer `z`.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
        });

        self.sorted_dirty = true;
    }

    /// Appends every item of `other`, preserving its relative order.
    pub fn extend_from(&mut self, other: &DrawList) {
        for item in &other.items {
            self.push(item.key.z, item.cmd.clone());
        }
    }

    /// Iterates items in paint order (back-to-front) without cloning draw
    /// commands. The sorted index buffer is reused across frames.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    /// Distinct layers present in the list, ascending.
    pub fn layers(&mut self) -> Vec<ZIndex> {
        let mut out: Vec<ZIndex> = Vec::new();
        for item in self.iter_in_paint_order() {
            if out.last() != Some(&item.key.z) {
                out.push(item.key.z);
            }
        }
        out
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    fn z(v: i32) -> ZIndex { ZIndex::new(v) }

    fn tagged(list: &mut DrawList, layer: i32, width: f32) {
        list.push_line(z(layer), Vec2::zero(), Vec2::new(1.0, 0.0), width, Color::white());
    }

    fn widths_in_paint_order(list: &mut DrawList) -> Vec<f32> {
        list.iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Line(l) => l.width,
                other => panic!("unexpected {other:?}"),
            })
            .collect()
    }

    // ── paint order ───────────────────────────────────────────────────────

    #[test]
    fn paint_order_sorts_by_layer_then_insertion() {
        let mut list = DrawList::new();
        tagged(&mut list, 2, 1.0);
        tagged(&mut list, 0, 2.0);
        tagged(&mut list, 2, 3.0);
        tagged(&mut list, 1, 4.0);

        assert_eq!(widths_in_paint_order(&mut list), vec![2.0, 4.0, 1.0, 3.0]);
        let orders: Vec<u32> = list.iter_in_paint_order().map(|i| i.key.order).collect();
        assert_eq!(orders, vec![1, 3, 0, 2]);
    }

    #[test]
    fn push_after_iteration_resorts() {
        let mut list = DrawList::new();
        tagged(&mut list, 1, 1.0);
        let _ = widths_in_paint_order(&mut list);
        tagged(&mut list, 0, 2.0);
        assert_eq!(widths_in_paint_order(&mut list), vec![2.0, 1.0]);
    }

    // ── layers ────────────────────────────────────────────────────────────

    #[test]
    fn layers_are_distinct_and_ascending() {
        let mut list = DrawList::new();
        tagged(&mut list, 5, 1.0);
        tagged(&mut list, -1, 1.0);
        tagged(&mut list, 5, 1.0);
        tagged(&mut list, 0, 1.0);
        assert_eq!(list.layers(), vec![z(-1), z(0), z(5)]);
    }

    #[test]
    fn empty_list_has_no_layers() {
        assert!(DrawList::new().layers().is_empty());
    }

    // ── clear / extend ────────────────────────────────────────────────────

    #[test]
    fn clear_resets_items_and_order() {
        let mut list = DrawList::new();
        tagged(&mut list, 0, 1.0);
        list.clear();
        assert!(list.is_empty());
        tagged(&mut list, 0, 2.0);
        assert_eq!(list.items()[0].key.order, 0);
    }

    #[test]
    fn extend_from_keeps_relative_order() {
        let mut a = DrawList::new();
        tagged(&mut a, 0, 1.0);
        let mut b = DrawList::new();
        tagged(&mut b, 0, 2.0);
        tagged(&mut b, 0, 3.0);
        a.extend_from(&b);
        assert_eq!(a.len(), 3);
        assert_eq!(widths_in_paint_order(&mut a), vec![1.0, 2.0, 3.0]);
    }
}

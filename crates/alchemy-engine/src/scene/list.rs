use super::DrawCmd;

/// Z-ordering key. Higher values are painted on top of lower values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

/// A recorded command with its paint-order key.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub z: ZIndex,
    /// Insertion index; breaks ties between equal `z`.
    pub order: u32,
    pub cmd: DrawCmd,
}

/// Ordered list of overlay shapes.
///
/// Paint order is back-to-front: ascending `z`, then insertion order.
/// The sorted index buffer is rebuilt lazily after pushes.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.items.len() as u32;
        self.items.push(DrawItem { z, order, cmd });
        self.sorted_dirty = true;
    }

    /// Iterates items back-to-front without cloning commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty || self.sorted_indices.len() != self.items.len() {
            self.rebuild_sorted_indices();
        }
        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        let items = &self.items;
        self.sorted_indices
            .sort_by_key(|&i| (items[i].z, items[i].order));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use crate::paint::Color;

    fn rect_at(x: f32) -> Rect {
        Rect::new(x, 0.0, 1.0, 1.0)
    }

    fn xs(list: &mut DrawList) -> Vec<f32> {
        list.iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Rect(r) => r.rect.origin.x,
                other => panic!("unexpected {other:?}"),
            })
            .collect()
    }

    #[test]
    fn equal_z_keeps_insertion_order() {
        let mut list = DrawList::new();
        for x in [3.0, 1.0, 2.0] {
            list.push_solid_rect(ZIndex(0), rect_at(x), Color::white());
        }
        assert_eq!(xs(&mut list), vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn lower_z_paints_first() {
        let mut list = DrawList::new();
        list.push_solid_rect(ZIndex(2), rect_at(1.0), Color::white());
        list.push_solid_rect(ZIndex(-1), rect_at(2.0), Color::white());
        list.push_solid_rect(ZIndex(0), rect_at(3.0), Color::white());
        assert_eq!(xs(&mut list), vec![2.0, 3.0, 1.0]);
    }

    #[test]
    fn push_after_iteration_resorts() {
        let mut list = DrawList::new();
        list.push_solid_rect(ZIndex(1), rect_at(1.0), Color::white());
        assert_eq!(xs(&mut list), vec![1.0]);
        list.push_solid_rect(ZIndex(0), rect_at(2.0), Color::white());
        assert_eq!(xs(&mut list), vec![2.0, 1.0]);
    }

}

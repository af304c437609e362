use crate::domain::MarkerId;

const CAPACITY: usize = 2;

/// Fixed two-slot ring of selected markers, oldest first. Pushing onto a full ring evicts the oldest entry.
#[derive(Clone, Default, Debug)]
pub struct SelectionRing {
    slots: [Option<MarkerId>; CAPACITY],
    head: usize,
    len: usize,
}

impl SelectionRing {
    pub fn new() -> Self {
        SelectionRing::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, id: &MarkerId) -> bool {
        self.iter().any(|selected| selected == id)
    }

    /// Iterates from the oldest to the newest selection.
    pub fn iter(&self) -> impl Iterator<Item = &MarkerId> + '_ {
        (0..self.len).filter_map(move |offset| self.slots[self.slot(offset)].as_ref())
    }

    /// Returns `(oldest, newest)` when the ring is full.
    pub fn pair(&self) -> Option<(&MarkerId, &MarkerId)> {
        if self.len != CAPACITY {
            return None;
        }

        Some((self.slots[self.slot(0)].as_ref()?, self.slots[self.slot(1)].as_ref()?))
    }

    /// Appends `id` as the newest entry, returning the evicted oldest entry if the ring was full.
    pub fn push(&mut self, id: MarkerId) -> Option<MarkerId> {
        if self.len < CAPACITY {
            let tail = self.slot(self.len);
            self.slots[tail] = Some(id);
            self.len += 1;
            return None;
        }

        let evicted = self.slots[self.head].replace(id);
        self.head = (self.head + 1) % CAPACITY;
        evicted
    }

    pub fn remove(&mut self, id: &MarkerId) -> bool {
        let Some(offset) = (0..self.len).find(|offset| self.slots[self.slot(*offset)].as_ref() == Some(id)) else {
            return false;
        };

        for offset in offset..self.len - 1 {
            let (to, from) = (self.slot(offset), self.slot(offset + 1));
            self.slots[to] = self.slots[from].take();
        }

        let last = self.slot(self.len - 1);
        self.slots[last] = None;
        self.len -= 1;
        true
    }

    pub fn clear(&mut self) {
        *self = SelectionRing::default();
    }

    pub fn to_vec(&self) -> Vec<MarkerId> {
        self.iter().cloned().collect()
    }

    fn slot(&self, offset: usize) -> usize {
        (self.head + offset) % CAPACITY
    }
}

/// Transaction number source for one RDM conversation.
///
/// Hands out 0, 1, ..., 255 and then wraps to 0. Each destination device
/// or discovery sweep should own its own sequencer; sharing one across
/// threads needs external locking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionSequencer {
    next: u8,
}

impl TransactionSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(value: u8) -> Self {
        Self { next: value }
    }

    /// Return the current number and advance.
    pub fn next_transaction(&mut self) -> u8 {
        let current = self.next;
        self.next = self.next.wrapping_add(1);
        current
    }

    /// The number the next call to `next_transaction` will return.
    pub fn peek(&self) -> u8 {
        self.next
    }
}

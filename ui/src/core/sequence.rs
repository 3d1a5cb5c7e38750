//! Monotonic tickets for telling the latest request apart from superseded ones.

/// Identifies one issued request. Higher tickets were issued later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Issues tickets and remembers the most recent one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    latest: u64,
}

impl Sequence {
    pub fn issue(&mut self) -> Ticket {
        self.latest = self.latest.wrapping_add(1);
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest != 0 && ticket.0 == self.latest
    }

    pub fn latest(&self) -> Option<Ticket> {
        (self.latest != 0).then_some(Ticket(self.latest))
    }
}

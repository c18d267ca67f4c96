use std::cell::Cell;
use uuid::Uuid;

/// Issues opaque identifiers for flattened entities.
pub trait IdIssuer {
    fn new_id(&self) -> String;
}

/// Random UUIDv4 identifiers. Collisions are not checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIssuer;

impl IdIssuer for UuidIssuer {
    fn new_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic `"{prefix}-{n}"` identifiers, starting at 1.
#[derive(Debug)]
pub struct SequentialIssuer {
    prefix: String,
    next: Cell<u64>,
}

impl SequentialIssuer {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            next: Cell::new(1),
        }
    }

    /// Number of identifiers issued so far.
    pub fn issued(&self) -> u64 {
        self.next.get() - 1
    }
}

impl IdIssuer for SequentialIssuer {
    fn new_id(&self) -> String {
        let n = self.next.get();
        self.next.set(n + 1);
        format!("{}-{}", self.prefix, n)
    }
}

/// Hands out identifiers for gradients and masks within one render pass.
///
/// Every id carries a monotonically increasing counter, so ids from one
/// allocator never collide even across rings. Use one allocator per document
/// or pass.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    prefix: String,
    next: u64,
}

impl IdAllocator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), next: 0 }
    }

    /// Next id for an item of `kind`, e.g. `ring-gradient-3`.
    pub fn next_id(&mut self, kind: &str) -> String {
        let id = format!("{}-{}-{}", self.prefix, kind, self.next);
        self.next += 1;
        id
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new("ring")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_across_kinds() {
        let mut ids = IdAllocator::default();
        let issued: HashSet<String> = (0..50)
            .map(|i| ids.next_id(if i % 2 == 0 { "mask" } else { "gradient" }))
            .collect();
        assert_eq!(issued.len(), 50);
        assert_eq!(ids.next_id("mask"), "ring-mask-50");
    }

    #[test]
    fn id_format() {
        let mut ids = IdAllocator::new("pass7");
        assert_eq!(ids.next_id("mask"), "pass7-mask-0");
        assert_eq!(ids.next_id("shadow"), "pass7-shadow-1");
    }
}

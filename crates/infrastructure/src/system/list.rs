use dnscache_view_domain::DomainError;
use rustc_hash::FxHashSet;

/// Hard upper bound on snapshot length. A healthy resolver cache sits far
/// below this; crossing it means the link structure is corrupt.
const MAX_LIST_LEN: usize = 1 << 20;

/// Tracks visited node addresses while walking an OS-owned linked list.
///
/// The snapshot source is trusted but not assumed infallible: a repeated
/// address or an impossible length aborts the walk instead of looping.
pub struct LinkGuard {
    seen: FxHashSet<usize>,
}

impl LinkGuard {
    pub fn new() -> Self {
        Self {
            seen: FxHashSet::default(),
        }
    }

    /// Registers a node address, rejecting revisits and overruns.
    pub fn visit(&mut self, addr: usize) -> Result<(), DomainError> {
        if !self.seen.insert(addr) {
            return Err(DomainError::MalformedSnapshot(format!(
                "cycle detected at node {addr:#x}"
            )));
        }
        if self.seen.len() > MAX_LIST_LEN {
            return Err(DomainError::MalformedSnapshot(format!(
                "entry list exceeds {MAX_LIST_LEN} nodes"
            )));
        }
        Ok(())
    }
}

impl Default for LinkGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Walks a nul-terminated `next`-linked node chain, calling `visit` once
/// per node in list order. The follow-on pointer is captured *before*
/// `visit` runs, so the callback is free to release the node.
///
/// Returns the number of nodes visited.
///
/// # Safety
///
/// `head` must be null or point to a chain of live nodes, and `next_of`
/// must read the link field of a node the callback has not yet released.
pub unsafe fn walk_links<T>(
    head: *const T,
    next_of: impl Fn(*const T) -> *const T,
    mut visit: impl FnMut(*const T) -> Result<(), DomainError>,
) -> Result<usize, DomainError> {
    let mut guard = LinkGuard::new();
    let mut count = 0usize;
    let mut cursor = head;

    while !cursor.is_null() {
        guard.visit(cursor as usize)?;
        let next = next_of(cursor);
        visit(cursor)?;
        cursor = next;
        count += 1;
    }

    Ok(count)
}

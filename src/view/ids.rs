// ============================================================================
// Block ids — one sequence per render session
// ============================================================================

/// Hands out `data-<title><n>` ids for block data containers.
///
/// The sequence belongs to one builder, so two renders never share state and
/// ids stay unique within a page.
#[derive(Debug, Default)]
pub struct BlockIdGenerator {
    next: u64,
}

impl BlockIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the sequence at `start` instead of zero.
    pub fn starting_at(start: u64) -> Self {
        Self { next: start }
    }

    pub fn next_id(&mut self, title: &str) -> String {
        let id = format!("data-{}{}", sanitize_title(title), self.next);
        self.next += 1;
        id
    }
}

/// Collapse whitespace runs to `-` and replace anything outside `[A-Za-z0-9_-]` with `-`.
pub fn sanitize_title(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut in_space = false;
    for c in title.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push('-');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
            out.push(c);
        } else {
            out.push('-');
        }
    }
    out
}

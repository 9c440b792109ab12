use super::term::Term;

/// Maximum nesting of lists and dictionaries, the top-level dictionary included.
pub const MAX_DEPTH: usize = 256;

/// Fixed-capacity stack of the containers currently open, outermost first.
///
/// Overflow and underflow are programming errors and panic; callers check
/// `depth()` against `MAX_DEPTH` before pushing.
#[derive(Debug)]
pub struct Stack {
    terms: [Term; MAX_DEPTH],
    len: usize,
}

impl Stack {
    pub fn new() -> Stack {
        Stack {
            terms: [Term::String; MAX_DEPTH],
            len: 0,
        }
    }

    pub fn push(&mut self, term: Term) {
        assert!(self.len < MAX_DEPTH, "term depth limit reached");
        self.terms[self.len] = term;
        self.len += 1;
    }

    pub fn pop(&mut self) {
        assert!(self.len > 0, "pop on empty term stack");
        self.len -= 1;
    }

    /// Innermost open container. Panics when the stack is empty.
    pub fn top(&self) -> Term {
        assert!(self.len > 0, "top of empty term stack");
        self.terms[self.len - 1]
    }

    pub fn depth(&self) -> usize {
        self.len
    }
}

impl Default for Stack {
    fn default() -> Self {
        Stack::new()
    }
}

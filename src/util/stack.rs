/// If less than this much stack remains, grow it before recursing (128KB).
const RED_ZONE: usize = 128 * 1024;

/// How much stack to allocate per growth step (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Runs `f`, first moving to a freshly allocated stack segment when the
/// current one is nearly exhausted.
///
/// Wrap every recursive parse or evaluation step with this so that nesting
/// depth is bounded by memory and by the evaluator's configured call depth,
/// not by the size of the thread's stack.
///
/// # Example
/// ```
/// use waixg::util::stack::ensure_sufficient_stack;
///
/// fn depth(n: u64) -> u64 {
///     ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
/// }
///
/// assert_eq!(depth(100_000), 100_000);
/// ```
#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

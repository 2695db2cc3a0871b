//! Stack safety for deep recursion.
//!
//! The parser and the evaluator are plain recursive descent over the syntax
//! tree, so a deeply nested expression or a long chain of calls recurses as
//! deep as the program does. Wrapping the recursive step in
//! [`ensure_sufficient_stack`] grows the native stack on demand instead of
//! overflowing it.
//!
//! On `wasm32` this is a passthrough; the host manages the stack there.

/// Remaining stack below which we grow (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each new stack segment (2MB).
const STACK_PER_RECURSION: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn eval_expr(&mut self, expr: &Expr, env: &Environment) -> Value {
///     ensure_sufficient_stack(|| self.eval_expr_inner(expr, env))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// Passthrough on `wasm32`.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

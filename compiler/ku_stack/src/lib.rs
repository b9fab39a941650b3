//! Stack growth for deeply nested source.
//!
//! The ku parser recurses once per nesting level of `[]T` slice types and
//! `{ ... }` blocks. Input like `[][][]...[]int` or a few hundred thousand
//! nested braces would otherwise overflow the thread stack, so each
//! recursive production runs inside [`ensure_sufficient_stack`].
//!
//! On native targets the stack is grown on demand with `stacker`. On
//! `wasm32` the closure is called directly.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each new stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first switching to a fresh stack segment if the current one is
/// close to exhausted.
///
/// ```text
/// fn parse_slice_element(&mut self) -> Result<TypeSpecifier<'src>, ParseError> {
///     ensure_sufficient_stack(|| self.parse_type_specifier())
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// `wasm32` manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mimics the parser's shape: one guarded frame per `[]` prefix.
    fn slice_depth(prefixes: &[u8]) -> usize {
        ensure_sufficient_stack(|| match prefixes {
            [b'[', b']', rest @ ..] => 1 + slice_depth(rest),
            _ => 0,
        })
    }

    #[test]
    fn shallow_nesting() {
        assert_eq!(slice_depth(b"[][]int"), 2);
        assert_eq!(slice_depth(b"int"), 0);
    }

    #[test]
    fn deep_nesting_does_not_overflow() {
        let source = b"[]".repeat(200_000);
        assert_eq!(slice_depth(&source), 200_000);
    }

    #[test]
    fn propagates_results() {
        let result: Result<u32, &str> = ensure_sufficient_stack(|| Err("expected type"));
        assert_eq!(result, Err("expected type"));
    }
}

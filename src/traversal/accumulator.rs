use core::marker::PhantomData;

/// The monoid combining per-node visit values into one traversal result.
///
/// `combine` must be associative with `empty()` as its identity; the engine relies on being
/// able to fold unresolved postorder steps in as `empty()` without changing the result.
pub trait Accumulator {
    /// The combined value type.
    type Value;
    /// Returns the identity value.
    fn empty(&self) -> Self::Value;
    /// Combines the running total with one visit's value.
    fn combine(&self, total: Self::Value, value: Self::Value) -> Self::Value;
}

impl<A: Accumulator + ?Sized> Accumulator for &A {
    type Value = A::Value;
    #[inline]
    fn empty(&self) -> Self::Value {
        (*self).empty()
    }
    #[inline]
    fn combine(&self, total: Self::Value, value: Self::Value) -> Self::Value {
        (*self).combine(total, value)
    }
}

/// Ordered sequence concatenation: each visit contributes a batch of items, the traversal
/// yields them all in visiting order.
#[derive(Copy, Clone, Debug, Default)]
pub struct Concat<T>(PhantomData<fn() -> T>);

impl<T> Concat<T> {
    /// Creates the concatenation accumulator.
    #[inline]
    pub fn new() -> Self {
        Self(PhantomData)
    }
}
impl<T> Accumulator for Concat<T> {
    type Value = Vec<T>;
    #[inline]
    fn empty(&self) -> Self::Value {
        Vec::new()
    }
    #[inline]
    fn combine(&self, mut total: Self::Value, mut value: Self::Value) -> Self::Value {
        total.append(&mut value);
        total
    }
}

/// The result-discarding accumulator used by side-effecting walks and by the reconstruction
/// operations, whose real output lives in a scratch table owned by the visit callback.
#[derive(Copy, Clone, Debug, Default)]
pub struct Discard;

impl Accumulator for Discard {
    type Value = ();
    #[inline]
    fn empty(&self) -> Self::Value {}
    #[inline]
    fn combine(&self, _total: Self::Value, _value: Self::Value) -> Self::Value {}
}

/// Seeded last-value-wins accumulation: `empty()` clones the seed and `combine` keeps the most
/// recent value.
///
/// This is the seed-and-visit folding style expressed in terms of the monoid contract. It is
/// only lawful under strategies that call the user visit exactly once per step, so it fits
/// breadth-first and preorder folds; postorder folds should carry their running value inside
/// the visit callback instead.
#[derive(Copy, Clone, Debug, Default)]
pub struct Replace<T: Clone> {
    seed: T,
}

impl<T: Clone> Replace<T> {
    /// Creates the accumulator with the given seed.
    #[inline]
    pub fn new(seed: T) -> Self {
        Self { seed }
    }
}
impl<T: Clone> Accumulator for Replace<T> {
    type Value = T;
    #[inline]
    fn empty(&self) -> Self::Value {
        self.seed.clone()
    }
    #[inline]
    fn combine(&self, _total: Self::Value, value: Self::Value) -> Self::Value {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concat_is_a_monoid() {
        let acc = Concat::new();
        let total = acc.combine(acc.combine(acc.empty(), vec![1]), vec![2, 3]);
        assert_eq!(total, [1, 2, 3]);
        assert_eq!(acc.combine(vec![1], acc.empty()), [1]);
    }

    #[test]
    fn replace_keeps_the_latest_value() {
        let acc = Replace::new(0);
        assert_eq!(acc.empty(), 0);
        assert_eq!(acc.combine(5, 7), 7);
    }
}

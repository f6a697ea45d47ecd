//! Higher-order helpers: composition, piping, partial application, and the
//! usual map/filter/fold/sort/zip over slices.

use std::ops::Add;

/// Returns a function computing `f(g(x))`.
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |x| f(g(x))
}

/// Threads `value` through each step in order.
///
/// ```
/// use usuarios_core::{lowercase, pipe, reverse, uppercase};
///
/// let steps: [&dyn Fn(String) -> String; 3] =
///     [&lowercase::<String>, &reverse::<String>, &uppercase::<String>];
/// assert_eq!(pipe("Bia".to_string(), &steps), "AIB");
/// ```
pub fn pipe<T>(value: T, steps: &[&dyn Fn(T) -> T]) -> T {
    steps.iter().fold(value, |acc, step| step(acc))
}

/// Applies `f` to every element, preserving order and length.
pub fn map_each<T, U, F>(f: F, items: &[T]) -> Vec<U>
where
    F: Fn(&T) -> U,
{
    items.iter().map(f).collect()
}

/// Fixes the first argument of a two-argument function.
pub fn partial_apply<A, B, R, F>(f: F, fixed: A) -> impl Fn(B) -> R
where
    A: Clone,
    F: Fn(A, B) -> R,
{
    move |b| f(fixed.clone(), b)
}

pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

/// Keeps the elements matching `predicate`.
pub fn filter_by<T, P>(items: &[T], predicate: P) -> Vec<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    items.iter().filter(|item| predicate(*item)).cloned().collect()
}

/// Left fold starting from `seed`.
pub fn reduce<T, A, F>(items: &[T], seed: A, f: F) -> A
where
    F: Fn(A, &T) -> A,
{
    items.iter().fold(seed, f)
}

/// Stable sort by `key`; ties keep their original relative order.
pub fn sort_by_key<T, K, F>(items: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut sorted = items.to_vec();
    sorted.sort_by_key(key);
    sorted
}

/// Pairs elements positionally, stopping at the shorter slice.
pub fn zip_pairs<A: Clone, B: Clone>(left: &[A], right: &[B]) -> Vec<(A, B)> {
    left.iter().cloned().zip(right.iter().cloned()).collect()
}

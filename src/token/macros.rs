/// Builds a [`Units`](crate::Units) set from a list of unit tags.
///
/// Duplicates collapse, order is irrelevant.
///
/// ```rust
/// use unitgraph::units;
///
/// let u = units![3, 1, 3];
/// assert_eq!(u.len(), 2);
/// assert!(units![].is_empty());
/// ```
#[macro_export]
macro_rules! units {
    () => {
        $crate::Units::new()
    };
    ($($unit:expr),+ $(,)?) => {
        <$crate::Units as ::core::iter::FromIterator<$crate::Unit>>::from_iter([$($unit),+])
    };
}

/// A macro helper for opening a freshly branded graph scope.
///
/// This provides a slightly more ergonomic syntax for `Graph::scope`. The
/// binding is an ordinary closure pattern: write `mut graph` to build the
/// graph inside the body, plain `graph` to only read it.
///
/// # Example
///
/// ```rust
/// use unitgraph::{scope, units};
///
/// let n = scope! { |mut graph| {
///     graph.add_vertex("A", units![]);
///     graph.num_vertexes()
/// }};
/// assert_eq!(n, 1);
/// ```
#[macro_export]
macro_rules! scope {
    (|$graph:pat_param| $body:block) => {
        $crate::Graph::scope(|$graph| $body)
    };
    (|$graph:pat_param| $body:expr) => {
        $crate::Graph::scope(|$graph| $body)
    };
}

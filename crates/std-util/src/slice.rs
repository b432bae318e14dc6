/// Asserts that a slice-like value has no elements.
#[macro_export]
macro_rules! assert_empty {
    ($e:expr) => {
        match &$e[..] {
            [] => {}
            items => panic!(
                "expected `{}` to be empty; got {} items: {:?}",
                stringify!($e),
                items.len(),
                items
            ),
        }
    };
}

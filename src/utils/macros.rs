/// Iterates in parallel over a collection when the `parallel` feature is on,
/// sequentially otherwise. Call sites need `rayon::prelude::*` in scope for the
/// parallel case.
#[macro_export]
macro_rules! cfg_iter {
    ($e:expr) => {{
        #[cfg(feature = "parallel")]
        let result = $e.par_iter();
        #[cfg(not(feature = "parallel"))]
        let result = $e.iter();
        result
    }};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! secret {
    ($val:expr) => {{
        $val
    }};
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! secret {
    ($val:expr) => {{
        "_"
    }};
}

//! Marker traits used across the quill crates

/// Marks handler outputs that are plain values rather than `Result`s.
///
/// An `on_result` handler is where the caller decides what an error turns
/// into, so whatever it returns must already be unwrapped.
pub trait NotResult {}

impl NotResult for bool {}
impl NotResult for () {}
impl NotResult for char {}
impl NotResult for String {}
impl NotResult for &str {}
impl<T> NotResult for Vec<T> {}
impl<T> NotResult for Option<T> {}
impl<T> NotResult for Box<T> {}
impl<T> NotResult for std::sync::Arc<T> {}
impl NotResult for u8 {}
impl NotResult for u16 {}
impl NotResult for u32 {}
impl NotResult for u64 {}
impl NotResult for usize {}
impl NotResult for i8 {}
impl NotResult for i16 {}
impl NotResult for i32 {}
impl NotResult for i64 {}
impl NotResult for isize {}

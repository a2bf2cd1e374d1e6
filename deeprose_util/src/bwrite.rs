//! Formatting into in-memory byte buffers.
//!
//! Generated headers are built up as raw bytes (the embedded source does not have to be UTF-8),
//! and writing into a `Vec<u8>` can never fail, so these macros drop the `io::Result`.

pub trait BytesMut {
    fn as_mut_bytes(&mut self) -> &mut Vec<u8>;
}

impl BytesMut for Vec<u8> {
    fn as_mut_bytes(&mut self) -> &mut Vec<u8> {
        self
    }
}

impl<T: BytesMut> BytesMut for &mut T {
    fn as_mut_bytes(&mut self) -> &mut Vec<u8> {
        (*self).as_mut_bytes()
    }
}

/// Variant of write! that only works for byte vectors, and doesn't return a spurious error.
#[macro_export]
macro_rules! bwrite {
    ($dst:expr, $($arg:tt)*) => {{
        use std::io::Write;
        use $crate::bwrite::BytesMut;
        let dst = $dst.as_mut_bytes();
        write!(dst, $($arg)*).unwrap();
    }};
}

/// Variant of writeln! that only works for byte vectors, and doesn't return a spurious error.
#[macro_export]
macro_rules! bwriteln {
    ($dst:expr $(,)?) => {{
        use std::io::Write;
        use $crate::bwrite::BytesMut;
        let dst = $dst.as_mut_bytes();
        writeln!(dst).unwrap();
    }};
    ($dst:expr, $($arg:tt)*) => {{
        use std::io::Write;
        use $crate::bwrite::BytesMut;
        let dst = $dst.as_mut_bytes();
        writeln!(dst, $($arg)*).unwrap();
    }};
}

#[macro_export]
macro_rules! deeprose_manifest_file_name_macro {
    () => {
        "deeprose.toml"
    };
}

#[macro_export]
macro_rules! deeprose_default_input_macro {
    () => {
        "programs/stdlib.deeprose"
    };
}

pub const DEEPROSE_MANIFEST_FILE_NAME: &str = deeprose_manifest_file_name_macro!();
pub const DEEPROSE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Stdlib source location, relative to the directory the build runs in.
pub const STDLIB_DEFAULT_INPUT: &str = deeprose_default_input_macro!();

// The consuming interpreter includes this header by name and refers to the symbol,
//   changing any of these breaks its build.
pub const STDLIB_HEADER_FILE_NAME: &str = "stdlib.h";
pub const STDLIB_HEADER_GUARD: &str = "STDLIB_HEADER__";
pub const STDLIB_SYMBOL_NAME: &str = "stdlib";

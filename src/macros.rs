/// Generates a message containing the current source file name and line number.
///
/// # Examples
///
/// ```text
/// err!("Session is gone.");
/// Result:
/// "src/installer/flow.rs:7 Session is gone."
/// ```
#[macro_export]
macro_rules! err {
    { $($arg:tt)+ } => {
        format!("{}:{} {}", file!(), line!(), format_args!($($arg)+))
    };
    {} => {
        format!("{}:{}", file!(), line!())
    };
}

use crate::error::JsonTreeError;

pub type JsonTreeResult<T> = Result<T, JsonTreeError>;

#[macro_export]
macro_rules! context {
    ($fmt:expr $(, $($args:expr),+)? => $($stmts:stmt)+) => {
        (|| {
            $($stmts)+
        })().map_err(|e| $crate::error::JsonTreeError::from(e).context(format!(concat!("Failed to ",$fmt) $(, $($args),+)?)))
    };
}

//! log macro's for unit test logging

/// Writes a debug! message to the app::test logger
#[macro_export]
macro_rules! ut_debug {
    ($($arg:tt)+) => {
        log::debug!(target: "app::test", $($arg)+)
    };
}

/// Writes an info! message to the app::test logger
#[macro_export]
macro_rules! ut_info {
    ($($arg:tt)+) => {
        log::info!(target: "app::test", $($arg)+)
    };
}

/// Writes an warn! message to the app::test logger
#[macro_export]
macro_rules! ut_warn {
    ($($arg:tt)+) => {
        log::warn!(target: "app::test", $($arg)+)
    };
}

/// Writes an error! message to the app::test logger
#[macro_export]
macro_rules! ut_error {
    ($($arg:tt)+) => {
        log::error!(target: "app::test", $($arg)+)
    };
}

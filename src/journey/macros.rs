//! log macro's for journey logging

/// Writes a debug! message to the app::journey logger
#[macro_export]
macro_rules! journey_debug {
    ($($arg:tt)+) => {
        log::debug!(target: "app::journey", $($arg)+)
    };
}

/// Writes an info! message to the app::journey logger
#[macro_export]
macro_rules! journey_info {
    ($($arg:tt)+) => {
        log::info!(target: "app::journey", $($arg)+)
    };
}

/// Writes an warn! message to the app::journey logger
#[macro_export]
macro_rules! journey_warn {
    ($($arg:tt)+) => {
        log::warn!(target: "app::journey", $($arg)+)
    };
}

/// Writes an error! message to the app::journey logger
#[macro_export]
macro_rules! journey_error {
    ($($arg:tt)+) => {
        log::error!(target: "app::journey", $($arg)+)
    };
}

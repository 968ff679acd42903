#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)+) => {
        log::debug!($($arg)+)
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)+) => {
        log::info!($($arg)+)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)+) => {
        log::warn!($($arg)+)
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)+) => {
        log::error!($($arg)+)
    };
}

// goes to the "finished" logger, one line per finished dispatch
#[macro_export]
macro_rules! log_finished {
    ($($arg:tt)+) => {
        log::info!(target: "finished", $($arg)+)
    };
}

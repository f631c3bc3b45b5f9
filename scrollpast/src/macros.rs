#[cfg(feature = "tracing")]
macro_rules! sptrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "scrollpast", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! sptrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! spdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "scrollpast", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! spdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! spwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "scrollpast", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! spwarn {
    ($($tt:tt)*) => {};
}

#[doc(hidden)]
#[cfg(feature = "rand")]
#[macro_export]
macro_rules! cfg_rand {
    ($($item:item)*) => { $($item)* };
}

#[doc(hidden)]
#[cfg(not(feature = "rand"))]
#[macro_export]
macro_rules! cfg_rand {
    ($($item:item)*) => {};
}

#[doc(hidden)]
#[cfg(feature = "json")]
#[macro_export]
macro_rules! cfg_json {
    ($($item:item)*) => { $($item)* };
}

#[doc(hidden)]
#[cfg(not(feature = "json"))]
#[macro_export]
macro_rules! cfg_json {
    ($($item:item)*) => {};
}

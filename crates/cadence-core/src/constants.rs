/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const APP_ROUTE_COMPONENT: &str = "app";
pub const APP_ROUTE_PREFIX: &str = const_str::concat!(API_ROUTE_PREFIX, "/", APP_ROUTE_COMPONENT);

pub const SERIES_ROUTE_COMPONENT: &str = "series";
pub const SERIES_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", SERIES_ROUTE_COMPONENT);

pub const SERIES_PREVIEW_ROUTE_COMPONENT: &str = "preview";
pub const SERIES_PREVIEW_ROUTE: &str =
    const_str::concat!(SERIES_ROUTE_PREFIX, "/", SERIES_PREVIEW_ROUTE_COMPONENT);

/// Number of days in the repeat cycle.
pub const DAYS_PER_WEEK: u32 = 7;

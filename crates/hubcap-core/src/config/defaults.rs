//! Built-in names and fallback values.
//!
//! Every name an override source is queried by, every default capability key
//! and the fixed location of the configuration file live here so the
//! resolvers never hardcode them inline.

/// Location of the configuration file, relative to the working directory.
pub const CONFIG_FILE: &str = "configuration/capabilities.json";

/// Override names recognized by the resolvers.
pub mod overrides {
    /// Capability key to store the platform name under.
    pub const PLATFORM_NAME: &str = "PLATFORM_NAME";
    /// Capability key to store the platform version under.
    pub const PLATFORM_VERSION: &str = "PLATFORM_VERSION";
    /// Capability key to store the device name under.
    pub const DEVICE_NAME: &str = "DEVICE_NAME";
    /// Capability key to store the application location under.
    pub const APP_LOCATION: &str = "APP_LOCATION";
    /// When non-empty, the application is installed at session start.
    pub const TO_INSTALL: &str = "TO_INSTALL";
    /// Deployment target selector.
    pub const TARGET_SUT: &str = "TARGET_SUT";
    pub const BROWSERSTACK_USERNAME: &str = "BROWSERSTACK_USERNAME";
    pub const BROWSERSTACK_ACCESS_KEY: &str = "BROWSERSTACK_ACCESS_KEY";

    /// All recognized override names, in lookup order.
    pub const ALL: &[&str] = &[
        PLATFORM_NAME,
        PLATFORM_VERSION,
        DEVICE_NAME,
        APP_LOCATION,
        TO_INSTALL,
        TARGET_SUT,
        BROWSERSTACK_USERNAME,
        BROWSERSTACK_ACCESS_KEY,
    ];
}

/// Standard mobile capability names used when no override remaps them.
pub mod capability_keys {
    pub const PLATFORM_NAME: &str = "platformName";
    pub const PLATFORM_VERSION: &str = "platformVersion";
    pub const DEVICE_NAME: &str = "deviceName";
    pub const APP: &str = "app";
    pub const APP_ACTIVITY: &str = "appActivity";
    pub const APP_PACKAGE: &str = "appPackage";
}

/// Field names in the configuration document.
pub mod fields {
    pub const PLATFORM_NAME: &str = "platformName";
    pub const PLATFORM_VERSION: &str = "platformVersion";
    pub const DEVICE_NAME: &str = "deviceName";
    pub const APP_LOCATION: &str = "appLocation";
    pub const APP_ACTIVITY: &str = "appActivity";
    pub const APP_PACKAGE: &str = "appPackage";

    pub const LOCAL_ENV: &str = "localEnv";
    pub const LOCAL_URL: &str = "url";

    pub const BROWSERSTACK_ENV: &str = "BrowserStackEnv";
    pub const BROWSERSTACK_USERNAME: &str = "username";
    pub const BROWSERSTACK_ACCESS_KEY: &str = "access_key";
    pub const BROWSERSTACK_SERVER: &str = "server";
}

/// Returns the target selector used when `TARGET_SUT` is not set.
pub fn default_target() -> &'static str {
    crate::targets::default_target_name()
}

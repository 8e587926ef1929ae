pub mod env {
    pub const TWILIO_ACCOUNT_SID_ENV_VAR: &str = "TWILIO_ACCOUNT_SID";
    pub const TWILIO_AUTH_TOKEN_ENV_VAR: &str = "TWILIO_AUTH_TOKEN";
    pub const TWILIO_VERIFICATION_SID_ENV_VAR: &str = "TWILIO_VERIFICATION_SID";

    /// Prefix of configuration overrides, e.g. `VERITY__SESSION__STORE=redis`.
    pub const SETTINGS_ENV_PREFIX: &str = "VERITY";
    pub const SETTINGS_ENV_SEPARATOR: &str = "__";
}

/// Optional configuration file, relative to the working directory.
pub const SETTINGS_FILE: &str = "config/base";

pub const DEFAULT_SESSION_COOKIE_NAME: &str = "verity_session";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub const ASSETS_DIR: &str = "assets";
    pub const SESSION_TTL_IN_SECONDS: u64 = 3600;
    pub const REDIS_HOST_NAME: &str = "127.0.0.1";

    pub mod twilio {
        pub const BASE_URL: &str = "https://verify.twilio.com";
        pub const TIMEOUT_IN_MILLIS: u64 = 10_000;
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";

    pub mod twilio {
        use std::time::Duration;

        pub const TIMEOUT: Duration = Duration::from_millis(200);
    }
}

use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const SALON_NAME: &str = "Vitória Nail Designer";

/// How long after a booking the customer is sent to their appointments.
pub const BOOKING_REDIRECT_DELAY: Duration = Duration::from_secs(2);
pub const SPLASH_TICK: Duration = Duration::from_millis(100);

#[derive(Clone, Debug, PartialEq)]
pub struct Contact {
    pub whatsapp: String,
    pub instagram: String,
    pub map: String,
}

impl Default for Contact {
    fn default() -> Self {
        Contact {
            whatsapp: "http://wa.me/5548998164811".to_owned(),
            instagram: "https://www.instagram.com/vitoriaext_nail/".to_owned(),
            map: "https://www.google.com/maps?q=-28.770416,-49.372613".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_base_url: String,
    /// Splash screen length, shown once per browser session.
    pub splash: Duration,
    pub contact: Contact,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: DEFAULT_API_URL.to_owned(),
            splash: Duration::from_secs(7),
            contact: Contact::default(),
        }
    }
}

impl Config {
    /// Configuration baked in at compile time, `SALON_API_URL` overrides the
    /// API location. The browser build has no runtime environment to read.
    pub fn from_build_env() -> Self {
        match option_env!("SALON_API_URL").filter(|url| !url.trim().is_empty()) {
            Some(url) => Config::default().with_api_base_url(url),
            None => Config::default(),
        }
    }

    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    pub fn splash_ticks(&self) -> u32 {
        let ticks = self.splash.as_millis() / SPLASH_TICK.as_millis();
        u32::try_from(ticks).unwrap_or(u32::MAX).max(1)
    }

    /// Splash progress in percent after `tick` ticks of [`SPLASH_TICK`].
    pub fn splash_progress(&self, tick: u32) -> f64 {
        (f64::from(tick) * 100.0 / f64::from(self.splash_ticks())).min(100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, 0.0; "start")]
    #[test_case(35, 50.0; "halfway")]
    #[test_case(70, 100.0; "done")]
    #[test_case(90, 100.0; "clamped")]
    fn splash_progress(tick: u32, expected: f64) {
        let config = Config::default();
        assert!((config.splash_progress(tick) - expected).abs() < 1e-9);
    }

    #[test]
    fn zero_length_splash_completes_at_once() {
        let config = Config {
            splash: Duration::ZERO,
            ..Default::default()
        };

        assert_eq!(config.splash_ticks(), 1);
        assert_eq!(config.splash_progress(1), 100.0);
    }

    #[test]
    fn api_base_url_override() {
        let config = Config::default().with_api_base_url("https://api.example.com");
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.splash, Duration::from_secs(7));
    }
}

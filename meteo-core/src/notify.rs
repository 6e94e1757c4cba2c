use tokio::sync::watch;
use tracing::debug;

use crate::{classify::Gradient, model::WeatherSummary};

/// One-way feed of the page background. Holds the neutral gradient until a
/// resolution succeeds, then the latest summary's gradient.
#[derive(Debug)]
pub struct BackgroundChannel {
    tx: watch::Sender<String>,
}

impl BackgroundChannel {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Gradient::Neutral.css().to_string());
        Self { tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.tx.subscribe()
    }

    pub fn current(&self) -> String {
        self.tx.borrow().clone()
    }

    /// Push the gradient of a freshly resolved summary.
    pub fn publish(&self, summary: &WeatherSummary) {
        let color = if summary.color.trim().is_empty() {
            Gradient::Neutral.css().to_string()
        } else {
            summary.color.clone()
        };

        debug!(%color, city = %summary.city, "background updated");
        // No receivers is fine: the latest value is kept for later subscribers.
        self.tx.send_replace(color);
    }
}

impl Default for BackgroundChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(color: &str) -> WeatherSummary {
        WeatherSummary {
            city: "Paris (France)".into(),
            temp: 20,
            feels: 20,
            humidity: 50,
            wind: 10,
            desc: "☀️ Ciel dégagé".into(),
            color: color.into(),
            uv_index: 5.0,
            uv_text: "modéré".into(),
            pressure: 1013,
            precip_prob: 0,
            visibility_km: 24,
            sunrise: "07:00".into(),
            sunset: "20:30".into(),
            sun_progress: 50.0,
            sun_color: "#fda085".into(),
            max: 25,
            min: 14,
            hours: vec![],
            days: vec![],
        }
    }

    #[test]
    fn starts_neutral() {
        let channel = BackgroundChannel::new();
        assert_eq!(channel.current(), Gradient::Neutral.css());
    }

    #[tokio::test]
    async fn subscribers_see_latest_publish() {
        let channel = BackgroundChannel::new();
        let mut rx = channel.subscribe();

        channel.publish(&summary(Gradient::Clear.css()));
        channel.publish(&summary(Gradient::Storm.css()));

        rx.changed().await.expect("sender alive");
        assert_eq!(*rx.borrow_and_update(), Gradient::Storm.css());
    }

    #[test]
    fn empty_color_falls_back_to_neutral() {
        let channel = BackgroundChannel::new();
        channel.publish(&summary(Gradient::Rain.css()));
        channel.publish(&summary("  "));
        assert_eq!(channel.current(), Gradient::Neutral.css());
    }

    #[test]
    fn publish_without_subscribers_keeps_value() {
        let channel = BackgroundChannel::new();
        channel.publish(&summary(Gradient::Snow.css()));
        assert_eq!(*channel.subscribe().borrow(), Gradient::Snow.css());
    }
}

use color_eyre::eyre::{WrapErr, eyre};
use league_core::transfers::NegotiationSettings;
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:18000";

pub struct AppConfig {
    pub listen_addr: SocketAddr,
    pub seed: u64,
    pub settings: NegotiationSettings,
}

impl AppConfig {
    pub fn from_env() -> color_eyre::Result<Self> {
        let listen_addr = env_or("LISTEN_ADDR", DEFAULT_LISTEN_ADDR.parse()?)?;
        let seed = env_or("NEGOTIATION_SEED", rand::random::<u64>())?;

        let defaults = NegotiationSettings::default();

        let settings = NegotiationSettings {
            max_rounds: env_or("NEGOTIATION_MAX_ROUNDS", defaults.max_rounds)?,
            sell_batch_min: env_or("SELL_BATCH_MIN", defaults.sell_batch_min)?,
            sell_batch_max: env_or("SELL_BATCH_MAX", defaults.sell_batch_max)?,
            ..defaults
        };

        if settings.max_rounds == 0 {
            return Err(eyre!("NEGOTIATION_MAX_ROUNDS must be at least 1"));
        }

        if settings.sell_batch_min > settings.sell_batch_max {
            return Err(eyre!("SELL_BATCH_MIN is greater than SELL_BATCH_MAX"));
        }

        Ok(AppConfig {
            listen_addr,
            seed,
            settings,
        })
    }
}

fn env_or<T>(name: &str, default: T) -> color_eyre::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .wrap_err_with(|| format!("invalid {}: {}", name, value)),
        Err(_) => Ok(default),
    }
}

// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, Flags};
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_toast=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        save_config: args.contains("--save-config"),
        config_path: args
            .opt_value_from_os_str("--config", |value| {
                Ok::<_, std::convert::Infallible>(std::path::PathBuf::from(value))
            })
            .unwrap_or_default(),
    };

    app::run(flags)
}

use cinema_site::{boot, SiteConfig};

fn main() {
    console_error_panic_hook::set_once();

    let (config, rejected) = SiteConfig::from_build_env();
    // Only fails if a logger is already installed.
    let _ = console_log::init_with_level(config.log_level);
    for err in rejected {
        log::warn!("{err}, keeping the default for that setting");
    }

    if let Err(err) = boot(config) {
        log::error!("startup failed: {err}");
    }
}

use crate::cli::Args;
use crate::config::WatchConfig;
use crate::consts::portal_base_url;
use crate::error::AppError;
use crate::notify::DesktopNotifier;
use crate::output::Reporter;
use crate::portal::PortalClient;
use crate::watch::Watcher;

/// Wire everything together and run the watch.
///
/// Returns only when the exit-after-first policy has found its slot or a
/// failure ends the run; under the keep-watching policy the loop is
/// stopped by interrupting the process.
pub(crate) fn run(args: &Args) -> Result<(), AppError> {
    let mut reporter = Reporter::new(args.use_color());
    reporter.banner("Welcome to the 42 correction slot watcher!");

    let config = WatchConfig::resolve(args)?;
    let client = PortalClient::new(portal_base_url(), &config);
    let notifier = DesktopNotifier;

    reporter.start_searching();
    let outcome = {
        let mut watcher = Watcher::new(&config, &client, &notifier, &reporter);
        watcher.run()
    };
    reporter.stop();

    let slot = outcome?;
    reporter.banner(&format!("Found a slot for {}: {}", config.project, slot));
    Ok(())
}

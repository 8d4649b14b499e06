use std::panic;

use log::{error, info};
use rsbinder::Interface;

use rsinstaller::consts::SERVICE_NAME;
use rsinstaller::installer::service::InstallerService;
use rsinstaller::logging;

fn main() -> anyhow::Result<()> {
    logging::init_logger();
    rsbinder::ProcessState::init_default();

    // Redirect panic messages to the log.
    panic::set_hook(Box::new(|panic_info| {
        error!("{}", panic_info);
    }));

    let service = InstallerService::new_native_binder();
    rsbinder::hub::add_service(SERVICE_NAME, service.as_binder())?;
    info!("registered {} with the service manager", SERVICE_NAME);

    rsbinder::ProcessState::join_thread_pool()?;
    Ok(())
}

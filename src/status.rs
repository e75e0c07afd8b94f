// Status display: renders the permission gate's two states.

use colored::Colorize;

use crate::gate::AccessProbe;

/// Display whether the listener holds notification access.
///
/// Two mutually exclusive states, selected purely by the probe: active
/// (green, echoes the forwarding configuration) or configuration required
/// (red, prints the manual grant steps). Granting access happens on the
/// device itself; all this process can do is tell the user how.
pub fn show(
    probe: &dyn AccessProbe,
    own_package: &str,
    source_package: &str,
    server_url: &str,
    device_id: &str,
) {
    if probe.is_authorized() {
        println!("{}", "Notification access: ACTIVE".green().bold());
        println!();
        println!("  Listener:   {own_package}");
        println!("  Watching:   {source_package}");
        if server_url.is_empty() {
            println!("  Target:     {}", "not configured (set MAGPIE_SERVER_URL)".yellow());
        } else {
            println!("  Target:     {server_url}");
        }
        println!("  Device id:  {device_id}");
        println!();
        println!(
            "{}",
            "Qualifying notifications will be forwarded automatically.".dimmed()
        );
        println!("{}", "Run `magpie run` to start the forwarder.".dimmed());
    } else {
        println!("{}", "Notification access: CONFIGURATION REQUIRED".red().bold());
        println!();
        println!("  The device has not granted notification access to {own_package}.");
        println!("  Without it the listener receives no notification events.");
        println!();
        println!("  1. On the device, open Settings > Notifications > Device & app");
        println!("     notification access, and enable {own_package}");
        println!("  2. Export the updated listener list:");
        println!("       adb shell settings get secure enabled_notification_listeners");
        println!("  3. Set MAGPIE_ENABLED_LISTENERS to that value and re-run `magpie status`");
    }
}
